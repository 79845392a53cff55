//! Mentor CLI Application
//!
//! Command-line interface for the Mentor study-plan organizer.

mod args;
mod cli;
mod config;
mod openai;
mod quiz_runner;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mentor_core::OrganizerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        state_file,
        no_color,
        command,
    } = Args::parse();

    let organizer = OrganizerBuilder::new()
        .with_state_path(state_file)
        .build()
        .context("Failed to initialize organizer")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Mentor started");

    let cli = Cli::new(organizer, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Calendar(args)) => cli.handle_calendar(args).await,
        Some(Quiz(args)) => cli.handle_quiz(args).await,
        None => cli.list_plans().await,
    }
}
