//! Month-grid formatting for the calendar view model.

use std::fmt;

use super::datetime::Duration;
use crate::calendar::MonthView;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Newtype wrapper rendering a [`MonthView`] as a markdown day list.
///
/// One line per plan day falling in the month: status icon, date, day
/// number, and the tracked total when it clears the display threshold.
pub struct MonthGrid(pub MonthView);

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = &self.0;
        let name = MONTH_NAMES
            .get(view.month.month as usize - 1)
            .unwrap_or(&"?");
        writeln!(f, "## {} {}", name, view.month.year)?;
        writeln!(f)?;

        if view.days.is_empty() {
            return writeln!(f, "No plan days in this month.");
        }

        for day in &view.days {
            write!(
                f,
                "- {} {} Day {} ({})",
                day.status.icon(),
                day.date.strftime("%b %d"),
                day.number,
                day.status
            )?;
            if day.shows_elapsed() {
                write!(f, " · {}", Duration(day.elapsed_seconds))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::calendar::{month_view, Month};
    use crate::models::Day;

    fn plain_day(number: u32) -> Day {
        Day {
            number,
            title: String::new(),
            description: String::new(),
            tasks: vec![],
            notes: None,
            sessions: vec![],
        }
    }

    #[test]
    fn test_grid_lists_month_days_with_icons() {
        let start = date(2025, 4, 28);
        let days: Vec<Day> = (1..=5).map(plain_day).collect();
        let view = month_view(
            start,
            &days,
            Month { year: 2025, month: 5 },
            date(2025, 5, 1),
            Timestamp::from_second(0).unwrap(),
        )
        .unwrap();

        let output = MonthGrid(view).to_string();
        assert!(output.contains("## May 2025"));
        // Day 4 falls on May 1 (today)
        assert!(output.contains("● May 01 Day 4 (today)"));
        assert!(output.contains("○ May 02 Day 5 (upcoming)"));
    }

    #[test]
    fn test_grid_handles_month_without_plan_days() {
        let start = date(2025, 4, 1);
        let days: Vec<Day> = (1..=60).map(plain_day).collect();
        // All of April and May are populated; check April renders fully
        let view = month_view(
            start,
            &days,
            Month { year: 2025, month: 4 },
            date(2025, 4, 1),
            Timestamp::from_second(0).unwrap(),
        )
        .unwrap();
        assert_eq!(view.days.len(), 30);
    }
}
