//! Calendar view model: pure date math over a plan's day sequence.
//!
//! Maps 1-based day numbers onto calendar dates, buckets days by month,
//! and classifies each day for display. Everything here is a pure function
//! of its inputs (start date, day list, "today", "now"), which keeps the
//! whole module directly testable; callers derive those reference points
//! from the system timezone.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::{Span, Timestamp};

use crate::error::{OrganizerError, Result};
use crate::models::{Day, DayStatus};

/// Minimum tracked total before elapsed time is worth displaying.
///
/// Filters out accidental stopwatch starts.
pub const ELAPSED_DISPLAY_THRESHOLD_SECS: i64 = 60;

/// A calendar month, the navigation unit of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    /// Calendar year
    pub year: i16,
    /// Calendar month (1-12)
    pub month: i8,
}

impl Month {
    /// The month containing a date.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Whether a date falls inside this month.
    pub fn contains(self, date: Date) -> bool {
        self == Self::of(date)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month '{s}': expected YYYY-MM"))?;
        let year: i16 = year
            .parse()
            .map_err(|_| format!("Invalid year in '{s}'"))?;
        let month: i8 = month
            .parse()
            .map_err(|_| format!("Invalid month in '{s}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range in '{s}'"));
        }
        Ok(Self { year, month })
    }
}

/// One plan day placed on the calendar with its computed display state.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// 1-based day number within the plan
    pub number: u32,
    /// Calendar date the day falls on
    pub date: Date,
    /// Computed display status
    pub status: DayStatus,
    /// Total tracked study time in seconds (open sessions counted to "now")
    pub elapsed_seconds: i64,
}

impl CalendarDay {
    /// Whether the tracked total is large enough to display.
    pub fn shows_elapsed(&self) -> bool {
        self.elapsed_seconds > ELAPSED_DISPLAY_THRESHOLD_SECS
    }
}

/// One month's bucket of plan days.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    /// The month on display
    pub month: Month,
    /// Plan days falling inside the month, in day-number order
    pub days: Vec<CalendarDay>,
}

/// Maps a 1-based day number to its calendar date.
///
/// Day 1 falls on the start date; day N on start + (N - 1) days.
pub fn day_date(start: Date, number: u32) -> Result<Date> {
    start
        .checked_add(Span::new().days(i64::from(number) - 1))
        .map_err(|e| OrganizerError::invalid_input("day_number", e.to_string()))
}

/// Classifies one day for display.
///
/// Precedence: all tasks done beats everything, then a passed date is
/// missed, today's date is today, and the rest is upcoming. A day with no
/// tasks can never be completed - "all of zero tasks" would be vacuously
/// true otherwise.
pub fn classify(day: &Day, date: Date, today: Date) -> DayStatus {
    let all_done = !day.tasks.is_empty() && day.tasks.iter().all(|t| t.done);
    if all_done {
        DayStatus::Completed
    } else if date < today {
        DayStatus::Missed
    } else if date == today {
        DayStatus::Today
    } else {
        DayStatus::Upcoming
    }
}

/// Total tracked study time for a day, in seconds.
///
/// An open session is counted up to `now`.
pub fn elapsed_seconds(day: &Day, now: Timestamp) -> i64 {
    day.sessions
        .iter()
        .map(|s| {
            let end = s.ended_at.unwrap_or(now);
            (end.as_second() - s.started_at.as_second()).max(0)
        })
        .sum()
}

/// Navigable month range for a plan.
///
/// The earliest month is the start date's month; the latest is the month
/// containing the plan's final day (start + duration - 1).
pub fn month_bounds(start: Date, duration_days: u32) -> Result<(Month, Month)> {
    let last = day_date(start, duration_days.max(1))?;
    Ok((Month::of(start), Month::of(last)))
}

/// Builds one month's calendar bucket for a plan.
///
/// Months outside the navigable range are rejected so the caller's view
/// stays put.
pub fn month_view(
    start: Date,
    days: &[Day],
    month: Month,
    today: Date,
    now: Timestamp,
) -> Result<MonthView> {
    let (first, last) = month_bounds(start, days.len() as u32)?;
    if month < first || month > last {
        return Err(OrganizerError::invalid_input(
            "month",
            format!("{month} is outside the plan's range {first}..{last}"),
        ));
    }

    let mut bucket = Vec::new();
    for day in days {
        let date = day_date(start, day.number)?;
        if month.contains(date) {
            bucket.push(CalendarDay {
                number: day.number,
                date,
                status: classify(day, date, today),
                elapsed_seconds: elapsed_seconds(day, now),
            });
        }
    }

    Ok(MonthView {
        month,
        days: bucket,
    })
}

/// The day number to auto-select when opening a plan.
///
/// If today falls within [start, start + duration), that is the day whose
/// number equals days-since-start + 1; outside the window there is nothing
/// to select.
pub fn current_day_number(start: Date, duration_days: u32, today: Date) -> Option<u32> {
    let since = i64::from(start.until(today).ok()?.get_days());
    if since < 0 || since >= i64::from(duration_days) {
        return None;
    }
    Some(since as u32 + 1)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Task;

    fn day_with_tasks(number: u32, done: &[bool]) -> Day {
        Day {
            number,
            title: format!("Day {number}"),
            description: String::new(),
            tasks: done
                .iter()
                .map(|&d| Task {
                    done: d,
                    ..Task::new("task".to_string(), vec![])
                })
                .collect(),
            notes: None,
            sessions: vec![],
        }
    }

    #[test]
    fn test_day_one_maps_to_start_date() {
        let start = date(2025, 3, 10);
        assert_eq!(day_date(start, 1).unwrap(), start);
    }

    #[test]
    fn test_day_date_crosses_month_boundary() {
        // Jan 30 + 4 days lands on Feb 3 in a non-leap year
        let start = date(2025, 1, 30);
        assert_eq!(day_date(start, 5).unwrap(), date(2025, 2, 3));
    }

    #[test]
    fn test_day_date_crosses_year_boundary() {
        let start = date(2024, 12, 30);
        assert_eq!(day_date(start, 3).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_day_date_leap_february() {
        let start = date(2024, 2, 28);
        assert_eq!(day_date(start, 2).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_classify_completed_beats_missed() {
        let day = day_with_tasks(1, &[true, true]);
        let status = classify(&day, date(2025, 1, 1), date(2025, 6, 1));
        assert_eq!(status, DayStatus::Completed);
    }

    #[test]
    fn test_classify_zero_tasks_never_completed() {
        let day = day_with_tasks(1, &[]);
        assert_eq!(
            classify(&day, date(2025, 1, 1), date(2025, 6, 1)),
            DayStatus::Missed
        );
        assert_eq!(
            classify(&day, date(2025, 6, 1), date(2025, 6, 1)),
            DayStatus::Today
        );
        assert_eq!(
            classify(&day, date(2025, 7, 1), date(2025, 6, 1)),
            DayStatus::Upcoming
        );
    }

    #[test]
    fn test_classify_partial_past_day_is_missed() {
        let day = day_with_tasks(1, &[true, false]);
        assert_eq!(
            classify(&day, date(2025, 1, 1), date(2025, 6, 1)),
            DayStatus::Missed
        );
    }

    #[test]
    fn test_elapsed_counts_open_session_to_now() {
        use crate::models::Session;
        use jiff::Timestamp;

        let mut day = day_with_tasks(1, &[]);
        day.sessions = vec![
            Session {
                started_at: Timestamp::from_second(1000).unwrap(),
                ended_at: Some(Timestamp::from_second(1600).unwrap()),
            },
            Session {
                started_at: Timestamp::from_second(2000).unwrap(),
                ended_at: None,
            },
        ];

        let now = Timestamp::from_second(2100).unwrap();
        assert_eq!(elapsed_seconds(&day, now), 600 + 100);
    }

    #[test]
    fn test_month_bounds_span_start_to_final_day() {
        let start = date(2025, 1, 20);
        let (first, last) = month_bounds(start, 30).unwrap();
        assert_eq!(first, Month { year: 2025, month: 1 });
        // Day 30 falls on Feb 18
        assert_eq!(last, Month { year: 2025, month: 2 });
    }

    #[test]
    fn test_month_view_rejects_out_of_range_month() {
        let start = date(2025, 1, 20);
        let days: Vec<Day> = (1..=10).map(|n| day_with_tasks(n, &[])).collect();

        let err = month_view(
            start,
            &days,
            Month { year: 2025, month: 3 },
            date(2025, 1, 21),
            Timestamp::from_second(0).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, OrganizerError::InvalidInput { .. }));
    }

    #[test]
    fn test_month_view_buckets_only_matching_days() {
        let start = date(2025, 1, 30);
        let days: Vec<Day> = (1..=6).map(|n| day_with_tasks(n, &[])).collect();

        let view = month_view(
            start,
            &days,
            Month { year: 2025, month: 2 },
            date(2025, 1, 30),
            Timestamp::from_second(0).unwrap(),
        )
        .unwrap();

        // Days 3..=6 fall on Feb 1..=4
        let numbers: Vec<u32> = view.days.iter().map(|d| d.number).collect();
        assert_eq!(numbers, vec![3, 4, 5, 6]);
        assert_eq!(view.days[0].date, date(2025, 2, 1));
    }

    #[test]
    fn test_current_day_number_window() {
        let start = date(2025, 5, 10);
        assert_eq!(current_day_number(start, 7, date(2025, 5, 9)), None);
        assert_eq!(current_day_number(start, 7, date(2025, 5, 10)), Some(1));
        assert_eq!(current_day_number(start, 7, date(2025, 5, 16)), Some(7));
        assert_eq!(current_day_number(start, 7, date(2025, 5, 17)), None);
    }

    #[test]
    fn test_month_parse_and_display() {
        let month: Month = "2025-02".parse().unwrap();
        assert_eq!(month, Month { year: 2025, month: 2 });
        assert_eq!(month.to_string(), "2025-02");
        assert!("2025-13".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_next_previous_wrap_years() {
        let dec = Month { year: 2024, month: 12 };
        assert_eq!(dec.next(), Month { year: 2025, month: 1 });
        assert_eq!(dec.next().previous(), dec);
    }
}
