//! Month calendar formatting
//!
//! Renders a week grid with a marker after each day number:
//! `*` for days with spending, `!` for days over the daily limit.

use chrono::{Datelike, Weekday};

use super::money::MoneyFormat;
use crate::services::{CalendarDay, MonthCalendar, MonthlyStatus};

const CELL_WIDTH: usize = 4;

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

/// "June 2025"
pub fn month_title(calendar: &MonthCalendar) -> String {
    let index = calendar.month.month().saturating_sub(1) as usize;
    format!(
        "{} {}",
        MONTH_NAMES.get(index).copied().unwrap_or("?"),
        calendar.month.year()
    )
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn format_cell(day: &CalendarDay) -> String {
    let mark = if day.marker.exceeded {
        '!'
    } else if day.marker.has_spending {
        '*'
    } else {
        ' '
    };
    format!("{:>3}{}", day.date.day(), mark)
}

/// The week grid only
pub fn format_grid(calendar: &MonthCalendar) -> String {
    let mut output = String::new();

    let mut weekday = calendar.week_start;
    let mut header = String::new();
    for _ in 0..7 {
        header.push_str(&format!("{:>3} ", weekday_label(weekday)));
        weekday = weekday.succ();
    }
    output.push_str(header.trim_end());
    output.push('\n');

    let mut cells: Vec<String> = (0..calendar.leading_blanks)
        .map(|_| " ".repeat(CELL_WIDTH))
        .collect();
    cells.extend(calendar.days.iter().map(format_cell));

    for week in cells.chunks(7) {
        output.push_str(week.concat().trim_end());
        output.push('\n');
    }

    output
}

/// Monthly limit, spending and remaining lines
pub fn format_monthly_summary(status: &MonthlyStatus, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  Monthly limit:  {}\n",
        money.format_opt(status.effective_limit)
    ));
    if status.debt.is_positive() {
        output.push_str(&format!(
            "  Carried debt:   {}\n",
            money.format(status.debt)
        ));
    }
    output.push_str(&format!("  Spent:          {}\n", money.format(status.total)));
    output.push_str(&format!(
        "  Remaining:      {}\n",
        money.format_opt(status.remaining)
    ));
    if status.exceeded {
        output.push_str("  Monthly limit exceeded!\n");
    }

    output
}

/// Full calendar view
pub fn format_calendar(calendar: &MonthCalendar, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str(&month_title(calendar));
    output.push_str("\n\n");
    output.push_str(&format_grid(calendar));
    output.push('\n');
    output.push_str(&format_monthly_summary(&calendar.status, money));
    output.push_str("\n  * spending   ! over daily limit\n");

    output
}
