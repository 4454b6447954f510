//! Calendar CLI command

use crate::display::{format_calendar, MoneyFormat};
use crate::error::BudgetResult;
use crate::models::MonthPeriod;
use crate::session::BudgetSession;

use super::parse_month;

/// Print the calendar for `month` (current month by default)
///
/// Months before the configured calendar floor show the floor instead.
pub fn handle_calendar(session: &BudgetSession, month: Option<&str>) -> BudgetResult<()> {
    let requested = match month {
        Some(text) => parse_month(text)?,
        None => MonthPeriod::current(),
    };

    let floor = session.settings().calendar_floor_month();
    let month = match floor {
        Some(floor) if requested < floor => {
            println!("Calendar starts at {}", floor);
            floor
        }
        _ => requested,
    };

    let money = MoneyFormat::new(session.settings().currency_suffix.clone());
    let calendar = session
        .calculator()
        .month_calendar(month, session.settings().week_start());

    print!("{}", format_calendar(&calendar, &money));

    let has_prev = floor.map_or(true, |floor| month > floor);
    if has_prev {
        println!("\n  prev: --month {}   next: --month {}", month.prev(), month.next());
    } else {
        println!("\n  next: --month {}", month.next());
    }
    Ok(())
}
