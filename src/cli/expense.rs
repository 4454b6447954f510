//! Expense CLI commands
//!
//! Today view, logging and deleting expenses, and the single-day view.

use crate::display::{format_day_detail, format_today, MoneyFormat};
use crate::error::BudgetResult;
use crate::models::ExpenseId;
use crate::session::BudgetSession;

use super::{parse_amount, parse_date, parse_date_or_today};

/// Print the today view
pub fn handle_today(session: &BudgetSession) -> BudgetResult<()> {
    let today = BudgetSession::today();
    let money = MoneyFormat::new(session.settings().currency_suffix.clone());

    let status = session.calculator().daily_status(today);
    let records = session.ledger().records_for(today);
    print!("{}", format_today(&status, &records, &money));
    Ok(())
}

/// Log an expense, on today's date unless `date` is given
pub fn handle_add(
    session: &mut BudgetSession,
    amount: &str,
    description: &str,
    date: Option<&str>,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;
    let date = parse_date_or_today(date)?;
    let money = MoneyFormat::new(session.settings().currency_suffix.clone());

    let record = session.expenses().add(date, amount, description)?;
    println!(
        "Added {} for '{}' on {} (id {})",
        money.format(record.amount),
        record.description,
        date.format("%Y-%m-%d"),
        record.id
    );

    let status = session.calculator().daily_status(date);
    if status.exceeded {
        println!(
            "Daily limit exceeded: {} spent of {}",
            money.format(status.total),
            money.format_opt(status.limit)
        );
    }
    Ok(())
}

/// Delete an expense by id, optionally restricted to one date
pub fn handle_remove(
    session: &mut BudgetSession,
    id: ExpenseId,
    date: Option<&str>,
) -> BudgetResult<()> {
    match date {
        Some(date) => {
            let date = parse_date(date)?;
            if session.expenses().remove(date, id)? {
                println!("Removed expense {} from {}", id, date.format("%Y-%m-%d"));
            } else {
                println!("No expense {} on {}", id, date.format("%Y-%m-%d"));
            }
        }
        None => {
            let (date, record) = session.expenses().remove_by_id(id)?;
            println!(
                "Removed '{}' ({}) from {}",
                record.description,
                id,
                date.format("%Y-%m-%d")
            );
        }
    }
    Ok(())
}

/// Print the detail view of one day
pub fn handle_day(session: &BudgetSession, date: &str) -> BudgetResult<()> {
    let date = parse_date(date)?;
    let money = MoneyFormat::new(session.settings().currency_suffix.clone());

    match session.calculator().day_detail(date) {
        Some(detail) => print!("{}", format_day_detail(&detail, &money)),
        None => println!("No expenses on {}.", date.format("%Y-%m-%d")),
    }
    Ok(())
}
