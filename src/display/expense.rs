//! Expense list and day view formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::money::MoneyFormat;
use crate::models::ExpenseRecord;
use crate::services::{DailyStatus, DayDetail};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format records as a table, in the order given
pub fn format_expense_list<'a, I>(records: I, money: &MoneyFormat) -> String
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let rows: Vec<ExpenseRow> = records
        .into_iter()
        .map(|r| ExpenseRow {
            id: r.id.to_string(),
            description: r.description.clone(),
            amount: money.format(r.amount),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses yet.".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Text progress bar for the share of the daily limit spent
pub fn format_progress_bar(status: &DailyStatus) -> String {
    let filled = ((status.progress_pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let fill = if status.exceeded { '!' } else { '#' };

    format!(
        "[{}{}] {:>3.0}%",
        fill.to_string().repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        status.progress_pct
    )
}

/// Today view: limit, spent, remaining, progress and today's expenses
pub fn format_today(
    status: &DailyStatus,
    records: &[&ExpenseRecord],
    money: &MoneyFormat,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Today, {}\n", status.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Daily limit:  {}\n", money.format_opt(status.limit)));
    output.push_str(&format!("  Spent today:  {}\n", money.format(status.total)));
    output.push_str(&format!(
        "  Remaining:    {}\n",
        money.format_opt(status.remaining)
    ));
    output.push_str(&format!("  {}\n", format_progress_bar(status)));
    if status.exceeded {
        output.push_str("  Daily limit exceeded!\n");
    }
    output.push('\n');
    output.push_str(&format_expense_list(records.iter().copied(), money));
    output.push('\n');

    output
}

/// Day detail view
pub fn format_day_detail(detail: &DayDetail, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", detail.date.format("%-d %B %Y")));
    output.push_str(&format!("  Spent:        {}\n", money.format(detail.total)));
    output.push_str(&format!("  Daily limit:  {}\n", money.format_opt(detail.limit)));
    output.push_str(&format!(
        "  Remaining:    {}\n",
        money.format_opt(detail.remaining)
    ));
    if let Some(over) = detail.exceeded_by {
        output.push_str(&format!("  Exceeded by:  {}\n", money.format(over)));
    }
    output.push('\n');
    output.push_str(&format_expense_list(&detail.records, money));
    output.push('\n');

    output
}
