//! Daily limit CLI commands

use clap::Subcommand;

use crate::display::MoneyFormat;
use crate::error::BudgetResult;
use crate::session::BudgetSession;

use super::parse_amount;

/// Limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Show the current daily limit
    Show,
    /// Set the daily limit (applies to every past and future day)
    Set {
        /// Amount per day (e.g., "100" or "72,50")
        amount: String,
    },
    /// Remove the daily limit
    Clear,
}

/// Handle a limit command; no subcommand shows the limit
pub fn handle_limit_command(
    session: &mut BudgetSession,
    cmd: Option<LimitCommands>,
) -> BudgetResult<()> {
    let money = MoneyFormat::new(session.settings().currency_suffix.clone());

    match cmd.unwrap_or(LimitCommands::Show) {
        LimitCommands::Show => {
            println!("Daily limit: {}", money.format_opt(session.limit().get()));
        }
        LimitCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let limit = session.limits().set_limit(amount)?;
            println!("Daily limit set to {}", money.format(limit.amount()));
        }
        LimitCommands::Clear => {
            session.limits().clear_limit()?;
            println!("Daily limit cleared");
        }
    }
    Ok(())
}
