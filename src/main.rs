use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use daily_budget::cli::{
    handle_add, handle_calendar, handle_day, handle_limit_command, handle_remove, handle_today,
    LimitCommands,
};
use daily_budget::config::{BudgetPaths, Settings};
use daily_budget::models::ExpenseId;
use daily_budget::session::BudgetSession;

/// Environment variable holding a tracing filter (e.g. "daily_budget=debug")
const LOG_ENV: &str = "BUDGET_LOG";

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Daily spending limit tracker",
    long_about = "Set a daily spending limit, log expenses as they happen, and see \
                  how each day and month is going. Overspending in one month is \
                  carried into the next month's allowance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's limit, spending and expenses
    Today,

    /// Log an expense
    Add {
        /// Amount spent (e.g., "12.50" or "12,50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Date of the expense (YYYY-MM-DD, "today" or "yesterday")
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm", alias = "delete")]
    Remove {
        /// Expense ID
        id: ExpenseId,
        /// Only look on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show or change the daily limit
    Limit {
        #[command(subcommand)]
        action: Option<LimitCommands>,
    },

    /// Show a month calendar with spending markers and the monthly budget
    #[command(alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one day's spending and expenses
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    // Already-installed subscribers are fine; keep the first one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);
    let mut session = BudgetSession::open(&paths, settings)?;

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => handle_today(&session)?,
        Commands::Add {
            amount,
            description,
            date,
        } => handle_add(&mut session, &amount, &description, date.as_deref())?,
        Commands::Remove { id, date } => handle_remove(&mut session, id, date.as_deref())?,
        Commands::Limit { action } => handle_limit_command(&mut session, action)?,
        Commands::Calendar { month } => handle_calendar(&session, month.as_deref())?,
        Commands::Day { date } => handle_day(&session, &date)?,
        Commands::Config => {
            let settings = session.settings();
            println!("Budget Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Debt rollover:     {:?}", settings.debt_rollover);
            println!("  Currency suffix:  '{}'", settings.currency_suffix);
            println!("  Week starts on:    {}", settings.week_start());
            println!(
                "  Calendar floor:    {}",
                settings.calendar_floor.as_deref().unwrap_or("none")
            );
            println!("  Log level:         {}", settings.log_level);
        }
    }

    Ok(())
}
