use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::config::{paths::TallyPaths, settings::Settings};
use tally::models::Money;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "Tally is a terminal-based personal budget tracker. Start a \
                  session with a budget, record expenses against it, and watch \
                  the remaining balance as it runs down. Nothing is persisted; \
                  every session starts fresh."
)]
struct Cli {
    /// Starting budget for the session (skips the budget prompt)
    #[arg(long, env = "TALLY_BUDGET", value_parser = parse_budget)]
    budget: Option<Money>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn parse_budget(s: &str) -> Result<Money, String> {
    let amount = Money::parse(s).map_err(|e| e.to_string())?;
    if !amount.is_positive() {
        return Err("budget must be greater than zero".to_string());
    }
    Ok(amount)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Logs go to a file so they never write over the TUI
    tally::logging::init(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Notification (s):  {}", settings.notification_secs);
            println!("  Tick rate (ms):    {}", settings.tick_rate_ms);
        }
        None => {
            tally::tui::run_tui(&settings, cli.budget)?;
        }
    }

    Ok(())
}
