use anyhow::Result;
use clap::{Parser, Subcommand};

use enroll::app::App;
use enroll::config::Config;
use enroll::logging;
use enroll::storage::{self, FileStore, KvStore, SUBMISSION_KEY};

#[derive(Parser)]
#[command(name = "enroll")]
#[command(about = "Multi-step enrollment wizard for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored submission, if any
    Show,

    /// Remove the stored submission
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Show) => cmd_show(&config)?,
        Some(Commands::Clear) => cmd_clear(&config)?,
        None => run_tui(config, &logging_handle)?,
    }

    Ok(())
}

fn run_tui(config: Config, logging_handle: &logging::LoggingHandle) -> Result<()> {
    let mut app = App::new(config);
    let result = app.run();

    // Point the user at this session's log if anything was written
    if let Some(log_path) = logging_handle.session_log() {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_show(config: &Config) -> Result<()> {
    let store = FileStore::new(config.data_path());

    let Some(submission) = storage::load_submission(&store)? else {
        println!("No submission stored");
        return Ok(());
    };

    println!("Stored enrollment");
    println!("{}", "─".repeat(40));
    println!("  Name:       {} {}", submission.first_name, submission.last_name);
    println!("  Email:      {}", submission.email);
    println!("  Street:     {}", submission.street);
    println!("  City:       {}", submission.city);
    println!("  State:      {}", submission.state);
    println!("  Country:    {}", submission.country);
    println!("  Newsletter: {}", if submission.subscribe_newsletter { "yes" } else { "no" });
    println!("  Alerts:     {}", if submission.enable_alerts { "yes" } else { "no" });
    println!("  Submitted:  {}", submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}

fn cmd_clear(config: &Config) -> Result<()> {
    let store = FileStore::new(config.data_path());

    if store.get(SUBMISSION_KEY)?.is_none() {
        println!("No submission stored");
        return Ok(());
    }

    store.remove(SUBMISSION_KEY)?;
    println!("Stored submission removed");

    Ok(())
}
