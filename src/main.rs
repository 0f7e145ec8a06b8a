use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use calculator::audit::AuditLogger;
use calculator::cli::{handle_log_command, handle_repl_command, handle_run_command};
use calculator::config::{paths::CalculatorPaths, settings::Settings};
use calculator::services::Session;

#[derive(Parser)]
#[command(
    name = "calculator",
    version,
    about = "Running-total calculator",
    long_about = "Keeps a running total that you add to, subtract from and clear. \
                  The total lives for one invocation; every change is recorded \
                  in an operation log."
)]
struct Cli {
    /// Do not record operations in the operation log
    #[arg(long, global = true, env = "CALCULATOR_NO_LOG")]
    no_log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a script such as `add 5 subtract 2 total`
    Run {
        /// Operations: add N, subtract N, clear, total
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        tokens: Vec<String>,
    },

    /// Read operations from stdin, one or more per line
    #[command(alias = "shell")]
    Repl,

    /// Show recent entries from the operation log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// One line per entry instead of a table
        #[arg(long)]
        plain: bool,
    },

    /// Write the settings file, filling in defaults
    Init,

    /// Show current configuration and paths
    Config,
}

/// Settings and operation log for a run or repl session
///
/// With `--no-log` nothing touches the disk, so a missing home directory or
/// a broken settings file only costs the user their settings.
fn session_setup(no_log: bool) -> Result<(Settings, Option<AuditLogger>)> {
    let loaded = CalculatorPaths::new()
        .and_then(|paths| Settings::load_or_create(&paths).map(|settings| (paths, settings)));

    let (paths, settings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) if no_log => {
            eprintln!("Warning: using default settings: {}", e);
            return Ok((Settings::default(), None));
        }
        Err(e) => return Err(e.into()),
    };

    if no_log || !settings.audit_enabled {
        return Ok((settings, None));
    }

    paths.ensure_directories()?;
    let logger = AuditLogger::new(paths.operation_log());
    Ok((settings, Some(logger)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Run { tokens }) => {
            let (settings, logger) = session_setup(cli.no_log)?;
            let mut session = Session::new(logger);
            handle_run_command(&mut session, &settings, &tokens, &mut out)?;
        }
        Some(Commands::Repl) => {
            let (settings, logger) = session_setup(cli.no_log)?;
            let mut session = Session::new(logger);
            let stdin = io::stdin();
            handle_repl_command(
                &mut session,
                &settings,
                stdin.lock(),
                &mut out,
                &mut io::stderr(),
            )?;
        }
        Some(Commands::Log { limit, plain }) => {
            let paths = CalculatorPaths::new()?;
            let logger = AuditLogger::new(paths.operation_log());
            handle_log_command(&logger, limit, plain, &mut out)?;
        }
        Some(Commands::Init) => {
            let paths = CalculatorPaths::new()?;
            let settings = Settings::load_or_create(&paths)?;
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let paths = CalculatorPaths::new()?;
            let settings = Settings::load_or_create(&paths)?;
            println!("Calculator Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Operation log:    {}", paths.operation_log().display());
            println!();
            println!("Settings:");
            println!("  Operation log enabled: {}", settings.audit_enabled);
            println!("  Echo total:            {}", settings.echo_total);
        }
        None => {
            println!("Calculator - running-total accumulator");
            println!();
            println!("Run 'calculator --help' for usage information.");
            println!("Run 'calculator run add 5 subtract 2 total' to try it.");
        }
    }

    Ok(())
}
