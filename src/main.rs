//! shapewatch CLI
//!
//! Usage: shapewatch <COMMAND>
//!
//! Commands:
//!   watch    Watch a folder and ingest every file that arrives
//!   process  Ingest a single file
//!   check    Show the effective configuration

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::GlobalArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let globals = GlobalArgs {
        json: cli.json,
        color: cli.color,
        verbose: cli.verbose,
        config: cli.config,
    };

    match cli.command {
        Commands::Watch {
            folder,
            extension,
            drop,
            lock_wait,
            process_existing,
        } => commands::watch::cmd_watch(
            &globals,
            commands::watch::WatchArgs {
                folder,
                extension,
                drop,
                lock_wait,
                process_existing,
            },
        ),
        Commands::Process {
            file,
            drop,
            lock_wait,
        } => commands::process::cmd_process(&globals, &file, drop, lock_wait),
        Commands::Check => commands::check::cmd_check(&globals),
    }
}
