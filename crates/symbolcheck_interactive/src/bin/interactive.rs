//! CLI entry point for symbolcheck
//!
//! Supports two execution modes:
//! - Interactive: Read instructions from stdin line-by-line
//! - Batch: Read instructions from a playbook file
//!
//! # Examples
//!
//! Interactive mode:
//! ```bash
//! ./symbolcheck --element Xenon
//! > VALIDATE Nn
//! > COUNT
//! > ^D
//! ```
//!
//! Batch mode:
//! ```bash
//! ./symbolcheck --playbook elements.symbols
//! ```

use clap::Parser;
use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use symbolcheck_interactive::{Instruction, Outcome, Session};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "symbolcheck")]
#[command(about = "Validate two-letter element symbols", long_about = None)]
struct Args {
    /// Element name to bind before the first instruction
    #[arg(short, long, env = "SYMBOLCHECK_ELEMENT")]
    element: Option<String>,

    /// Path to a playbook file containing instructions to execute (batch mode)
    #[arg(short, long)]
    playbook: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_writer(std::io::stderr).with_target(false).with_env_filter(filter).init();

    let args = Args::parse();

    let mut session = Session::new(args.element.as_deref());

    if let Some(playbook_path) = args.playbook {
        run_batch_mode(&mut session, &playbook_path)?;
    } else {
        run_interactive_mode(&mut session)?;
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    if *outcome != Outcome::Nil {
        println!("{outcome}");
    }
}

/// Run in batch mode, reading instructions from a file
fn run_batch_mode(session: &mut Session, file_path: &str) -> anyhow::Result<()> {
    info!("Running batch mode from file: {}", file_path);

    let file = std::fs::File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let start_time = std::time::Instant::now();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        debug!("[{}] {} ... ", line_num + 1, line);

        match Instruction::try_from(line) {
            Ok(instruction) => match session.execute(&instruction) {
                Ok(outcome) => print_outcome(&outcome),
                Err(e) => {
                    info!("✗ Error: {}", e);
                    return Err(e);
                }
            },
            Err(e) => {
                info!("✗ Parse error: {}", e);
                return Err(e);
            }
        }
    }

    info!(execution_time = ?start_time.elapsed(), "Batch execution completed successfully.");
    Ok(())
}

/// Run in interactive mode, reading instructions from stdin
fn run_interactive_mode(session: &mut Session) -> anyhow::Result<()> {
    println!("symbolcheck - Interactive Mode");
    println!("==============================");
    println!("Type HELP for instructions, Ctrl+D to exit");
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        let bytes_read = reader.read_line(&mut line)?;

        // EOF reached
        if bytes_read == 0 {
            println!();
            break;
        }

        // Errors are reported and the session continues
        match Instruction::try_from(line.as_str()) {
            Ok(instruction) => match session.execute(&instruction) {
                Ok(outcome) => print_outcome(&outcome),
                Err(e) => eprintln!("✗ Error: {}", e),
            },
            Err(e) => eprintln!("✗ Parse error: {}", e),
        }
    }

    Ok(())
}
