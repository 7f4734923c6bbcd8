use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use triage_core::{Strategy, analyze_json, suggest_json, valid_strategies};

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Score and rank a batch of to-do tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full ranked breakdown of a task batch
    Analyze {
        /// JSON file holding an array of tasks; "-" reads stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Weighting strategy (unknown names fall back to smart_balance)
        #[arg(long, default_value = "smart_balance")]
        strategy: String,

        /// Reference date (YYYY-MM-DD, default: local today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the raw JSON report instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Condensed top-N suggestions
    Suggest {
        /// JSON file holding an array of tasks; "-" reads stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Weighting strategy (unknown names fall back to smart_balance)
        #[arg(long, default_value = "smart_balance")]
        strategy: String,

        /// Number of suggestions
        #[arg(long, default_value_t = 3)]
        count: usize,

        /// Reference date (YYYY-MM-DD, default: local today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the raw JSON report instead of the list
        #[arg(long)]
        json: bool,
    },

    /// List the available weighting strategies
    Strategies,
}

fn main() -> ExitCode {
    match run() {
        Ok(ok) => {
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            input,
            strategy,
            today,
            json,
        } => {
            let batch = read_batch(&input)?;
            let report = analyze_json(&batch, &strategy, resolve_today(today));

            for skip in &report.skipped {
                eprintln!("skipped entry {}: {}", skip.index, skip.reason);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(report.success);
            }

            if !report.success {
                eprintln!("{}", report.error.as_deref().unwrap_or(&report.message));
                return Ok(false);
            }

            println!("{} (strategy: {})", report.message, report.strategy);
            for (rank, t) in report.results.iter().enumerate() {
                println!(
                    "{:>3}. [{:>6}] {:<8} {}  (due {})",
                    rank + 1,
                    t.priority_score,
                    t.priority_level.as_str(),
                    t.title,
                    t.due_date,
                );
                println!("        {}", t.explanation);
            }
            Ok(true)
        }

        Command::Suggest {
            input,
            strategy,
            count,
            today,
            json,
        } => {
            let batch = read_batch(&input)?;
            let report = suggest_json(&batch, &strategy, count, resolve_today(today));

            for skip in &report.skipped {
                eprintln!("skipped entry {}: {}", skip.index, skip.reason);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(report.success);
            }

            if !report.success {
                eprintln!("{}", report.message);
                return Ok(false);
            }

            println!("{}", report.message);
            for s in &report.suggestions {
                println!(
                    "- {} [{} / {}] due {}",
                    s.title,
                    s.priority.as_str(),
                    s.priority_score,
                    s.due_date,
                );
                println!("  {}", s.reason);
            }
            Ok(true)
        }

        Command::Strategies => {
            for name in valid_strategies() {
                let s = Strategy::from_name(name);
                println!("{:<16} {}", name, s.description());
            }
            Ok(true)
        }
    }
}

fn resolve_today(flag: Option<NaiveDate>) -> NaiveDate {
    flag.unwrap_or_else(|| Local::now().date_naive())
}

fn read_batch(input: &PathBuf) -> Result<serde_json::Value> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    serde_json::from_str(&raw).context("input is not valid JSON")
}
