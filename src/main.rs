mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{RowPolicy, load_logs, load_roster};
use crate::model::log::ParticipantLog;
use crate::model::roster::Roster;
use crate::pipeline::score_contest;
use crate::pipeline::stage1_reports::classify_report;
use crate::report::json::RunSummary;
use crate::report::markdown::render_leaderboard_table;
use crate::report::write_reports;

#[derive(Debug, Parser)]
#[command(name = "repeater-contest")]
#[command(about = "Score an amateur-radio repeater contest from participant log sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every log in the logs directory and write the result tables.
    Run(RunArgs),
    /// Print the readability interpreted from each signal report.
    Classify {
        #[arg(required = true)]
        reports: Vec<String>,
    },
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Repeater roster CSV (RR#, Group Name, Long Name, Output (MHz), Location).
    #[arg(long)]
    roster: PathBuf,

    /// Directory holding one CSV log sheet per participant.
    #[arg(long, default_value = "logs")]
    logs: PathBuf,

    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Skip log rows with a non-integer RR# instead of failing the run.
    #[arg(long)]
    skip_malformed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    roster_path: PathBuf,
    logs_dir: PathBuf,
    out_dir: PathBuf,
    row_policy: RowPolicy,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            roster_path: args.roster,
            logs_dir: args.logs,
            out_dir: args.out,
            row_policy: if args.skip_malformed {
                RowPolicy::Skip
            } else {
                RowPolicy::Abort
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run_scoring(&RunConfig::from(args)),
        Command::Classify { reports } => {
            for report in &reports {
                println!("{}\t{}", report, format_readability(classify_report(report)));
            }
            Ok(())
        }
    }
}

fn run_scoring(config: &RunConfig) -> Result<(), AppError> {
    let roster = load_roster(&config.roster_path)?;
    let logs = load_logs(&config.logs_dir, config.row_policy)?;

    let results = score_contest(&roster, &logs);
    println!("{}", render_leaderboard_table(&results.leaderboard));

    let summary = build_summary(&roster, &logs);
    write_reports(&results, &summary, &config.out_dir)?;
    Ok(())
}

fn build_summary(roster: &Roster, logs: &[ParticipantLog]) -> RunSummary {
    let n_log_rows = logs.iter().map(|l| l.entries.len()).sum();
    let n_unknown_rows = logs
        .iter()
        .flat_map(|l| &l.entries)
        .filter(|e| roster.get(e.rr_number).is_none())
        .count();
    let n_untimed_rows = logs
        .iter()
        .flat_map(|l| &l.entries)
        .filter(|e| e.time.is_none())
        .count();
    RunSummary {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_repeaters: roster.len(),
        n_clubs: roster.n_clubs(),
        n_logs: logs.len(),
        n_log_rows,
        n_unknown_rows,
        n_untimed_rows,
    }
}

fn format_readability(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
