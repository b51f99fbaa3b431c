use std::path::Path;

use crate::input::table::{Table, read_table};
use crate::input::{InputError, find_log_files, source_id_for};
use crate::model::log::{LogEntry, ParticipantLog};

pub const COL_RR: &str = "RR#";
pub const COL_REPORT: &str = "Signal Report";
pub const COL_TIME: &str = "Time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    #[default]
    Abort,
    Skip,
}

pub fn load_logs(dir: &Path, policy: RowPolicy) -> Result<Vec<ParticipantLog>, InputError> {
    let files = find_log_files(dir)?;
    if files.is_empty() {
        tracing::warn!("no log files found in {}", dir.display());
    } else {
        tracing::info!(
            files = files.len(),
            "discovered participant logs in {}",
            dir.display()
        );
    }

    let mut logs = Vec::with_capacity(files.len());
    for path in &files {
        let Some(source_id) = source_id_for(path) else {
            continue;
        };
        let table = read_table(path, &source_id)?;
        let log = log_from_table(&table, policy)?;
        tracing::debug!(
            source = %log.source_id,
            callsign = %log.callsign,
            rows = log.entries.len(),
            "read participant log"
        );
        if log.callsign.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "cannot derive a callsign from log file {}",
                path.display()
            )));
        }
        logs.push(log);
    }
    Ok(logs)
}

pub fn log_from_table(table: &Table, policy: RowPolicy) -> Result<ParticipantLog, InputError> {
    let rr_col = table.require_column(COL_RR)?;
    let report_col = table.require_column(COL_REPORT)?;
    let time_col = table.column(COL_TIME);

    let mut entries = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw_rr = row.get(rr_col).trim();
        let rr_number = match raw_rr.parse::<i64>() {
            Ok(v) => v,
            Err(_) => match policy {
                RowPolicy::Abort => {
                    return Err(InputError::Parse {
                        source_id: table.source_id.clone(),
                        line: row.line,
                        message: format!("invalid {COL_RR} value '{raw_rr}'"),
                    });
                }
                RowPolicy::Skip => {
                    tracing::warn!(
                        "skipping row with invalid {} '{}' ({} line {})",
                        COL_RR,
                        raw_rr,
                        table.source_id,
                        row.line
                    );
                    continue;
                }
            },
        };

        let time = time_col
            .map(|idx| row.get(idx).trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        entries.push(LogEntry {
            rr_number,
            signal_report: row.get(report_col).to_string(),
            time,
        });
    }

    Ok(ParticipantLog::new(&table.source_id, entries))
}
