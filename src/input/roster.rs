use std::collections::HashSet;
use std::path::Path;

use crate::input::InputError;
use crate::input::table::{Table, read_table};
use crate::model::roster::{Repeater, Roster};

pub const COL_RR: &str = "RR#";
pub const COL_GROUP: &str = "Group Name";
pub const COL_LONG_NAME: &str = "Long Name";
pub const COL_OUTPUT: &str = "Output (MHz)";
pub const COL_LOCATION: &str = "Location";

pub fn load_roster(path: &Path) -> Result<Roster, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "repeater roster {} does not exist",
            path.display()
        )));
    }
    let source_id = path.display().to_string();
    let table = read_table(path, &source_id)?;
    let roster = roster_from_table(&table)?;
    tracing::info!(
        repeaters = roster.len(),
        clubs = roster.n_clubs(),
        "loaded repeater roster from {}",
        source_id
    );
    Ok(roster)
}

pub fn roster_from_table(table: &Table) -> Result<Roster, InputError> {
    let rr_col = table.require_column(COL_RR)?;
    let group_col = table.require_column(COL_GROUP)?;
    let name_col = table.require_column(COL_LONG_NAME)?;
    let output_col = table.require_column(COL_OUTPUT)?;
    let location_col = table.require_column(COL_LOCATION)?;

    let parse_err = |line: usize, message: String| InputError::Parse {
        source_id: table.source_id.clone(),
        line,
        message,
    };

    let mut seen = HashSet::new();
    let mut repeaters = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw_rr = row.get(rr_col).trim();
        let rr_number = raw_rr
            .parse::<i64>()
            .map_err(|_| parse_err(row.line, format!("invalid {COL_RR} value '{raw_rr}'")))?;
        if !seen.insert(rr_number) {
            return Err(InputError::InvalidInput(format!(
                "{} line {}: duplicate {COL_RR} {rr_number}",
                table.source_id, row.line
            )));
        }

        let raw_output = row.get(output_col).trim();
        let output_mhz = raw_output
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                parse_err(
                    row.line,
                    format!("invalid {COL_OUTPUT} value '{raw_output}'"),
                )
            })?;

        let club = row.get(group_col).trim();
        repeaters.push(Repeater {
            rr_number,
            club: (!club.is_empty()).then(|| club.to_string()),
            long_name: row.get(name_col).trim().to_string(),
            output_mhz,
            location: row.get(location_col).trim().to_string(),
        });
    }

    Ok(Roster::new(repeaters))
}
