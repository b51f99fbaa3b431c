use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

#[derive(Debug, Clone)]
pub struct Table {
    pub source_id: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, InputError> {
        self.column(name).ok_or_else(|| {
            InputError::InvalidInput(format!("{} has no '{}' column", self.source_id, name))
        })
    }
}

impl TableRow {
    pub fn get(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_table(path: &Path, source_id: &str) -> Result<Table, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_table(source_id, reader)
}

pub fn parse_table<R: BufRead>(source_id: &str, mut reader: R) -> Result<Table, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let start_line = line_no;

        // quoted fields may span physical lines
        let mut record = buf.trim_end_matches(['\r', '\n']).to_string();
        let fields = loop {
            if let Some(fields) = split_record(&record) {
                break fields;
            }
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Err(InputError::Parse {
                    source_id: source_id.to_string(),
                    line: start_line,
                    message: "unterminated quoted field".to_string(),
                });
            }
            line_no += 1;
            record.push('\n');
            record.push_str(buf.trim_end_matches(['\r', '\n']));
        };

        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        match header {
            None => {
                let columns = fields
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let name = if i == 0 {
                            name.trim_start_matches('\u{feff}')
                        } else {
                            name.as_str()
                        };
                        name.trim().to_string()
                    })
                    .collect();
                header = Some(columns);
            }
            Some(_) => rows.push(TableRow {
                line: start_line,
                fields,
            }),
        }
    }

    let columns = header.ok_or_else(|| InputError::Parse {
        source_id: source_id.to_string(),
        line: 0,
        message: "table is empty".to_string(),
    })?;

    Ok(Table {
        source_id: source_id.to_string(),
        columns,
        rows,
    })
}

/// Splits one CSV record. Returns `None` while a quoted field is still open.
pub fn split_record(record: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return None;
    }
    fields.push(field);
    Some(fields)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
