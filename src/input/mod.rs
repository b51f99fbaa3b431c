use std::path::{Path, PathBuf};

pub mod logs;
pub mod roster;
pub mod table;

pub use logs::{RowPolicy, load_logs};
pub use roster::load_roster;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {source_id} line {line}: {message}")]
    Parse {
        source_id: String,
        line: usize,
        message: String,
    },
}

pub fn find_log_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "logs directory {} does not exist",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if source_id_for(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn source_id_for(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    for suffix in [".csv.gz", ".csv"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            if !stem.is_empty() {
                return Some(stem.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
