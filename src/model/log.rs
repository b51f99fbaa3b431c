#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub rr_number: i64,
    pub signal_report: String,
    pub time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ParticipantLog {
    pub source_id: String,
    pub callsign: String,
    pub entries: Vec<LogEntry>,
}

impl ParticipantLog {
    pub fn new(source_id: &str, entries: Vec<LogEntry>) -> Self {
        Self {
            source_id: source_id.to_string(),
            callsign: callsign_from_source(source_id),
            entries,
        }
    }
}

pub fn callsign_from_source(source_id: &str) -> String {
    let token = source_id.split(' ').next().unwrap_or("");
    let token = token.split(',').next().unwrap_or("");
    token.to_uppercase()
}
