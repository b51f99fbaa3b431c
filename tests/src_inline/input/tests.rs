use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("repeater_contest_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const ROSTER: &str = "\
RR#,Group Name,Long Name,Output (MHz),Location
1,Alpha,VE3AAA,146.940,\"Ottawa, ON\"
2,Beta,VE3BBB,147.060,Kanata
3,Beta,VE3CCC,443.125,Nepean
4,,VE3DDD,145.330,Orleans
";

#[test]
fn test_load_roster() {
    let dir = make_temp_dir();
    let path = dir.join("repeaters.csv");
    write_file(&path, ROSTER);

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster.n_clubs(), 2);
    assert_eq!(roster.club_size("Beta"), 2);
    assert_eq!(roster.club_of(4), None);
    let first = roster.get(1).unwrap();
    assert_eq!(first.location, "Ottawa, ON");
    assert_eq!(first.output_mhz, 146.94);
}

#[test]
fn test_roster_rejects_duplicate_rr() {
    let dir = make_temp_dir();
    let path = dir.join("repeaters.csv");
    write_file(
        &path,
        "RR#,Group Name,Long Name,Output (MHz),Location\n1,A,X,146.0,Here\n1,B,Y,147.0,There\n",
    );
    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_roster_bad_frequency() {
    let dir = make_temp_dir();
    let path = dir.join("repeaters.csv");
    write_file(
        &path,
        "RR#,Group Name,Long Name,Output (MHz),Location\n1,A,X,abc,Here\n",
    );
    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_roster_rejects_non_finite_frequency() {
    for value in ["NaN", "inf", "-inf"] {
        let dir = make_temp_dir();
        let path = dir.join("repeaters.csv");
        write_file(
            &path,
            &format!("RR#,Group Name,Long Name,Output (MHz),Location\n1,A,X,{value},Here\n"),
        );
        let err = load_roster(&path).unwrap_err();
        assert!(matches!(err, InputError::Parse { line: 2, .. }), "value {value}");
    }
}

#[test]
fn test_roster_missing_column() {
    let dir = make_temp_dir();
    let path = dir.join("repeaters.csv");
    write_file(&path, "RR#,Group Name\n1,A\n");
    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_missing_logs_dir_is_fatal() {
    let dir = make_temp_dir().join("logs");
    let err = load_logs(&dir, RowPolicy::Abort).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_empty_logs_dir() {
    let dir = make_temp_dir();
    let logs = load_logs(&dir, RowPolicy::Abort).unwrap();
    assert!(logs.is_empty());
}

#[test]
fn test_load_logs_sorted_with_callsigns() {
    let dir = make_temp_dir();
    write_file(
        &dir.join("w1abc, Jane Doe.csv"),
        ",RR#,Signal Report,Time\n0,1,59,10:00\n1,2,CM4,10:05\n2,1,57,\n",
    );
    write_gz(
        &dir.join("K2XYZ log.csv.gz"),
        "RR#,Signal Report,Time\n3,5 by 9,11:00\n",
    );
    write_file(&dir.join("notes.txt"), "not a log");

    let logs = load_logs(&dir, RowPolicy::Abort).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].callsign, "K2XYZ");
    assert_eq!(logs[0].source_id, "K2XYZ log");
    assert_eq!(logs[0].entries[0].signal_report, "5 by 9");

    let w1 = &logs[1];
    assert_eq!(w1.callsign, "W1ABC");
    assert_eq!(w1.entries.len(), 3);
    assert_eq!(w1.entries[1].rr_number, 2);
    assert_eq!(w1.entries[1].time.as_deref(), Some("10:05"));
    assert_eq!(w1.entries[2].time, None);
}

#[test]
fn test_malformed_rr_aborts_by_default() {
    let dir = make_temp_dir();
    write_file(
        &dir.join("W1ABC.csv"),
        "RR#,Signal Report,Time\n1,59,10:00\nabc,59,10:01\n",
    );
    let err = load_logs(&dir, RowPolicy::Abort).unwrap_err();
    match err {
        InputError::Parse {
            source_id, line, ..
        } => {
            assert_eq!(source_id, "W1ABC");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_rr_skipped_when_lenient() {
    let dir = make_temp_dir();
    write_file(
        &dir.join("W1ABC.csv"),
        "RR#,Signal Report,Time\n1,59,10:00\nabc,59,10:01\n2,57,10:02\n",
    );
    let logs = load_logs(&dir, RowPolicy::Skip).unwrap();
    let numbers = logs[0].entries.iter().map(|e| e.rr_number).collect::<Vec<_>>();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn test_source_id_for() {
    assert_eq!(
        source_id_for(Path::new("logs/W1ABC, Jane.csv")).as_deref(),
        Some("W1ABC, Jane")
    );
    assert_eq!(
        source_id_for(Path::new("logs/k2xyz.csv.gz")).as_deref(),
        Some("k2xyz")
    );
    assert_eq!(source_id_for(Path::new("logs/readme.md")), None);
    assert_eq!(source_id_for(Path::new("logs/.csv")), None);
}
