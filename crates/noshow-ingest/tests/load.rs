//! Loader stage tests against temporary datasets on disk.

use std::fs;
use std::path::Path;

use noshow_ingest::{load_appointments, sha256_hex};
use noshow_model::{ErrorKind, LoadOptions, RAW_COLUMNS};
use tempfile::TempDir;

const HEADER: &str = "PatientId,AppointmentID,Gender,ScheduledDay,AppointmentDay,Age,Neighbourhood,Scholarship,Hipertension,Diabetes,Alcoholism,Handcap,SMS_received,No-show";

fn sample_dataset() -> String {
    format!(
        "{HEADER}\n\
         29872499824296,5642903,F,2016-04-29T18:38:08Z,2016-05-27T00:00:00Z,62,JARDIM DA PENHA,0,1,0,0,0,0,No\n\
         558997776694438,5642503,M,2016-04-29T16:08:27Z,2016-04-26T00:00:00Z,56,CENTRO,0,0,0,0,2,1,Yes\n"
    )
}

#[test]
fn loads_named_file_from_directory() {
    let dir = TempDir::new().unwrap();
    let content = sample_dataset();
    fs::write(dir.path().join("KaggleV2-May-2016.csv"), &content).unwrap();
    fs::write(dir.path().join("other.csv"), "a,b\n1,2\n").unwrap();

    let raw = load_appointments(dir.path(), &LoadOptions::default()).unwrap();

    assert_eq!(raw.data.height(), 2);
    assert_eq!(raw.data.width(), RAW_COLUMNS.len());
    assert_eq!(raw.source.rows, 2);
    assert_eq!(raw.source.size_bytes, content.len() as u64);
    assert_eq!(raw.source.sha256, sha256_hex(content.as_bytes()));
    assert!(raw.source.path.ends_with("KaggleV2-May-2016.csv"));

    let outcome = raw.data.column("No-show").unwrap().str().unwrap();
    assert_eq!(outcome.get(1), Some("Yes"));
}

#[test]
fn loads_file_path_directly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appointments.csv");
    fs::write(&path, sample_dataset()).unwrap();

    let raw = load_appointments(&path, &LoadOptions::default()).unwrap();
    assert_eq!(raw.data.height(), 2);
}

#[test]
fn header_only_file_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, format!("{HEADER}\n")).unwrap();

    let raw = load_appointments(&path, &LoadOptions::default()).unwrap();
    assert_eq!(raw.data.height(), 0);
    assert_eq!(raw.data.width(), RAW_COLUMNS.len());
}

#[test]
fn missing_location_is_source_unavailable() {
    let err = load_appointments(Path::new("/no/such/dataset.csv"), &LoadOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
}

#[test]
fn missing_column_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    let header_without_outcome = HEADER.trim_end_matches(",No-show");
    fs::write(&path, format!("{header_without_outcome}\n1,2,F,x,y,1,A,0,0,0,0,0,0\n")).unwrap();

    let err = load_appointments(&path, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("No-show"));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, sample_dataset()).unwrap();

    let options = LoadOptions {
        max_file_size_bytes: 16,
        ..LoadOptions::default()
    };
    let err = load_appointments(&path, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
}

#[test]
fn ragged_row_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(
        &path,
        format!("{HEADER}\n1,2,F,2016-04-29,2016-05-27,30,CENTRO,0,0,0,0,0,0,No,extra,fields\n"),
    )
    .unwrap();

    let err = load_appointments(&path, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn invalid_utf8_row_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.csv");
    let mut bytes = format!("{HEADER}\n1,2,F,2016-04-29,2016-05-27,30,").into_bytes();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b",0,0,0,0,0,0,No\n");
    fs::write(&path, bytes).unwrap();

    let err = load_appointments(&path, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
