//! Normalizer tests over small raw tables.

use noshow_model::{CLEAN_COLUMNS, ErrorKind, FilterOptions, PipelineError, RAW_COLUMNS};
use noshow_transform::{apply_validity_filter, normalize_appointments};
use polars::prelude::{Column, DataFrame, DataType};

/// One raw record in `RAW_COLUMNS` order.
type RawRow = [&'static str; 14];

fn raw_frame(rows: &[RawRow]) -> DataFrame {
    let columns: Vec<Column> = RAW_COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<&str> = rows.iter().map(|row| row[idx]).collect();
            Column::new((*name).into(), values)
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

const ON_TIME: RawRow = [
    "29872499824296",
    "5642903",
    "F",
    "2016-04-29T18:38:08Z",
    "2016-05-27T00:00:00Z",
    "62",
    "JARDIM DA PENHA",
    "0",
    "1",
    "0",
    "0",
    "2",
    "0",
    "No",
];

const BOOKED_AFTER: RawRow = [
    "558997776694438",
    "5642503",
    "M",
    "2016-04-29T16:08:27Z",
    "2016-04-26T00:00:00Z",
    "56",
    "CENTRO",
    "0",
    "0",
    "0",
    "0",
    "0",
    "1",
    "Yes",
];

fn str_values(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

fn i64_values(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

#[test]
fn produces_clean_contract() {
    let raw = raw_frame(&[ON_TIME, BOOKED_AFTER]);
    let clean = normalize_appointments(&raw).unwrap();

    let names: Vec<&str> = clean
        .get_column_names()
        .iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(names, CLEAN_COLUMNS.to_vec());
    assert_eq!(clean.column("waiting_days").unwrap().dtype(), &DataType::Int64);
    assert_eq!(clean.column("age").unwrap().dtype(), &DataType::Int64);
    assert_eq!(raw.width(), RAW_COLUMNS.len());
}

#[test]
fn normalizes_values() {
    let raw = raw_frame(&[ON_TIME, BOOKED_AFTER]);
    let clean = normalize_appointments(&raw).unwrap();

    assert_eq!(i64_values(&clean, "waiting_days"), vec![28, -3]);
    assert_eq!(str_values(&clean, "scheduled_at"), vec!["2016-04-29", "2016-04-29"]);
    assert_eq!(
        str_values(&clean, "appointment_day_of_week"),
        vec!["Friday", "Tuesday"]
    );
    assert_eq!(str_values(&clean, "gender"), vec!["Female", "Male"]);
    assert_eq!(str_values(&clean, "hypertension"), vec!["Yes", "No"]);
    assert_eq!(str_values(&clean, "handicap_degree"), vec!["Yes", "No"]);
    assert_eq!(str_values(&clean, "sms_received"), vec!["No", "Yes"]);
    assert_eq!(str_values(&clean, "no_show"), vec!["No", "Yes"]);
}

#[test]
fn filter_keeps_only_positive_waits() {
    let raw = raw_frame(&[ON_TIME, BOOKED_AFTER]);
    let clean = normalize_appointments(&raw).unwrap();
    let result = apply_validity_filter(&clean, &FilterOptions::default()).unwrap();

    assert_eq!(result.data.height(), 1);
    assert_eq!(i64_values(&result.data, "waiting_days"), vec![28]);
    assert_eq!(str_values(&result.data, "handicap_degree"), vec!["Yes"]);
    assert_eq!(result.stats.failed_waiting_days, 1);
    assert_eq!(result.stats.failed_age, 0);
}

#[test]
fn booked_after_appointment_is_dropped_and_severity_collapses() {
    let mut first = ON_TIME;
    first[3] = "2016-04-01";
    first[4] = "2016-04-29";
    first[5] = "45";
    first[11] = "2";
    first[13] = "No";
    let mut second = BOOKED_AFTER;
    second[3] = "2016-04-01";
    second[4] = "2016-03-29";
    second[5] = "45";
    second[11] = "0";
    second[13] = "Yes";

    let clean = normalize_appointments(&raw_frame(&[first, second])).unwrap();
    assert_eq!(i64_values(&clean, "waiting_days"), vec![28, -3]);

    let result = apply_validity_filter(&clean, &FilterOptions::default()).unwrap();
    assert_eq!(result.data.height(), 1);
    assert_eq!(i64_values(&result.data, "waiting_days"), vec![28]);
    assert_eq!(str_values(&result.data, "handicap_degree"), vec!["Yes"]);
    assert_eq!(str_values(&result.data, "no_show"), vec!["No"]);
}

#[test]
fn unmapped_code_aborts_even_on_filtered_row() {
    let mut bad = BOOKED_AFTER;
    bad[7] = "2";
    let raw = raw_frame(&[ON_TIME, bad]);
    let err = normalize_appointments(&raw).unwrap_err();
    match err {
        PipelineError::UnmappedCategory { column, value, row } => {
            assert_eq!(column, "Scholarship");
            assert_eq!(value, "2");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_gender_is_unmapped() {
    let mut bad = ON_TIME;
    bad[2] = "X";
    let err = normalize_appointments(&raw_frame(&[bad])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmappedCategory);
}

#[test]
fn negative_handicap_is_domain_violation() {
    let mut bad = ON_TIME;
    bad[11] = "-1";
    let err = normalize_appointments(&raw_frame(&[bad])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn bad_date_is_format_error() {
    let mut bad = ON_TIME;
    bad[4] = "2016-13-01";
    let err = normalize_appointments(&raw_frame(&[bad])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn implausible_age_is_not_a_normalizer_error() {
    let mut old = ON_TIME;
    old[5] = "150";
    let clean = normalize_appointments(&raw_frame(&[old])).unwrap();
    assert_eq!(i64_values(&clean, "age"), vec![150]);
}

#[test]
fn empty_table_normalizes_to_empty_table() {
    let clean = normalize_appointments(&raw_frame(&[])).unwrap();
    assert_eq!(clean.height(), 0);
    assert_eq!(clean.width(), CLEAN_COLUMNS.len());
}
