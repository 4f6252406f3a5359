//! Normalizer stage: untyped raw table in, cleaned table out.
//!
//! Each function reads one raw column and produces one clean column. A
//! function either converts every row or fails the whole batch; there is
//! no per-row skipping. Row numbers in errors are 0-based record indexes.

use chrono::NaiveDate;
use noshow_model::columns::{clean, raw};
use noshow_model::{
    BINARY_FLAG_COLUMNS, CLEAN_COLUMNS, IDENTIFIER_COLUMNS, PipelineError, Result, YesNo,
};
use polars::prelude::{Column, DataFrame, DataType, StringChunked};
use tracing::{debug, info};

use crate::normalization::{
    RemapTable, day_of_week, format_iso_date, parse_calendar_date, parse_integer, waiting_days,
};

/// Reads a column as text, casting non-String columns first.
fn text_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| PipelineError::format(format!("column {name} not found")))?;
    let column = column.cast(&DataType::String)?;
    Ok(column.str()?.clone())
}

fn invalid_value(column: &str, row: usize, value: &str, expected: &str) -> PipelineError {
    PipelineError::format(format!(
        "invalid value '{value}' in column {column} at row {row}: expected {expected}"
    ))
}

/// Parses every value of a timestamp column to its calendar date.
pub fn parse_date_column(df: &DataFrame, source: &str) -> Result<Vec<NaiveDate>> {
    let values = text_column(df, source)?;
    let mut dates = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::missing_value(source, row))?;
        let date = parse_calendar_date(value)
            .ok_or_else(|| invalid_value(source, row, value, "an ISO 8601 date"))?;
        dates.push(date);
    }
    debug!(column = source, rows = dates.len(), "parsed dates");
    Ok(dates)
}

/// Builds an ISO `YYYY-MM-DD` column from parsed dates.
pub fn date_column(target: &str, dates: &[NaiveDate]) -> Column {
    let values: Vec<String> = dates.iter().copied().map(format_iso_date).collect();
    Column::new(target.into(), values)
}

/// Builds a weekday-name column from parsed dates.
pub fn derive_day_of_week(target: &str, dates: &[NaiveDate]) -> Column {
    let values: Vec<&str> = dates
        .iter()
        .map(|date| day_of_week(*date).as_str())
        .collect();
    Column::new(target.into(), values)
}

/// Builds the elapsed-day column `appointment - scheduled`.
pub fn derive_waiting_days(
    target: &str,
    scheduled: &[NaiveDate],
    appointment: &[NaiveDate],
) -> Result<Column> {
    if scheduled.len() != appointment.len() {
        return Err(PipelineError::format(format!(
            "cannot derive {target}: {} scheduled dates but {} appointment dates",
            scheduled.len(),
            appointment.len()
        )));
    }
    let values: Vec<i64> = scheduled
        .iter()
        .zip(appointment)
        .map(|(scheduled, appointment)| waiting_days(*scheduled, *appointment))
        .collect();
    Ok(Column::new(target.into(), values))
}

/// Replaces each code of `source` with its label from `table`.
pub fn remap_categorical(
    df: &DataFrame,
    source: &str,
    target: &str,
    table: RemapTable,
) -> Result<Column> {
    let values = text_column(df, source)?;
    let mut labels = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::missing_value(source, row))?;
        let label = table
            .remap(value)
            .ok_or_else(|| PipelineError::UnmappedCategory {
                column: source.to_string(),
                value: value.to_string(),
                row,
            })?;
        labels.push(label);
    }
    debug!(column = source, table = table.as_str(), "remapped categorical column");
    Ok(Column::new(target.into(), labels))
}

/// Parses an integer column to Int64.
pub fn parse_integer_column(df: &DataFrame, source: &str, target: &str) -> Result<Column> {
    let values = text_column(df, source)?;
    let mut parsed = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::missing_value(source, row))?;
        let number =
            parse_integer(value).ok_or_else(|| invalid_value(source, row, value, "an integer"))?;
        parsed.push(number);
    }
    Ok(Column::new(target.into(), parsed))
}

/// Collapses a non-negative severity count to `Yes` (> 0) or `No` (0).
pub fn collapse_severity(df: &DataFrame, source: &str, target: &str) -> Result<Column> {
    let values = text_column(df, source)?;
    let mut labels = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::missing_value(source, row))?;
        let severity =
            parse_integer(value).ok_or_else(|| invalid_value(source, row, value, "an integer"))?;
        let label = YesNo::from_severity(severity).ok_or_else(|| {
            PipelineError::DomainViolation {
                column: source.to_string(),
                row: Some(row),
                message: format!("severity must be non-negative, got {severity}"),
            }
        })?;
        labels.push(label.as_str());
    }
    Ok(Column::new(target.into(), labels))
}

/// Copies a free-text column, trimming surrounding whitespace.
pub fn copy_text_column(df: &DataFrame, source: &str, target: &str) -> Result<Column> {
    let values = text_column(df, source)?;
    let mut copied = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| PipelineError::missing_value(source, row))?;
        copied.push(value.trim().to_string());
    }
    Ok(Column::new(target.into(), copied))
}

/// Returns a copy of `df` without the identifier columns.
///
/// Identifiers that are already absent are ignored.
pub fn drop_identifiers(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in IDENTIFIER_COLUMNS {
        if out.column(name).is_ok() {
            out.drop_in_place(name)?;
        }
    }
    Ok(out)
}

/// Converts a raw appointment table into the cleaned table.
///
/// The output holds exactly [`CLEAN_COLUMNS`], in order. `raw` is left
/// untouched.
pub fn normalize_appointments(raw: &DataFrame) -> Result<DataFrame> {
    let df = drop_identifiers(raw)?;

    let scheduled = parse_date_column(&df, raw::SCHEDULED_DAY)?;
    let appointment = parse_date_column(&df, raw::APPOINTMENT_DAY)?;

    let mut columns = vec![
        date_column(clean::SCHEDULED_AT, &scheduled),
        date_column(clean::APPOINTMENT_AT, &appointment),
        derive_day_of_week(clean::SCHEDULED_DAY_OF_WEEK, &scheduled),
        derive_day_of_week(clean::APPOINTMENT_DAY_OF_WEEK, &appointment),
        derive_waiting_days(clean::WAITING_DAYS, &scheduled, &appointment)?,
        remap_categorical(&df, raw::GENDER, clean::GENDER, RemapTable::Gender)?,
        parse_integer_column(&df, raw::AGE, clean::AGE)?,
        copy_text_column(&df, raw::NEIGHBOURHOOD, clean::NEIGHBOURHOOD)?,
    ];
    for (source, target) in BINARY_FLAG_COLUMNS {
        columns.push(remap_categorical(&df, source, target, RemapTable::BinaryFlag)?);
    }
    columns.push(collapse_severity(&df, raw::HANDICAP, clean::HANDICAP_DEGREE)?);
    columns.push(remap_categorical(
        &df,
        raw::NO_SHOW,
        clean::NO_SHOW,
        RemapTable::Outcome,
    )?);

    let normalized = DataFrame::new(columns)?.select(CLEAN_COLUMNS)?;
    info!(rows = normalized.height(), "normalized appointments");
    Ok(normalized)
}
