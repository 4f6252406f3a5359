//! Column contract for the raw dataset and the cleaned table.
//!
//! Raw names follow the published dataset spelling (including
//! `Hipertension` and `Handcap`). Clean names are the stable contract
//! handed to the aggregator and to any renderer.

use serde::Serialize;

/// Raw column names as they appear in the source CSV header.
pub mod raw {
    pub const PATIENT_ID: &str = "PatientId";
    pub const APPOINTMENT_ID: &str = "AppointmentID";
    pub const GENDER: &str = "Gender";
    pub const SCHEDULED_DAY: &str = "ScheduledDay";
    pub const APPOINTMENT_DAY: &str = "AppointmentDay";
    pub const AGE: &str = "Age";
    pub const NEIGHBOURHOOD: &str = "Neighbourhood";
    pub const SCHOLARSHIP: &str = "Scholarship";
    pub const HYPERTENSION: &str = "Hipertension";
    pub const DIABETES: &str = "Diabetes";
    pub const ALCOHOLISM: &str = "Alcoholism";
    pub const HANDICAP: &str = "Handcap";
    pub const SMS_RECEIVED: &str = "SMS_received";
    pub const NO_SHOW: &str = "No-show";
}

/// Column names of the cleaned table.
pub mod clean {
    pub const SCHEDULED_AT: &str = "scheduled_at";
    pub const APPOINTMENT_AT: &str = "appointment_at";
    pub const SCHEDULED_DAY_OF_WEEK: &str = "scheduled_day_of_week";
    pub const APPOINTMENT_DAY_OF_WEEK: &str = "appointment_day_of_week";
    pub const WAITING_DAYS: &str = "waiting_days";
    pub const GENDER: &str = "gender";
    pub const AGE: &str = "age";
    pub const NEIGHBOURHOOD: &str = "neighbourhood";
    pub const SCHOLARSHIP: &str = "scholarship";
    pub const HYPERTENSION: &str = "hypertension";
    pub const DIABETES: &str = "diabetes";
    pub const ALCOHOLISM: &str = "alcoholism";
    pub const HANDICAP_DEGREE: &str = "handicap_degree";
    pub const SMS_RECEIVED: &str = "sms_received";
    pub const NO_SHOW: &str = "no_show";
}

/// Every raw column the loader requires, in canonical order.
pub const RAW_COLUMNS: [&str; 14] = [
    raw::PATIENT_ID,
    raw::APPOINTMENT_ID,
    raw::GENDER,
    raw::SCHEDULED_DAY,
    raw::APPOINTMENT_DAY,
    raw::AGE,
    raw::NEIGHBOURHOOD,
    raw::SCHOLARSHIP,
    raw::HYPERTENSION,
    raw::DIABETES,
    raw::ALCOHOLISM,
    raw::HANDICAP,
    raw::SMS_RECEIVED,
    raw::NO_SHOW,
];

/// Identifier columns removed by the normalizer.
pub const IDENTIFIER_COLUMNS: [&str; 2] = [raw::PATIENT_ID, raw::APPOINTMENT_ID];

/// Cleaned table columns, in output order.
pub const CLEAN_COLUMNS: [&str; 15] = [
    clean::SCHEDULED_AT,
    clean::APPOINTMENT_AT,
    clean::SCHEDULED_DAY_OF_WEEK,
    clean::APPOINTMENT_DAY_OF_WEEK,
    clean::WAITING_DAYS,
    clean::GENDER,
    clean::AGE,
    clean::NEIGHBOURHOOD,
    clean::SCHOLARSHIP,
    clean::HYPERTENSION,
    clean::DIABETES,
    clean::ALCOHOLISM,
    clean::HANDICAP_DEGREE,
    clean::SMS_RECEIVED,
    clean::NO_SHOW,
];

/// 0/1 flag columns and their clean names.
pub const BINARY_FLAG_COLUMNS: [(&str, &str); 5] = [
    (raw::SCHOLARSHIP, clean::SCHOLARSHIP),
    (raw::HYPERTENSION, clean::HYPERTENSION),
    (raw::DIABETES, clean::DIABETES),
    (raw::ALCOHOLISM, clean::ALCOHOLISM),
    (raw::SMS_RECEIVED, clean::SMS_RECEIVED),
];

/// Yes/No features summarized by the prevalence card, in display order.
pub const PREVALENCE_FEATURES: [&str; 5] = [
    clean::SCHOLARSHIP,
    clean::ALCOHOLISM,
    clean::HYPERTENSION,
    clean::DIABETES,
    clean::HANDICAP_DEGREE,
];

/// How a raw column is turned into its clean counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnTreatment {
    /// Removed after load.
    Dropped,
    /// Parsed to a calendar date, with weekday derived alongside.
    Date,
    /// Parsed as an integer.
    Integer,
    /// Trimmed free text.
    Text,
    /// 0/1 flag remapped to No/Yes.
    BinaryFlag,
    /// M/F remapped to Male/Female.
    Gender,
    /// Yes/No label validated.
    Outcome,
    /// Severity count collapsed to No/Yes.
    Severity,
}

impl ColumnTreatment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnTreatment::Dropped => "dropped",
            ColumnTreatment::Date => "date",
            ColumnTreatment::Integer => "integer",
            ColumnTreatment::Text => "text",
            ColumnTreatment::BinaryFlag => "0/1 -> No/Yes",
            ColumnTreatment::Gender => "M/F -> Male/Female",
            ColumnTreatment::Outcome => "Yes/No",
            ColumnTreatment::Severity => ">0 -> Yes",
        }
    }
}

/// One entry of the raw-to-clean contract.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSpec {
    pub raw: &'static str,
    pub clean: &'static [&'static str],
    pub treatment: ColumnTreatment,
    pub description: &'static str,
}

/// The full raw-to-clean contract, in raw column order.
pub fn column_specs() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            raw: raw::PATIENT_ID,
            clean: &[],
            treatment: ColumnTreatment::Dropped,
            description: "Patient identifier",
        },
        ColumnSpec {
            raw: raw::APPOINTMENT_ID,
            clean: &[],
            treatment: ColumnTreatment::Dropped,
            description: "Appointment identifier",
        },
        ColumnSpec {
            raw: raw::GENDER,
            clean: &[clean::GENDER],
            treatment: ColumnTreatment::Gender,
            description: "Patient gender",
        },
        ColumnSpec {
            raw: raw::SCHEDULED_DAY,
            clean: &[clean::SCHEDULED_AT, clean::SCHEDULED_DAY_OF_WEEK],
            treatment: ColumnTreatment::Date,
            description: "When the appointment was booked",
        },
        ColumnSpec {
            raw: raw::APPOINTMENT_DAY,
            clean: &[clean::APPOINTMENT_AT, clean::APPOINTMENT_DAY_OF_WEEK],
            treatment: ColumnTreatment::Date,
            description: "Day of the appointment",
        },
        ColumnSpec {
            raw: raw::AGE,
            clean: &[clean::AGE],
            treatment: ColumnTreatment::Integer,
            description: "Patient age in years",
        },
        ColumnSpec {
            raw: raw::NEIGHBOURHOOD,
            clean: &[clean::NEIGHBOURHOOD],
            treatment: ColumnTreatment::Text,
            description: "Location of the clinic",
        },
        ColumnSpec {
            raw: raw::SCHOLARSHIP,
            clean: &[clean::SCHOLARSHIP],
            treatment: ColumnTreatment::BinaryFlag,
            description: "Enrolled in the welfare programme",
        },
        ColumnSpec {
            raw: raw::HYPERTENSION,
            clean: &[clean::HYPERTENSION],
            treatment: ColumnTreatment::BinaryFlag,
            description: "Hypertension diagnosis",
        },
        ColumnSpec {
            raw: raw::DIABETES,
            clean: &[clean::DIABETES],
            treatment: ColumnTreatment::BinaryFlag,
            description: "Diabetes diagnosis",
        },
        ColumnSpec {
            raw: raw::ALCOHOLISM,
            clean: &[clean::ALCOHOLISM],
            treatment: ColumnTreatment::BinaryFlag,
            description: "Alcoholism diagnosis",
        },
        ColumnSpec {
            raw: raw::HANDICAP,
            clean: &[clean::HANDICAP_DEGREE],
            treatment: ColumnTreatment::Severity,
            description: "Handicap severity count",
        },
        ColumnSpec {
            raw: raw::SMS_RECEIVED,
            clean: &[clean::SMS_RECEIVED],
            treatment: ColumnTreatment::BinaryFlag,
            description: "Reminder SMS received",
        },
        ColumnSpec {
            raw: raw::NO_SHOW,
            clean: &[clean::NO_SHOW],
            treatment: ColumnTreatment::Outcome,
            description: "Patient missed the appointment",
        },
    ]
}
