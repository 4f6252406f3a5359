//! Aggregator tests over hand-built cleaned tables.

use chrono::{Datelike, NaiveDate};
use noshow_model::{BinningRule, CLEAN_COLUMNS, DayOfWeek, ReportOptions};
use noshow_report::{AggregateTable, build_dashboard_report, conditional_proportions};
use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

struct Row {
    scheduled_at: &'static str,
    appointment_at: &'static str,
    waiting_days: i64,
    gender: &'static str,
    age: i64,
    neighbourhood: &'static str,
    sms_received: &'static str,
    handicap_degree: &'static str,
    no_show: &'static str,
}

fn weekday(date: &str) -> &'static str {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    DayOfWeek::from_days_from_monday(date.weekday().num_days_from_monday())
        .unwrap()
        .as_str()
}

fn cleaned(rows: &[Row]) -> DataFrame {
    let strs = |f: fn(&Row) -> &'static str| -> Vec<&'static str> { rows.iter().map(f).collect() };
    let ints = |f: fn(&Row) -> i64| -> Vec<i64> { rows.iter().map(f).collect() };
    let no: Vec<&str> = vec!["No"; rows.len()];
    DataFrame::new(vec![
        Column::new(CLEAN_COLUMNS[0].into(), strs(|r| r.scheduled_at)),
        Column::new(CLEAN_COLUMNS[1].into(), strs(|r| r.appointment_at)),
        Column::new(
            CLEAN_COLUMNS[2].into(),
            rows.iter().map(|r| weekday(r.scheduled_at)).collect::<Vec<_>>(),
        ),
        Column::new(
            CLEAN_COLUMNS[3].into(),
            rows.iter().map(|r| weekday(r.appointment_at)).collect::<Vec<_>>(),
        ),
        Column::new(CLEAN_COLUMNS[4].into(), ints(|r| r.waiting_days)),
        Column::new(CLEAN_COLUMNS[5].into(), strs(|r| r.gender)),
        Column::new(CLEAN_COLUMNS[6].into(), ints(|r| r.age)),
        Column::new(CLEAN_COLUMNS[7].into(), strs(|r| r.neighbourhood)),
        Column::new(CLEAN_COLUMNS[8].into(), no.clone()),
        Column::new(CLEAN_COLUMNS[9].into(), no.clone()),
        Column::new(CLEAN_COLUMNS[10].into(), no.clone()),
        Column::new(CLEAN_COLUMNS[11].into(), no),
        Column::new(CLEAN_COLUMNS[12].into(), strs(|r| r.handicap_degree)),
        Column::new(CLEAN_COLUMNS[13].into(), strs(|r| r.sms_received)),
        Column::new(CLEAN_COLUMNS[14].into(), strs(|r| r.no_show)),
    ])
    .unwrap()
}

fn row(
    scheduled_at: &'static str,
    appointment_at: &'static str,
    waiting_days: i64,
    neighbourhood: &'static str,
    sms_received: &'static str,
    no_show: &'static str,
) -> Row {
    Row {
        scheduled_at,
        appointment_at,
        waiting_days,
        gender: "Female",
        age: 40,
        neighbourhood,
        sms_received,
        handicap_degree: "No",
        no_show,
    }
}

fn sample() -> DataFrame {
    cleaned(&[
        row("2016-04-29", "2016-05-27", 28, "JARDIM DA PENHA", "Yes", "No"),
        row("2016-04-29", "2016-05-02", 3, "CENTRO", "Yes", "No"),
        row("2016-05-02", "2016-05-03", 1, "CENTRO", "Yes", "No"),
        row("2016-05-03", "2016-06-01", 29, "ITARARÉ", "Yes", "Yes"),
    ])
}

#[test]
fn sms_proportions_omit_empty_group() {
    let table = conditional_proportions(&sample(), "sms_received", "no_show").unwrap();
    assert_eq!(table.groups(), vec!["Yes"]);
    assert_eq!(table.get("Yes", "No"), Some(0.75));
    assert_eq!(table.get("Yes", "Yes"), Some(0.25));
    assert_eq!(table.get("No", "No"), None);
}

#[test]
fn report_covers_every_view() {
    let options = ReportOptions {
        top_k: 2,
        binning: BinningRule::FixedWidth(10),
    };
    let report = build_dashboard_report(&sample(), &options).unwrap();

    assert_eq!(report.summary.total_appointments, 4);
    assert_eq!(report.summary.no_show_count, 1);
    assert_eq!(report.summary.no_show_rate, 0.25);
    assert_eq!(report.summary.mean_waiting_days, Some(15.25));

    assert_eq!(report.outcome_distribution.values[0].label, "No");
    assert_eq!(report.top_neighbourhoods.categories.len(), 2);
    assert_eq!(report.top_neighbourhoods.categories[0].label, "CENTRO");
    assert_eq!(report.top_no_show_neighbourhoods.categories.len(), 1);
    assert_eq!(report.top_no_show_neighbourhoods.categories[0].label, "ITARARÉ");

    let bins: Vec<(i64, u64)> = report
        .waiting_days_histogram
        .bins
        .iter()
        .map(|b| (b.start, b.count))
        .collect();
    assert_eq!(bins, vec![(1, 2), (11, 0), (21, 2)]);

    let months: Vec<u32> = report
        .calendar
        .appointment_months
        .months
        .iter()
        .map(|m| m.month)
        .collect();
    assert_eq!(months, vec![5, 6]);

    let labels: Vec<&str> = report
        .waiting_days_by_outcome
        .groups
        .iter()
        .map(|g| g.group.as_str())
        .collect();
    assert_eq!(labels, vec!["No", "Yes"]);
    assert_eq!(report.feature_prevalence.features.len(), 5);
    assert_eq!(report.feature_prevalence.features[4].feature, "handicap_degree");
}

#[test]
fn tables_are_named_in_fixed_order() {
    let report = build_dashboard_report(&sample(), &ReportOptions::default()).unwrap();
    let names: Vec<&str> = report
        .tables()
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        vec![
            "summary",
            "outcome_distribution",
            "waiting_days_histogram",
            "sms_no_show",
            "top_no_show_neighbourhoods",
            "top_neighbourhoods",
            "scheduled_months",
            "appointment_months",
            "scheduled_weekdays",
            "appointment_weekdays",
            "waiting_days_by_outcome",
            "feature_prevalence",
        ]
    );
}

#[test]
fn json_is_deterministic() {
    let first = build_dashboard_report(&sample(), &ReportOptions::default())
        .unwrap()
        .to_json()
        .unwrap();
    let second = build_dashboard_report(&sample(), &ReportOptions::default())
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"sms_no_show\""));
}

#[test]
fn empty_table_report() {
    let report = build_dashboard_report(&cleaned(&[]), &ReportOptions::default()).unwrap();
    assert_eq!(report.summary.total_appointments, 0);
    assert_eq!(report.summary.no_show_rate, 0.0);
    assert_eq!(report.summary.mean_waiting_days, None);
    assert!(report.waiting_days_histogram.bins.is_empty());
    assert!(report.sms_no_show.rows.is_empty());
    assert!(report.calendar.scheduled_weekdays.days.is_empty());

    let json = report.to_json().unwrap();
    assert!(json.contains("\"mean_waiting_days\": null"));
    for (name, table) in report.tables().unwrap() {
        let expected = match name {
            "summary" => 1,
            "feature_prevalence" => 5,
            _ => 0,
        };
        assert_eq!(table.height(), expected, "{name}");
    }
}

#[test]
fn summary_table_shape() {
    let report = build_dashboard_report(&sample(), &ReportOptions::default()).unwrap();
    assert_eq!(report.summary.to_frame().unwrap().shape(), (1, 4));
}

proptest! {
    #[test]
    fn group_proportions_sum_to_one(
        pairs in prop::collection::vec((0usize..4, 0usize..3), 1..80)
    ) {
        const GROUPS: [&str; 4] = ["A", "B", "C", "D"];
        const OUTCOMES: [&str; 3] = ["No", "Yes", "Maybe"];
        let groups: Vec<&str> = pairs.iter().map(|(g, _)| GROUPS[*g]).collect();
        let outcomes: Vec<&str> = pairs.iter().map(|(_, o)| OUTCOMES[*o]).collect();
        let df = DataFrame::new(vec![
            Column::new("group".into(), groups),
            Column::new("outcome".into(), outcomes),
        ])
        .unwrap();

        let table = conditional_proportions(&df, "group", "outcome").unwrap();
        for group in table.groups() {
            let sum: f64 = table
                .rows
                .iter()
                .filter(|row| row.group == group)
                .map(|row| row.proportion)
                .sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn missing_column_is_reported() {
    let df = DataFrame::new(vec![Column::new("no_show".into(), vec!["Yes"])]).unwrap();
    let err = build_dashboard_report(&df, &ReportOptions::default()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"format error: column waiting_days not found");
}
