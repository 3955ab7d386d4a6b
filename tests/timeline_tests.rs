mod common;
use chrono::NaiveDate;
use common::{approx, row, table};
use rattendance::core::build_timeline;
use rattendance::errors::AppError;
use rattendance::models::DataTable;
use rattendance::utils::time::{excel_serial_to_datetime, parse_timestamp};
use rattendance::utils::{clean_timestamp, strip_export_quoting};

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid time")
}

#[test]
fn test_strip_export_quoting() {
    assert_eq!(strip_export_quoting("=\"2021-01-01 10:00:00\""), "2021-01-01 10:00:00");
    assert_eq!(strip_export_quoting("2021-01-01 10:00:00"), "2021-01-01 10:00:00");
    assert_eq!(clean_timestamp("=\"2021-01-01 10:00:00\""), Some(at(10, 0)));
}

#[test]
fn test_parse_timestamp_formats() {
    let expected = Some(at(10, 30));
    assert_eq!(parse_timestamp("2021-01-01 10:30:00"), expected);
    assert_eq!(parse_timestamp("2021-01-01T10:30:00"), expected);
    assert_eq!(parse_timestamp("2021-01-01 10:30"), expected);
    assert_eq!(parse_timestamp("01/01/2021 10:30:00"), expected);
    assert_eq!(parse_timestamp("1/1/2021 10:30:00 AM"), expected);
    assert_eq!(parse_timestamp("2021-01-01T10:30:00+02:00"), expected);
    assert_eq!(parse_timestamp("  2021-01-01 10:30:00.000 "), expected);
    assert_eq!(parse_timestamp("not a date"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn test_excel_serial_dates() {
    // 44197 = 2021-01-01, .4375 = 10:30
    assert_eq!(excel_serial_to_datetime(44197.4375), Some(at(10, 30)));
    assert_eq!(parse_timestamp("44197.4375"), Some(at(10, 30)));
    assert_eq!(excel_serial_to_datetime(-1.0), None);
}

#[test]
fn test_two_attendees_series_and_offsets() {
    let t = table(&[
        row("Alice", "alice@example.com", "2021-01-01 10:00:00", "2021-01-01 10:20:00"),
        row("Bob", "bob@example.com", "2021-01-01 10:05:00", "2021-01-01 10:50:00"),
        row("Alice", "alice@example.com", "2021-01-01 10:30:00", "2021-01-01 11:00:00"),
    ]);

    let timeline = build_timeline(&t).expect("timeline");
    assert_eq!(timeline.series.len(), 2);

    let alice = &timeline.series[0];
    let bob = &timeline.series[1];

    assert_eq!(alice.display_name, "Alice");
    assert_eq!(alice.segments.len(), 2);
    assert_eq!(alice.points().len(), 6);
    assert_eq!(alice.points()[2], None);
    assert_eq!(alice.points()[3], Some(at(10, 30)));
    assert_eq!(bob.points().len(), 3);

    assert!(approx(timeline.y_spacing, 1.0 / 3.0));
    assert!(approx(alice.y, 2.0 / 3.0));
    assert!(approx(bob.y, 1.0 / 3.0));
    assert_eq!(alice.total_minutes(), 50);
}

#[test]
fn test_sort_is_case_insensitive() {
    let t = table(&[
        row("bob", "bob@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("Alice", "alice@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
    ]);

    let timeline = build_timeline(&t).expect("timeline");
    let names: Vec<&str> = timeline
        .series
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "bob"]);
}

#[test]
fn test_same_display_name_different_emails_is_merged() {
    let t = table(&[
        row("Sam", "sam.one@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("Sam", "sam.two@example.com", "2021-01-01 10:20:00", "2021-01-01 10:30:00"),
    ]);

    let timeline = build_timeline(&t).expect("timeline");

    // one series, labelled with the first row's email, but two email slots reserved
    assert_eq!(timeline.series.len(), 1);
    let sam = &timeline.series[0];
    assert_eq!(sam.email, "sam.one@example.com");
    assert_eq!(sam.label(), "Sam (sam.one@example.com)");
    assert_eq!(sam.segments.len(), 2);
    assert!(approx(timeline.y_spacing, 1.0 / 3.0));
    assert!(approx(sam.y, 2.0 / 3.0));
}

#[test]
fn test_session_window_and_time_range() {
    let t = table(&[row(
        "Late",
        "late@example.com",
        "2021-01-01 10:45:00",
        "=\"2021-01-01 11:15:00\"",
    )]);

    let timeline = build_timeline(&t).expect("timeline");
    assert_eq!(timeline.session.start, at(10, 0));
    assert_eq!(timeline.session.end, at(11, 0));
    assert_eq!(timeline.session.duration_minutes(), 60);
    assert_eq!(timeline.time_range(), (at(10, 0), at(11, 15)));
}

#[test]
fn test_layout_defaults() {
    let t = table(&[row("A", "a@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00")]);
    let timeline = build_timeline(&t).expect("timeline");

    assert_eq!(timeline.layout.title, "Attendance Over Time");
    assert_eq!(timeline.layout.x_title, "Time");
    assert_eq!(timeline.layout.y_title, "Presence");
    assert!(!timeline.layout.show_y_ticks);
    assert_eq!(timeline.with_title("Standup").layout.title, "Standup");
}

#[test]
fn test_missing_column_fails() {
    let t = DataTable::new(
        vec!["Display Name".into(), "Join Time".into()],
        vec![vec!["A".into(), "2021-01-01 10:00:00".into()]],
    );

    match build_timeline(&t) {
        Err(AppError::MissingColumn(c)) => assert_eq!(c, "Leave Time"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_invalid_timestamp_fails_whole_build() {
    let t = table(&[
        row("A", "a@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("B", "b@example.com", "yesterday-ish", "2021-01-01 10:10:00"),
    ]);

    match build_timeline(&t) {
        Err(AppError::InvalidTimestamp { column, row, value }) => {
            assert_eq!(column, "Join Time");
            assert_eq!(row, 2);
            assert_eq!(value, "yesterday-ish");
        }
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

#[test]
fn test_invalid_session_time_fails() {
    let t = table(&[[
        "A",
        "a@example.com",
        "2021-01-01 10:00:00",
        "2021-01-01 10:10:00",
        "tbd",
        "2021-01-01 11:00:00",
    ]]);

    assert!(matches!(
        build_timeline(&t),
        Err(AppError::InvalidTimestamp { .. })
    ));
}

#[test]
fn test_invalid_session_time_reports_source_row() {
    // "Alice" sorts first but sits on the third data row
    let t = table(&[
        row("bob", "bob@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("carol", "carol@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        [
            "Alice",
            "alice@example.com",
            "2021-01-01 10:00:00",
            "2021-01-01 10:10:00",
            "tbd",
            "2021-01-01 11:00:00",
        ],
    ]);

    match build_timeline(&t) {
        Err(AppError::InvalidTimestamp { column, row, value }) => {
            assert_eq!(column, "Meeting Start Time");
            assert_eq!(row, 3);
            assert_eq!(value, "tbd");
        }
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

#[test]
fn test_blank_email_counts_as_a_group_but_empty_does_not() {
    let t = table(&[
        row("A", " ", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("B", "", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
        row("C", "c@example.com", "2021-01-01 10:00:00", "2021-01-01 10:10:00"),
    ]);

    let timeline = build_timeline(&t).expect("timeline");

    // " " and "c@example.com" are groups, the empty cell is not
    assert_eq!(timeline.series.len(), 3);
    assert!(approx(timeline.y_spacing, 1.0 / 3.0));
}
