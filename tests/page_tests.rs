mod common;
use common::{HEADER, SAMPLE_CSV, data_dir, write_file};
use rattendance::core::{AttendancePage, PageOutcome};
use rattendance::errors::AppError;

#[test]
fn test_select_builds_chart() {
    let (_tmp, dir) = data_dir();
    write_file(&dir, "meeting.csv", SAMPLE_CSV);

    let mut page = AttendancePage::new(&dir);
    assert_eq!(page.files().expect("files"), vec!["meeting.csv".to_string()]);

    match page.select("meeting.csv").expect("select") {
        PageOutcome::Chart(t) => {
            assert_eq!(t.series.len(), 2);
            assert_eq!(t.series[0].display_name, "Alice");
            assert_eq!(t.series[1].display_name, "bob");
        }
        PageOutcome::NoData => panic!("expected a chart"),
    }
}

#[test]
fn test_empty_table_returns_no_data() {
    let (_tmp, dir) = data_dir();
    write_file(&dir, "empty.csv", &format!("{HEADER}\n"));

    let mut page = AttendancePage::new(&dir);
    assert_eq!(page.select("empty.csv").expect("select"), PageOutcome::NoData);
}

#[test]
fn test_unsupported_file_returns_no_data() {
    let (_tmp, dir) = data_dir();
    write_file(&dir, "notes.txt", "hello");

    let mut page = AttendancePage::new(&dir);
    assert_eq!(page.select("notes.txt").expect("select"), PageOutcome::NoData);
}

#[test]
fn test_missing_column_propagates() {
    let (_tmp, dir) = data_dir();
    write_file(&dir, "partial.csv", "Display Name,Join Time\nA,2021-01-01 10:00:00\n");

    let mut page = AttendancePage::new(&dir);
    assert!(matches!(
        page.select("partial.csv"),
        Err(AppError::MissingColumn(_))
    ));
}

#[test]
fn test_reselecting_is_deterministic_and_cached() {
    let (_tmp, dir) = data_dir();
    write_file(&dir, "meeting.csv", SAMPLE_CSV);

    let mut page = AttendancePage::new(&dir);
    let first = page.select("meeting.csv").expect("first");
    let second = page.select("meeting.csv").expect("second");

    assert_eq!(first, second);
    assert_eq!(page.cache().len(), 1);

    page.clear_cache();
    assert!(page.cache().is_empty());
}
