#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::models::DataTable;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str =
    "Display Name,Attendee Email,Join Time,Leave Time,Meeting Start Time,Meeting End Time";

/// Two intervals for Alice, one for bob, timestamps wrapped the way spreadsheet exports do.
pub const SAMPLE_CSV: &str = "\
Display Name,Attendee Email,Join Time,Leave Time,Meeting Start Time,Meeting End Time
bob,bob@example.com,=\"2021-01-01 10:05:00\",=\"2021-01-01 10:50:00\",=\"2021-01-01 10:00:00\",=\"2021-01-01 11:00:00\"
Alice,alice@example.com,=\"2021-01-01 10:00:00\",=\"2021-01-01 10:20:00\",=\"2021-01-01 10:00:00\",=\"2021-01-01 11:00:00\"
Alice,alice@example.com,=\"2021-01-01 10:30:00\",=\"2021-01-01 11:00:00\",=\"2021-01-01 10:00:00\",=\"2021-01-01 11:00:00\"
";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Fresh data directory inside a temp dir (kept alive by the returned guard)
pub fn data_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = tmp.path().join("datafiles");
    fs::create_dir_all(&dir).expect("create data dir");
    (tmp, dir)
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Build an in-memory table with the standard header
pub fn table(rows: &[[&str; 6]]) -> DataTable {
    DataTable::new(
        HEADER.split(',').map(String::from).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

/// Row with plain timestamps and a 10:00–11:00 session
pub fn row<'a>(name: &'a str, email: &'a str, join: &'a str, leave: &'a str) -> [&'a str; 6] {
    [name, email, join, leave, "2021-01-01 10:00:00", "2021-01-01 11:00:00"]
}

/// Write SAMPLE_CSV's content as an .xlsx workbook
pub fn write_sample_xlsx(path: &Path) {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (r, line) in SAMPLE_CSV.lines().enumerate() {
        for (c, cell) in line.split(',').enumerate() {
            sheet
                .write_string(r as u32, c as u16, cell)
                .expect("write cell");
        }
    }

    workbook.save(path).expect("save workbook");
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Excel serial for 2021-01-01 at `hour:minute`
pub fn serial(hour: u32, minute: u32) -> f64 {
    44_197.0 + f64::from(hour * 60 + minute) / 1440.0
}

/// SAMPLE_CSV's attendees with the time columns stored as Excel serial numbers
/// and an extra boolean `Present` column.
pub fn write_serial_xlsx(path: &Path) {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, name) in HEADER.split(',').chain(["Present"]).enumerate() {
        sheet.write_string(0, c as u16, name).expect("write header");
    }

    let rows = [
        ("bob", "bob@example.com", (10, 5), (10, 50)),
        ("Alice", "alice@example.com", (10, 0), (10, 20)),
        ("Alice", "alice@example.com", (10, 30), (11, 0)),
    ];

    for (i, (name, email, join, leave)) in rows.into_iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, name).expect("write name");
        sheet.write_string(r, 1, email).expect("write email");
        sheet.write_number(r, 2, serial(join.0, join.1)).expect("write join");
        sheet.write_number(r, 3, serial(leave.0, leave.1)).expect("write leave");
        sheet.write_number(r, 4, serial(10, 0)).expect("write start");
        sheet.write_number(r, 5, serial(11, 0)).expect("write end");
        sheet.write_boolean(r, 6, i != 1).expect("write present");
    }

    workbook.save(path).expect("save workbook");
}

/// Hand-built .xlsx archive from `(member name, xml)` parts
pub fn write_raw_xlsx(path: &Path, parts: &[(&str, &str)]) {
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    let file = fs::File::create(path).expect("create archive");
    let mut zip = ZipWriter::new(file);
    for (name, xml) in parts {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("start member");
        zip.write_all(xml.as_bytes()).expect("write member");
    }
    zip.finish().expect("finish archive");
}

/// Minimal worksheet part around the given `<row>` elements
pub fn sheet_xml(rows: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
<sheetData>{rows}</sheetData></worksheet>"
    )
}
