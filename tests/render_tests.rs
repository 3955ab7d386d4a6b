mod common;
use common::{row, table};
use rattendance::core::{Timeline, build_timeline};
use rattendance::render::{ChartFormat, RenderOptions, render};
use serde_json::Value;

fn sample() -> Timeline {
    build_timeline(&table(&[
        row("Alice <PM>", "alice@example.com", "2021-01-01 10:00:00", "2021-01-01 10:20:00"),
        row("bob", "bob@example.com", "2021-01-01 10:05:00", "2021-01-01 10:50:00"),
        row("Alice <PM>", "alice@example.com", "2021-01-01 10:30:00", "2021-01-01 11:00:00"),
    ]))
    .expect("timeline")
}

fn render_str(format: ChartFormat, width: u32) -> String {
    let opts = RenderOptions {
        width,
        ..Default::default()
    };
    String::from_utf8(render(&sample(), format, &opts).expect("render")).expect("utf8")
}

#[test]
fn test_text_chart_rows_and_axis() {
    let out = render_str(ChartFormat::Text, 60);

    assert!(out.starts_with("Attendance Over Time"));
    assert!(out.contains("Session 2021-01-01 10:00 → 2021-01-01 11:00 (60 min)"));
    assert!(out.contains("10:00"));
    assert!(out.contains("11:00"));
    assert!(!out.contains('\x1b'));

    let alice = out
        .lines()
        .find(|l| l.starts_with("Alice <PM>"))
        .expect("alice row");
    assert!(alice.contains('█'));
    assert!(alice.contains("50 min"));

    // Alice's gap 10:20–10:30 shows as session background
    assert!(alice.contains('·'));
}

#[test]
fn test_text_chart_orders_rows_like_series() {
    let out = render_str(ChartFormat::Text, 30);
    let alice = out.find("Alice <PM>").expect("alice");
    let bob = out.find("bob ").expect("bob");
    assert!(alice < bob);
}

#[test]
fn test_svg_chart_has_series_legend_and_escaping() {
    let out = render_str(ChartFormat::Svg, 800);

    assert!(out.starts_with("<svg"));
    assert!(out.trim_end().ends_with("</svg>"));
    assert_eq!(out.matches("<g class='series'").count(), 2);
    assert!(out.contains("Alice &lt;PM&gt; (alice@example.com)"));
    assert!(!out.contains("Alice <PM>"));
    assert!(out.contains(">Presence</text>"));
    assert!(out.contains(">Time</text>"));
    assert!(out.contains("class='session'"));
    // 3 segments, 2 markers each
    assert_eq!(out.matches("<circle").count(), 6);
}

#[test]
fn test_json_figure_has_gaps_as_nulls() {
    let out = render_str(ChartFormat::Json, 0);
    let fig: Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(fig["layout"]["title"], "Attendance Over Time");
    assert_eq!(fig["layout"]["yaxis"]["tickvals"], Value::Array(vec![]));
    assert_eq!(fig["layout"]["hovermode"], "closest");

    let data = fig["data"].as_array().expect("traces");
    assert_eq!(data.len(), 2);

    let alice = &data[0];
    assert_eq!(alice["name"], "Alice <PM> (alice@example.com)");
    assert_eq!(alice["mode"], "lines+markers");
    let x = alice["x"].as_array().expect("x");
    assert_eq!(x.len(), 6);
    assert_eq!(x[0], "2021-01-01T10:00:00");
    assert!(x[2].is_null());
    assert!(alice["y"][2].is_null());
    assert!(alice["text"][2].is_null());

    assert_eq!(fig["session"]["start"], "2021-01-01T10:00:00");
}

#[test]
fn test_pdf_chart_is_a_pdf() {
    let bytes = render(&sample(), ChartFormat::Pdf, &RenderOptions::default()).expect("render");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 500);
}
