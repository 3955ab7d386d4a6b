use crate::core::Timeline;
use crate::render::RenderOptions;
use crate::render::scale::TimeScale;
use crate::utils::colors::chart_hex;
use std::fmt::Write;

const FONT: &str = "Inter, Segoe UI, Helvetica, sans-serif";

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 70.0;
const AXIS_BAND: f64 = 60.0;
const LEGEND_ROW: f64 = 20.0;
const ROW_HEIGHT: f64 = 36.0;
const MIN_PLOT_HEIGHT: f64 = 220.0;
const MIN_WIDTH: f64 = 320.0;

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub(super) fn render_svg(timeline: &Timeline, opts: &RenderOptions) -> String {
    let width = (opts.width as f64).max(MIN_WIDTH);
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;

    let legend_h = timeline.series.len() as f64 * LEGEND_ROW + 10.0;
    let height = if opts.height > 0 {
        opts.height as f64
    } else {
        MARGIN_TOP
            + (timeline.series.len() as f64 * ROW_HEIGHT).max(MIN_PLOT_HEIGHT)
            + AXIS_BAND
            + legend_h
    };
    let plot_h = (height - MARGIN_TOP - AXIS_BAND - legend_h).max(40.0);
    let plot_bottom = MARGIN_TOP + plot_h;

    let (start, end) = timeline.time_range();
    let scale = TimeScale::new(start, end, MARGIN_LEFT, plot_w);
    let y_of = |y: f64| MARGIN_TOP + (1.0 - y) * plot_h;

    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width:.0}' height='{height:.0}' viewBox='0 0 {width:.0} {height:.0}' role='img'>"
    );
    let _ = writeln!(svg, "  <rect width='{width:.0}' height='{height:.0}' fill='#ffffff'/>");
    let _ = writeln!(
        svg,
        "  <text x='{MARGIN_LEFT:.0}' y='40' fill='#2a3f5f' font-family='{FONT}' font-size='20'>{}</text>",
        escape_text(&timeline.layout.title)
    );

    // session window
    let sx1 = scale.x(timeline.session.start);
    let sx2 = scale.x(timeline.session.end);
    let _ = writeln!(
        svg,
        "  <rect class='session' x='{:.2}' y='{MARGIN_TOP:.2}' width='{:.2}' height='{plot_h:.2}' fill='#e5ecf6'><title>Session {} – {}</title></rect>",
        sx1.min(sx2),
        (sx2 - sx1).abs(),
        timeline.session.start.format("%Y-%m-%d %H:%M"),
        timeline.session.end.format("%Y-%m-%d %H:%M")
    );

    // x grid and ticks; no y ticks
    for tick in scale.ticks(((plot_w / 90.0) as usize).max(2)) {
        let x = scale.x(tick);
        let _ = writeln!(
            svg,
            "  <line x1='{x:.2}' y1='{MARGIN_TOP:.2}' x2='{x:.2}' y2='{plot_bottom:.2}' stroke='#d0d7e2' stroke-width='1'/>"
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.2}' y='{:.2}' text-anchor='middle' fill='#506784' font-family='{FONT}' font-size='12'>{}</text>",
            plot_bottom + 18.0,
            escape_text(&scale.label(tick))
        );
    }

    let _ = writeln!(
        svg,
        "  <line x1='{MARGIN_LEFT:.2}' y1='{plot_bottom:.2}' x2='{:.2}' y2='{plot_bottom:.2}' stroke='#506784' stroke-width='1'/>",
        MARGIN_LEFT + plot_w
    );
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='{:.2}' text-anchor='middle' fill='#2a3f5f' font-family='{FONT}' font-size='14'>{}</text>",
        MARGIN_LEFT + plot_w / 2.0,
        plot_bottom + 42.0,
        escape_text(&timeline.layout.x_title)
    );
    let _ = writeln!(
        svg,
        "  <text x='0' y='0' transform='translate(28 {:.2}) rotate(-90)' text-anchor='middle' fill='#2a3f5f' font-family='{FONT}' font-size='14'>{}</text>",
        MARGIN_TOP + plot_h / 2.0,
        escape_text(&timeline.layout.y_title)
    );

    // one group per attendee, hover text on every element
    for (idx, series) in timeline.series.iter().enumerate() {
        let color = chart_hex(idx);
        let label = escape_text(&series.label());
        let y = y_of(series.y);

        let _ = writeln!(svg, "  <g class='series' stroke='{color}' fill='{color}'>");
        let _ = writeln!(svg, "    <title>{label}</title>");
        for seg in &series.segments {
            let (x1, x2) = (scale.x(seg.join), scale.x(seg.leave));
            let _ = writeln!(
                svg,
                "    <line x1='{x1:.2}' y1='{y:.2}' x2='{x2:.2}' y2='{y:.2}' stroke-width='2.5'><title>{label} {} – {}</title></line>",
                seg.join.format("%H:%M:%S"),
                seg.leave.format("%H:%M:%S")
            );
            let _ = writeln!(svg, "    <circle cx='{x1:.2}' cy='{y:.2}' r='4'/>");
            let _ = writeln!(svg, "    <circle cx='{x2:.2}' cy='{y:.2}' r='4'/>");
        }
        let _ = writeln!(svg, "  </g>");
    }

    // legend
    let legend_top = plot_bottom + AXIS_BAND;
    for (idx, series) in timeline.series.iter().enumerate() {
        let y = legend_top + idx as f64 * LEGEND_ROW;
        let _ = writeln!(
            svg,
            "  <rect x='{MARGIN_LEFT:.0}' y='{:.2}' width='18' height='4' fill='{}'/>",
            y + 6.0,
            chart_hex(idx)
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.0}' y='{:.2}' fill='#2a3f5f' font-family='{FONT}' font-size='12'>{}</text>",
            MARGIN_LEFT + 26.0,
            y + 12.0,
            escape_text(&series.label())
        );
    }

    let _ = writeln!(svg, "</svg>");
    svg
}
