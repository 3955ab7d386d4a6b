use crate::core::Timeline;
use crate::errors::AppResult;
use crate::models::Session;
use serde::Serialize;

const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Figure description in the shape scatter-chart libraries expect:
/// one trace per attendee with gaps as nulls.
#[derive(Serialize)]
struct Figure<'a> {
    layout: Layout<'a>,
    session: &'a Session,
    data: Vec<Trace>,
}

#[derive(Serialize)]
struct Layout<'a> {
    title: &'a str,
    xaxis: Axis<'a>,
    yaxis: Axis<'a>,
    hovermode: &'a str,
}

#[derive(Serialize)]
struct Axis<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ticktext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<[String; 2]>,
}

#[derive(Serialize)]
struct Trace {
    #[serde(rename = "type")]
    kind: &'static str,
    mode: &'static str,
    name: String,
    hoverinfo: &'static str,
    x: Vec<Option<String>>,
    y: Vec<Option<f64>>,
    text: Vec<Option<String>>,
}

pub(super) fn render_json(timeline: &Timeline) -> AppResult<String> {
    let layout = &timeline.layout;
    let (start, end) = timeline.time_range();

    let data = timeline
        .series
        .iter()
        .map(|s| {
            let label = s.label();
            let points = s.points();
            Trace {
                kind: "scatter",
                mode: "lines+markers",
                name: label.clone(),
                hoverinfo: "text",
                x: points
                    .iter()
                    .map(|p| p.map(|t| t.format(TS_FORMAT).to_string()))
                    .collect(),
                y: points.iter().map(|p| p.map(|_| s.y)).collect(),
                text: points.iter().map(|p| p.map(|_| label.clone())).collect(),
            }
        })
        .collect();

    let y_ticks = (!layout.show_y_ticks).then(Vec::new);

    let figure = Figure {
        layout: Layout {
            title: &layout.title,
            xaxis: Axis {
                title: &layout.x_title,
                tickvals: None,
                ticktext: None,
                range: Some([
                    start.format(TS_FORMAT).to_string(),
                    end.format(TS_FORMAT).to_string(),
                ]),
            },
            yaxis: Axis {
                title: &layout.y_title,
                tickvals: y_ticks.clone(),
                ticktext: y_ticks.map(|_| Vec::new()),
                range: None,
            },
            hovermode: &layout.hover_mode,
        },
        session: &timeline.session,
        data,
    };

    Ok(serde_json::to_string_pretty(&figure)?)
}
