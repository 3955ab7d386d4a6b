// src/render/mod.rs

mod fs_utils;
mod json;
mod pdf;
pub mod scale;
mod svg;
mod text;

pub use fs_utils::{ensure_writable, write_output};

use crate::core::Timeline;
use crate::errors::AppResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Text,
    Svg,
    Pdf,
    Json,
}

impl ChartFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFormat::Text => "text",
            ChartFormat::Svg => "svg",
            ChartFormat::Pdf => "pdf",
            ChartFormat::Json => "json",
        }
    }

    /// Binary formats cannot be written to the terminal
    pub fn is_binary(&self) -> bool {
        matches!(self, ChartFormat::Pdf)
    }
}

/// Size and styling knobs shared by the renderers.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Columns of the time axis (text) or page width in points (svg)
    pub width: u32,
    /// Height in points (svg); 0 = derived from the number of attendees
    pub height: u32,
    /// ANSI colors in the text chart
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 0,
            color: false,
        }
    }
}

/// Render a timeline in the requested format.
pub fn render(timeline: &Timeline, format: ChartFormat, opts: &RenderOptions) -> AppResult<Vec<u8>> {
    tracing::debug!(
        format = format.as_str(),
        series = timeline.series.len(),
        width = opts.width,
        "rendering chart"
    );

    Ok(match format {
        ChartFormat::Text => text::render_text(timeline, opts).into_bytes(),
        ChartFormat::Svg => svg::render_svg(timeline, opts).into_bytes(),
        ChartFormat::Pdf => pdf::render_pdf(timeline),
        ChartFormat::Json => json::render_json(timeline)?.into_bytes(),
    })
}
