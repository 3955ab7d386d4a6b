//! Single-page landscape PDF chart.

use crate::core::Timeline;
use crate::render::scale::TimeScale;
use crate::utils::colors::chart_rgb;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Fraction of the page (right side) kept for the legend
const LEGEND_SHARE: f32 = 0.26;

struct PdfChart {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    title_font_size: f32,
}

impl PdfChart {
    /// A4 landscape
    fn new() -> Self {
        let mut pdf = Pdf::new();

        // ids assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 50.0,

            next_id,
            font_id,

            font_size: 9.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32), rgb: (f32, f32, f32), width: f32) {
        content.save_state();
        content.set_stroke_rgb(rgb.0, rgb.1, rgb.2);
        content.set_line_width(width);
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
        content.restore_state();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_timeline(&mut self, timeline: &Timeline) {
        let mut content = self.new_page();

        let legend_w = self.page_w * LEGEND_SHARE;
        let plot_x = self.margin + 20.0;
        let plot_w = self.page_w - plot_x - self.margin - legend_w;
        let plot_bottom = self.margin + 30.0;
        let plot_top = self.page_h - self.margin - 20.0;
        let plot_h = plot_top - plot_bottom;

        let title_y = self.page_h - self.margin + 10.0;
        self.draw_text(&mut content, self.margin, title_y, self.title_font_size, &timeline.layout.title);

        let (start, end) = timeline.time_range();
        let scale = TimeScale::new(start, end, plot_x as f64, plot_w as f64);

        // session window
        let sx1 = scale.x(timeline.session.start) as f32;
        let sx2 = scale.x(timeline.session.end) as f32;
        self.fill_rect(&mut content, sx1.min(sx2), plot_bottom, (sx2 - sx1).abs(), plot_h, (0.90, 0.93, 0.96));

        // grid + tick labels
        for tick in scale.ticks(8) {
            let x = scale.x(tick) as f32;
            self.draw_line(&mut content, (x, plot_bottom), (x, plot_top), (0.82, 0.84, 0.89), 0.5);
            let label = scale.label(tick);
            let half = label.len() as f32 * self.font_size * 0.25;
            self.draw_text(&mut content, x - half, plot_bottom - 14.0, self.font_size, &label);
        }

        let axis = (0.31, 0.40, 0.52);
        self.draw_line(&mut content, (plot_x, plot_bottom), (plot_x + plot_w, plot_bottom), axis, 1.0);
        self.draw_text(
            &mut content,
            plot_x + plot_w / 2.0 - 10.0,
            plot_bottom - 30.0,
            self.font_size + 2.0,
            &timeline.layout.x_title,
        );
        self.draw_text(&mut content, self.margin - 30.0, plot_top + 6.0, self.font_size + 2.0, &timeline.layout.y_title);

        // series: segments with square markers at both ends
        for (idx, series) in timeline.series.iter().enumerate() {
            let (r, g, b) = chart_rgb(idx);
            let rgb = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            let y = plot_bottom + series.y as f32 * plot_h;

            for seg in &series.segments {
                let x1 = scale.x(seg.join) as f32;
                let x2 = scale.x(seg.leave) as f32;
                self.draw_line(&mut content, (x1, y), (x2, y), rgb, 2.0);
                self.fill_rect(&mut content, x1 - 2.5, y - 2.5, 5.0, 5.0, rgb);
                self.fill_rect(&mut content, x2 - 2.5, y - 2.5, 5.0, 5.0, rgb);
            }
        }

        // legend, as many rows as fit
        let legend_x = self.page_w - self.margin - legend_w + 15.0;
        let row_h = self.font_size + 5.0;
        let fit = ((plot_h / row_h) as usize).max(1);
        let shown = timeline.series.len().min(fit);

        for (idx, series) in timeline.series.iter().take(shown).enumerate() {
            let (r, g, b) = chart_rgb(idx);
            let y = plot_top - (idx as f32 + 1.0) * row_h;
            self.fill_rect(&mut content, legend_x, y + 2.0, 12.0, 3.0, (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0));
            self.draw_text(&mut content, legend_x + 16.0, y, self.font_size, &series.label());
        }

        if shown < timeline.series.len() {
            let more = format!("... and {} more", timeline.series.len() - shown);
            self.draw_text(&mut content, legend_x, plot_bottom - 14.0, self.font_size, &more);
        }

        self.finalize_page(content);
    }

    fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        self.pdf.finish()
    }
}

pub(super) fn render_pdf(timeline: &Timeline) -> Vec<u8> {
    let mut chart = PdfChart::new();
    chart.draw_timeline(timeline);
    chart.finish()
}
