//! Histogram rendering.
//!
//! Draws stacked per-tag bars of entry counts for each hour of the day,
//! with hour labels on the x axis, count gridlines on the y axis, and the
//! same tag legend as the dot plot.

use eframe::egui::{self, Painter, Pos2, Rect, Stroke};

use crate::core::chart::{HourHistogram, HOUR_BUCKETS};
use crate::core::color::TagColors;
use crate::core::dates;
use crate::core::settings::ChartColors;

/// Width of the count label column on the left side.
const MARGIN_LEFT: f32 = 48.0;

/// Height of the hour label strip at the bottom.
const MARGIN_BOTTOM: f32 = 28.0;

/// Padding above the plot area.
const MARGIN_TOP: f32 = 8.0;

/// Width reserved for the tag legend on the right side.
const LEGEND_WIDTH: f32 = 130.0;

/// Fraction of each hour column occupied by the bar.
const BAR_FILL: f32 = 0.7;

/// Hours between labelled x-axis ticks.
const HOUR_TICK_INTERVAL: usize = 2;

/// Round a count up to the next multiple of five, with a floor of five.
///
/// Keeps the y axis on gridline-friendly values even for tiny journals.
fn nice_y_max(max_count: u32) -> u32 {
    max_count.div_ceil(5).max(1) * 5
}

/// Histogram renderer.
pub struct HistogramRenderer<'a> {
    /// Per-tag hourly counts in stacking order
    histogram: &'a HourHistogram,
    /// Tag color mapping for bars and legend
    tag_colors: &'a TagColors,
    /// Chart chrome colors
    chrome: &'a ChartColors,
}

impl<'a> HistogramRenderer<'a> {
    /// Create a new histogram renderer.
    pub fn new(
        histogram: &'a HourHistogram,
        tag_colors: &'a TagColors,
        chrome: &'a ChartColors,
    ) -> Self {
        Self {
            histogram,
            tag_colors,
            chrome,
        }
    }

    /// Render the complete histogram.
    pub fn render(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(available.x, available.y.max(120.0)),
            egui::Sense::hover(),
        );

        let rect = response.rect;
        let plot = Rect::from_min_max(
            Pos2::new(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
            Pos2::new(rect.right() - LEGEND_WIDTH, rect.bottom() - MARGIN_BOTTOM),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return;
        }

        let y_max = nice_y_max(self.histogram.max_stacked_count());

        self.draw_background(&painter, rect, plot);
        self.draw_count_grid(&painter, rect, plot, y_max);
        self.draw_hour_labels(&painter, rect, plot);
        self.draw_bars(&painter, plot, y_max);
        self.draw_legend(&painter, rect, plot);
    }

    /// Draw the background, margins, and border.
    fn draw_background(&self, painter: &Painter, rect: Rect, plot: Rect) {
        painter.rect_filled(rect, 0.0, self.chrome.margin_background_color());
        painter.rect_filled(plot, 0.0, self.chrome.background_color());
        painter.rect_stroke(
            plot,
            0.0,
            Stroke::new(1.0, self.chrome.grid_major_color()),
            egui::StrokeKind::Inside,
        );
    }

    /// Draw horizontal count gridlines and their labels.
    ///
    /// Minor lines every five entries, labelled major lines every ten
    /// (every five when the chart is short enough that ten never appears).
    fn draw_count_grid(&self, painter: &Painter, rect: Rect, plot: Rect, y_max: u32) {
        let label_step = if y_max <= 10 { 5 } else { 10 };

        let mut count = 5u32;
        while count <= y_max {
            let y = plot.bottom() - (count as f32 / y_max as f32) * plot.height();
            let major = count % label_step == 0;

            let stroke = if major {
                Stroke::new(1.0, self.chrome.grid_major_color())
            } else {
                Stroke::new(0.5, self.chrome.grid_minor_color())
            };
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                stroke,
            );

            if major {
                painter.text(
                    Pos2::new(rect.left() + MARGIN_LEFT - 6.0, y),
                    egui::Align2::RIGHT_CENTER,
                    format!("{}", count),
                    egui::FontId::proportional(10.0),
                    self.chrome.text_label_color(),
                );
            }

            count += 5;
        }
    }

    /// Draw hour-of-day labels under the x axis.
    fn draw_hour_labels(&self, painter: &Painter, rect: Rect, plot: Rect) {
        let column = plot.width() / HOUR_BUCKETS as f32;

        for hour in (0..HOUR_BUCKETS).step_by(HOUR_TICK_INTERVAL) {
            let x = plot.left() + (hour as f32 + 0.5) * column;
            painter.text(
                Pos2::new(x, rect.bottom() - MARGIN_BOTTOM / 2.0),
                egui::Align2::CENTER_CENTER,
                dates::hour_label(hour as u32),
                egui::FontId::proportional(10.0),
                self.chrome.text_label_color(),
            );
        }
    }

    /// Draw the stacked bars, one column per hour.
    fn draw_bars(&self, painter: &Painter, plot: Rect, y_max: u32) {
        let column = plot.width() / HOUR_BUCKETS as f32;
        let bar_width = column * BAR_FILL;

        for hour in 0..HOUR_BUCKETS {
            let center_x = plot.left() + (hour as f32 + 0.5) * column;
            let mut stacked = 0u32;

            for (tag, counts) in &self.histogram.series {
                let count = counts[hour];
                if count == 0 {
                    continue;
                }

                let bottom =
                    plot.bottom() - (stacked as f32 / y_max as f32) * plot.height();
                let top = plot.bottom()
                    - ((stacked + count) as f32 / y_max as f32) * plot.height();

                let bar = Rect::from_min_max(
                    Pos2::new(center_x - bar_width / 2.0, top),
                    Pos2::new(center_x + bar_width / 2.0, bottom),
                );
                painter.rect_filled(bar, 1.0, self.tag_colors.get(tag));

                stacked += count;
            }
        }
    }

    /// Draw the tag legend to the right of the plot area.
    fn draw_legend(&self, painter: &Painter, rect: Rect, plot: Rect) {
        let mut y = plot.top() + 10.0;
        let x = rect.right() - LEGEND_WIDTH + 12.0;

        for (tag, color) in self.tag_colors.legend() {
            if y > plot.bottom() - 6.0 {
                break;
            }

            let swatch = Rect::from_min_size(Pos2::new(x - 4.0, y - 4.0), egui::vec2(8.0, 8.0));
            painter.rect_filled(swatch, 1.0, color);
            painter.text(
                Pos2::new(x + 10.0, y),
                egui::Align2::LEFT_CENTER,
                tag,
                egui::FontId::proportional(12.0),
                self.chrome.text_label_color(),
            );

            y += 18.0;
        }
    }
}
