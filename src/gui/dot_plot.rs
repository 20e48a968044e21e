//! Dot plot rendering.
//!
//! Draws one point per journal entry at (calendar day, time of day),
//! with day gridlines on the x axis, hour gridlines on the y axis, and a
//! tag legend on the right. Midnight sits at the top of the chart.

use eframe::egui::{self, Painter, Pos2, Rect, Stroke};

use crate::core::chart::DotPlotData;
use crate::core::color::TagColors;
use crate::core::dates;
use crate::core::settings::ChartColors;

/// Width of the time-of-day label column on the left side.
const MARGIN_LEFT: f32 = 64.0;

/// Height of the date label strip at the bottom.
const MARGIN_BOTTOM: f32 = 28.0;

/// Padding above the plot area.
const MARGIN_TOP: f32 = 8.0;

/// Width reserved for the tag legend on the right side.
const LEGEND_WIDTH: f32 = 130.0;

/// Radius of each entry dot.
const DOT_RADIUS: f32 = 3.0;

/// Days between labelled x-axis gridlines.
const DAY_TICK_INTERVAL: i32 = 10;

/// Days of padding on both ends of the x axis.
const X_PAD_DAYS: i32 = 5;

/// Fallback x-axis span when the journal is empty.
const EMPTY_SPAN_DAYS: i32 = 30;

/// Dot plot renderer.
pub struct DotPlotRenderer<'a> {
    /// Extracted chart data
    data: &'a DotPlotData,
    /// Tag color mapping for points and legend
    tag_colors: &'a TagColors,
    /// Chart chrome colors
    chrome: &'a ChartColors,
    /// Today's day number, right end of the x axis
    today: i32,
}

impl<'a> DotPlotRenderer<'a> {
    /// Create a new dot plot renderer.
    pub fn new(data: &'a DotPlotData, tag_colors: &'a TagColors, chrome: &'a ChartColors) -> Self {
        Self {
            data,
            tag_colors,
            chrome,
            today: dates::today_day_number(),
        }
    }

    #[cfg(test)]
    fn with_today(mut self, today: i32) -> Self {
        self.today = today;
        self
    }

    /// Inclusive day range shown on the x axis.
    ///
    /// Pads the earliest entry and today by a few days each, like the
    /// chart leaves breathing room on both ends. An empty journal shows
    /// the last month.
    fn day_range(&self) -> (i32, i32) {
        let end = self.today + X_PAD_DAYS;
        let start = match self.data.first_day {
            Some(first) => (first - X_PAD_DAYS).min(end - 1),
            None => end - EMPTY_SPAN_DAYS,
        };
        (start, end)
    }

    /// Render the complete dot plot.
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

        self.draw_background(&painter, rect, plot);
        self.draw_hour_grid(&painter, rect, plot);
        self.draw_day_grid(&painter, rect, plot);
        self.draw_points(&painter, plot);
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

    /// Draw hour gridlines and time-of-day labels on the y axis.
    ///
    /// Minor lines every hour, major lines with labels every two hours.
    /// Midnight is at the top.
    fn draw_hour_grid(&self, painter: &Painter, rect: Rect, plot: Rect) {
        for hour in 0..=24u32 {
            let frac = hour as f32 / 24.0;
            let y = plot.top() + frac * plot.height();
            let major = hour % 2 == 0;

            let stroke = if major {
                Stroke::new(1.0, self.chrome.grid_major_color())
            } else {
                Stroke::new(0.5, self.chrome.grid_minor_color())
            };
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                stroke,
            );

            if major && hour < 24 {
                painter.text(
                    Pos2::new(rect.left() + MARGIN_LEFT - 6.0, y),
                    egui::Align2::RIGHT_CENTER,
                    dates::hour_label(hour),
                    egui::FontId::proportional(10.0),
                    self.chrome.text_label_color(),
                );
            }
        }
    }

    /// Draw day gridlines and date labels on the x axis.
    fn draw_day_grid(&self, painter: &Painter, rect: Rect, plot: Rect) {
        let (start, end) = self.day_range();
        let span = (end - start).max(1) as f32;

        // Align tick marks to multiples of the interval
        let first_tick = start - start.rem_euclid(DAY_TICK_INTERVAL) + DAY_TICK_INTERVAL;

        let mut day = first_tick;
        while day <= end {
            let x = plot.left() + (day - start) as f32 / span * plot.width();

            painter.line_segment(
                [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
                Stroke::new(0.5, self.chrome.grid_minor_color()),
            );
            painter.text(
                Pos2::new(x, rect.bottom() - MARGIN_BOTTOM / 2.0),
                egui::Align2::CENTER_CENTER,
                dates::day_label(day),
                egui::FontId::proportional(10.0),
                self.chrome.text_label_color(),
            );

            day += DAY_TICK_INTERVAL;
        }
    }

    /// Draw one dot per entry.
    fn draw_points(&self, painter: &Painter, plot: Rect) {
        let (start, end) = self.day_range();
        let span = (end - start).max(1) as f32;

        for point in &self.data.points {
            let x = plot.left() + (point.day - start) as f32 / span * plot.width();
            let y = plot.top() + point.frac as f32 * plot.height();

            if x < plot.left() || x > plot.right() {
                continue;
            }

            painter.circle_filled(
                Pos2::new(x, y),
                DOT_RADIUS,
                self.tag_colors.get(&point.tag),
            );
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

            painter.circle_filled(Pos2::new(x, y), 4.0, color);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::{DotPoint, DotPlotData};

    fn renderer_parts() -> (TagColors, ChartColors) {
        (
            TagColors::from_tags(vec!["none".to_string(), "work".to_string()]),
            ChartColors::default(),
        )
    }

    #[test]
    fn test_day_range_pads_both_ends() {
        let (tags, chrome) = renderer_parts();
        let data = DotPlotData {
            points: vec![DotPoint {
                day: 700_000,
                frac: 0.5,
                tag: "work".to_string(),
            }],
            first_day: Some(700_000),
        };

        let renderer = DotPlotRenderer::new(&data, &tags, &chrome).with_today(700_020);
        assert_eq!(renderer.day_range(), (700_000 - X_PAD_DAYS, 700_020 + X_PAD_DAYS));
    }

    #[test]
    fn test_day_range_empty_journal() {
        let (tags, chrome) = renderer_parts();
        let data = DotPlotData::default();

        let renderer = DotPlotRenderer::new(&data, &tags, &chrome).with_today(700_020);
        let (start, end) = renderer.day_range();
        assert_eq!(end, 700_020 + X_PAD_DAYS);
        assert_eq!(end - start, EMPTY_SPAN_DAYS);
    }

    #[test]
    fn test_day_range_future_entry_keeps_range_valid() {
        // An entry dated after "today" must not invert the axis
        let (tags, chrome) = renderer_parts();
        let data = DotPlotData {
            points: vec![],
            first_day: Some(700_100),
        };

        let renderer = DotPlotRenderer::new(&data, &tags, &chrome).with_today(700_000);
        let (start, end) = renderer.day_range();
        assert!(start < end);
    }
}
