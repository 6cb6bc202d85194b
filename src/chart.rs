use chrono::{DateTime, Datelike, Local, Timelike};
use iced::{
    widget::canvas::{self, Frame, Text},
    Color, Point, Rectangle, Size, Theme,
};

use crate::app::Message;
use crate::view_model::{PrecipSeries, SamplePoint, TrendSeries};

const LEFT_MARGIN: f32 = 44.0;
const RIGHT_MARGIN: f32 = 12.0;
const TOP_MARGIN: f32 = 36.0;
const BOTTOM_MARGIN: f32 = 10.0;

/// Hourly temperature polyline with alternating day bands, day and hour
/// labels along the top, and a value scale on the left.
pub struct TrendChart {
    series: TrendSeries,
}

impl TrendChart {
    pub fn new(series: TrendSeries) -> Self {
        Self { series }
    }
}

impl canvas::Program<Message> for TrendChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette.background.base.color);

        let points = &self.series.points;
        let Some(area) = PlotArea::of(&bounds, points) else {
            return vec![frame.into_geometry()];
        };

        draw_day_bands(
            &mut frame,
            &area,
            points,
            &bounds,
            palette.background.base.color,
            palette.background.weak.color,
        );

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let Some((min_value, max_value)) = padded_range(&values) else {
            return vec![frame.into_geometry()];
        };

        draw_value_axis(
            &mut frame,
            &area,
            min_value,
            max_value,
            0,
            self.series.unit_suffix,
            palette.background.strong.color,
            palette.background.base.text,
        );

        for pair in points.windows(2) {
            frame.stroke(
                &canvas::Path::line(
                    Point::new(
                        area.x(pair[0].time_epoch),
                        area.y(pair[0].value, min_value, max_value),
                    ),
                    Point::new(
                        area.x(pair[1].time_epoch),
                        area.y(pair[1].value, min_value, max_value),
                    ),
                ),
                canvas::Stroke::default()
                    .with_width(2.0)
                    .with_color(palette.primary.strong.color),
            );
        }

        draw_day_labels(&mut frame, &area, points, palette.background.base.text);
        draw_hour_labels(&mut frame, &area, points, palette.background.base.text);

        vec![frame.into_geometry()]
    }
}

/// Hourly precipitation bars on a zero baseline, sharing the trend chart's
/// band and label treatment so the two stay visually aligned.
pub struct PrecipChart {
    series: PrecipSeries,
}

impl PrecipChart {
    pub fn new(series: PrecipSeries) -> Self {
        Self { series }
    }
}

impl canvas::Program<Message> for PrecipChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette.background.base.color);

        let points = &self.series.points;
        let Some(area) = PlotArea::of(&bounds, points) else {
            return vec![frame.into_geometry()];
        };

        draw_day_bands(
            &mut frame,
            &area,
            points,
            &bounds,
            palette.background.base.color,
            palette.background.weak.color,
        );

        // Bars always rise from zero; a dry forecast keeps a 1 mm scale so
        // the chart does not collapse.
        let max_precip = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let scale_max = if max_precip > 0.0 {
            max_precip * 1.1
        } else {
            1.0
        };

        draw_value_axis(
            &mut frame,
            &area,
            0.0,
            scale_max,
            1,
            " mm",
            palette.background.strong.color,
            palette.background.base.text,
        );

        let bar_width = (area.width / points.len() as f32 * 0.7).max(1.0);
        let baseline = area.top + area.height;
        for point in points {
            let top = area.y(point.value, 0.0, scale_max);
            frame.fill_rectangle(
                Point::new(area.x(point.time_epoch) - bar_width / 2.0, top),
                Size::new(bar_width, baseline - top),
                palette.primary.base.color,
            );
        }

        draw_day_labels(&mut frame, &area, points, palette.background.base.text);
        draw_hour_labels(&mut frame, &area, points, palette.background.base.text);

        vec![frame.into_geometry()]
    }
}

/// Plot geometry shared by both charts: the inner rectangle left after the
/// margins, plus the time span mapped onto it.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    start_time: i64,
    time_range: i64,
}

impl PlotArea {
    fn of(bounds: &Rectangle, points: &[SamplePoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;
        let width = bounds.width - LEFT_MARGIN - RIGHT_MARGIN;
        let height = bounds.height - TOP_MARGIN - BOTTOM_MARGIN;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            left: LEFT_MARGIN,
            top: TOP_MARGIN,
            width,
            height,
            start_time: first.time_epoch,
            time_range: last.time_epoch - first.time_epoch,
        })
    }

    fn x(&self, epoch: i64) -> f32 {
        self.left + position_ratio(epoch, self.start_time, self.time_range) * self.width
    }

    fn y(&self, value: f64, min: f64, max: f64) -> f32 {
        self.top + (1.0 - ((value - min) / (max - min)) as f32) * self.height
    }
}

fn position_ratio(epoch: i64, start: i64, range: i64) -> f32 {
    if range <= 0 {
        0.0
    } else {
        (epoch - start) as f32 / range as f32
    }
}

/// Value range padded by a tenth on each side, widened by one unit when the
/// series is flat so the scale never degenerates.
fn padded_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if min == f64::MAX {
        return None;
    }
    let span = max - min;
    if span > 0.0 {
        Some((min - span * 0.1, max + span * 0.1))
    } else {
        Some((min - 1.0, max + 1.0))
    }
}

fn local_time(epoch: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(epoch, 0).map(|utc| utc.with_timezone(&Local))
}

fn hour_label(hour: u32) -> String {
    if hour == 0 {
        "12A".to_string()
    } else if hour == 12 {
        "12P".to_string()
    } else if hour < 12 {
        format!("{}A", hour)
    } else {
        format!("{}P", hour - 12)
    }
}

fn draw_day_bands(
    frame: &mut Frame,
    area: &PlotArea,
    points: &[SamplePoint],
    bounds: &Rectangle,
    base: Color,
    band: Color,
) {
    let mut current_day: Option<u32> = None;
    for point in points {
        let Some(local) = local_time(point.time_epoch) else {
            continue;
        };
        let day = local.ordinal();
        if let Some(previous) = current_day {
            if day != previous {
                frame.fill_rectangle(
                    Point::new(area.x(point.time_epoch), 0.0),
                    Size::new(bounds.width, bounds.height),
                    if day % 2 == 0 { band } else { base },
                );
            }
        }
        current_day = Some(day);
    }
}

fn draw_value_axis(
    frame: &mut Frame,
    area: &PlotArea,
    min: f64,
    max: f64,
    decimals: usize,
    suffix: &str,
    grid: Color,
    text: Color,
) {
    const TICKS: usize = 4;
    for step in 0..=TICKS {
        let value = min + (max - min) * step as f64 / TICKS as f64;
        let y = area.top + (1.0 - step as f32 / TICKS as f32) * area.height;

        frame.stroke(
            &canvas::Path::line(
                Point::new(area.left, y),
                Point::new(area.left + area.width, y),
            ),
            canvas::Stroke::default().with_width(1.0).with_color(grid),
        );

        frame.fill_text(Text {
            content: format!("{value:.decimals$}{suffix}"),
            position: Point::new(area.left - 6.0, y),
            size: 12.0.into(),
            color: text,
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Right,
            vertical_alignment: iced::alignment::Vertical::Center,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });
    }
}

fn draw_day_labels(frame: &mut Frame, area: &PlotArea, points: &[SamplePoint], color: Color) {
    // Group consecutive samples by local date; label each run at its center
    // so partial first and last days still get a readable label.
    let mut runs: Vec<(DateTime<Local>, i64, i64)> = Vec::new();
    for point in points {
        let Some(local) = local_time(point.time_epoch) else {
            continue;
        };
        match runs.last_mut() {
            Some((date, _, last_epoch)) if date.ordinal() == local.ordinal() => {
                *last_epoch = point.time_epoch;
            }
            _ => runs.push((local, point.time_epoch, point.time_epoch)),
        }
    }

    for (date, first_epoch, last_epoch) in runs {
        let weekday = match date.weekday() {
            chrono::Weekday::Mon => "Mon",
            chrono::Weekday::Tue => "Tue",
            chrono::Weekday::Wed => "Wed",
            chrono::Weekday::Thu => "Thu",
            chrono::Weekday::Fri => "Fri",
            chrono::Weekday::Sat => "Sat",
            chrono::Weekday::Sun => "Sun",
        };

        frame.fill_text(Text {
            content: format!("{} {}/{}", weekday, date.month(), date.day()),
            position: Point::new(area.x((first_epoch + last_epoch) / 2), 2.0),
            size: 14.0.into(),
            color,
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Top,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });
    }
}

fn draw_hour_labels(frame: &mut Frame, area: &PlotArea, points: &[SamplePoint], color: Color) {
    let mut last_labeled: Option<u32> = None;

    for point in points {
        let Some(local) = local_time(point.time_epoch) else {
            continue;
        };
        let hour = local.hour();

        let due = match last_labeled {
            None => true,
            Some(last) => {
                let diff = if hour >= last {
                    hour - last
                } else {
                    (24 - last) + hour
                };
                diff >= 4
            }
        };

        if due {
            frame.fill_text(Text {
                content: hour_label(hour),
                position: Point::new(area.x(point.time_epoch), 18.0),
                size: 12.0.into(),
                color,
                font: iced::Font::default(),
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Top,
                line_height: iced::widget::text::LineHeight::default(),
                shaping: iced::widget::text::Shaping::default(),
            });
            last_labeled = Some(hour);
        }
    }
}
