use iced::{
    widget::canvas::{self, Frame, Text},
    Point, Rectangle, Theme,
};

use crate::app::Message;
use crate::view_model::MapMarker;

/// Map plate: an equirectangular graticule centered on the marker, a pin at
/// the center, and the marker label plus formatted coordinates as
/// annotations. The zoom level fixes how many degrees the plate spans.
pub struct MapView {
    marker: MapMarker,
}

impl MapView {
    pub fn new(marker: MapMarker) -> Self {
        Self { marker }
    }
}

impl canvas::Program<Message> for MapView {
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

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette.background.weak.color);

        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Graticule lines sit on global multiples of the step, so panning to
        // a different city slides the grid under the pin instead of pinning
        // the grid to it.
        let lon_span = span_degrees(self.marker.zoom);
        let lat_span = lon_span * f64::from(bounds.height / bounds.width);
        let step = lon_span / 7.0;

        let lon_min = self.marker.longitude - lon_span / 2.0;
        let lat_min = self.marker.latitude - lat_span / 2.0;

        let grid = canvas::Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.strong.color);

        let mut lon = first_line(lon_min, step);
        while lon <= lon_min + lon_span {
            let x = (((lon - lon_min) / lon_span) as f32) * bounds.width;
            frame.stroke(
                &canvas::Path::line(Point::new(x, 0.0), Point::new(x, bounds.height)),
                grid.clone(),
            );
            lon += step;
        }

        let mut lat = first_line(lat_min, step);
        while lat <= lat_min + lat_span {
            // Latitude grows upward while pixel y grows downward.
            let y = bounds.height - (((lat - lat_min) / lat_span) as f32) * bounds.height;
            frame.stroke(
                &canvas::Path::line(Point::new(0.0, y), Point::new(bounds.width, y)),
                grid.clone(),
            );
            lat += step;
        }

        // The pin's tip marks the location; head and stem rise above it.
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let head = Point::new(center.x, center.y - 14.0);

        frame.stroke(
            &canvas::Path::line(center, head),
            canvas::Stroke::default()
                .with_width(2.0)
                .with_color(palette.danger.base.color),
        );
        frame.fill(&canvas::Path::circle(head, 6.0), palette.danger.base.color);
        frame.fill(
            &canvas::Path::circle(center, 2.0),
            palette.danger.base.color,
        );

        frame.fill_text(Text {
            content: self.marker.label.clone(),
            position: Point::new(center.x, center.y + 10.0),
            size: 14.0.into(),
            color: palette.background.base.text,
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Top,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });

        frame.fill_text(Text {
            content: format_coordinates(self.marker.latitude, self.marker.longitude),
            position: Point::new(bounds.width / 2.0, bounds.height - 6.0),
            size: 12.0.into(),
            color: palette.background.base.text,
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Bottom,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });

        vec![frame.into_geometry()]
    }
}

/// Degrees of longitude the plate spans at a zoom level, twice the width of
/// one slippy-map tile at that zoom.
fn span_degrees(zoom: u8) -> f64 {
    360.0 / f64::from(1u32 << zoom) * 2.0
}

fn first_line(min: f64, step: f64) -> f64 {
    (min / step).ceil() * step
}

fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude >= 0.0 { "N" } else { "S" };
    let ew = if longitude >= 0.0 { "E" } else { "W" };
    format!(
        "{:.2}°{}, {:.2}°{}",
        latitude.abs(),
        ns,
        longitude.abs(),
        ew
    )
}
