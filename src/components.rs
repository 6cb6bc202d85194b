use iced::{
    theme,
    widget::{column, container, radio, row, slider, text, text_input, toggler, Space},
    Color, Element, Length,
};

use crate::app::Message;
use crate::query::{Horizon, Query};
use crate::units::TemperatureUnit;
use crate::view_model::{banner_message, Summary};
use crate::weather::WeatherError;

/// Left-hand settings column. Edits to the city field are staged locally;
/// the radios, toggler, and slider release commit immediately.
pub fn settings_panel<'a>(query: &Query, city_input: &'a str) -> Element<'a, Message> {
    let panel = column![
        text("Settings").size(22),
        Space::with_height(Length::Fixed(8.0)),
        text("City").size(14),
        text_input("Enter city name", city_input)
            .on_input(Message::CityEdited)
            .on_submit(Message::CitySubmitted)
            .padding(8),
        Space::with_height(Length::Fixed(12.0)),
        text("Temperature unit").size(14),
        radio(
            "Celsius",
            TemperatureUnit::Celsius,
            Some(query.unit),
            Message::UnitPicked
        ),
        radio(
            "Fahrenheit",
            TemperatureUnit::Fahrenheit,
            Some(query.unit),
            Message::UnitPicked
        ),
        Space::with_height(Length::Fixed(12.0)),
        toggler(
            String::from("Dark mode"),
            query.theme.is_dark(),
            Message::ThemeToggled
        ),
        Space::with_height(Length::Fixed(12.0)),
        text(format!("Forecast days: {}", query.horizon.get())).size(14),
        slider(
            Horizon::MIN..=Horizon::MAX,
            query.horizon.get(),
            Message::HorizonChanged
        )
        .on_release(Message::HorizonReleased),
    ]
    .spacing(6);

    container(panel)
        .padding(16)
        .style(theme::Container::Box)
        .width(Length::Fixed(250.0))
        .height(Length::Fill)
        .into()
}

/// The three current-conditions tiles across the top of the dashboard.
pub fn metric_tiles(summary: &Summary) -> Element<'static, Message> {
    row![
        metric_tile(
            "Temperature",
            format!("{:.1}{}", summary.temperature, summary.unit_suffix),
            format!("Feels like {:.1}{}", summary.feels_like, summary.unit_suffix),
        ),
        metric_tile("Humidity", format!("{}%", summary.humidity_percent), String::new()),
        metric_tile(
            "Wind Speed",
            format!("{:.1} km/h", summary.wind_speed_kph),
            String::new(),
        ),
    ]
    .spacing(12)
    .into()
}

fn metric_tile(label: &str, value: String, detail: String) -> Element<'static, Message> {
    container(
        column![
            text(label.to_string()).size(14),
            text(value).size(24),
            text(detail).size(12),
        ]
        .spacing(4),
    )
    .padding(12)
    .style(theme::Container::Box)
    .width(Length::Fill)
    .height(Length::Fixed(100.0))
    .into()
}

/// One banner per failed cycle; the settings panel stays interactive so the
/// user can correct the query.
pub fn error_banner(error: &WeatherError) -> Element<'static, Message> {
    container(
        text(banner_message(error))
            .size(16)
            .style(Color::from_rgb(0.8, 0.2, 0.2)),
    )
    .padding(16)
    .style(theme::Container::Box)
    .width(Length::Fill)
    .into()
}

pub fn loading_view() -> Element<'static, Message> {
    container(text("Loading weather data...").size(18))
        .padding(20)
        .center_x()
        .center_y()
        .width(Length::Fill)
        .height(Length::Fixed(150.0))
        .into()
}
