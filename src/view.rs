use crate::app::{DashboardApp, Message};
use crate::chart::{PrecipChart, TrendChart};
use crate::components;
use crate::map::MapView;
use crate::view_model::ViewModel;
use iced::{
    theme,
    widget::{canvas::Canvas, column, container, row, scrollable, text, Space},
    Alignment, Color, Element, Length,
};

pub fn view(app: &DashboardApp) -> Element<Message> {
    let settings = components::settings_panel(&app.query, &app.city_input);

    // A failed cycle replaces the whole dashboard with the banner; the
    // settings column stays interactive either way.
    let content: Element<Message> = if let Some(error) = &app.error {
        components::error_banner(error)
    } else if let Some(view_model) = &app.view_model {
        dashboard(app, view_model)
    } else {
        components::loading_view()
    };

    let page = row![settings, content].spacing(12).height(Length::Fill);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
        .into()
}

fn dashboard<'a>(app: &'a DashboardApp, view_model: &'a ViewModel) -> Element<'a, Message> {
    let updated_stamp: Element<Message> = if let Some(updated) = &app.last_updated {
        text(format!("Updated: {}", updated.format("%I:%M:%S %p")))
            .size(12)
            .style(Color::from_rgb(0.5, 0.5, 0.5))
            .into()
    } else {
        text("").size(12).into()
    };

    let header = row![
        text(format!("Current Weather in {}", view_model.location_name)).size(26),
        Space::with_width(Length::Fill),
        updated_stamp,
    ]
    .align_items(Alignment::Center);

    let trend_canvas = Canvas::new(TrendChart::new(view_model.trend.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(240.0));

    let precip_canvas = Canvas::new(PrecipChart::new(view_model.precipitation.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(200.0));

    let map_canvas = Canvas::new(MapView::new(view_model.marker.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(260.0));

    let body = column![
        header,
        components::metric_tiles(&view_model.summary),
        chart_card("Temperature Trend", trend_canvas.into()),
        chart_card("Precipitation Forecast", precip_canvas.into()),
        chart_card("Weather Map", map_canvas.into()),
    ]
    .spacing(12);

    scrollable(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn chart_card<'a>(title: &str, chart: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title.to_string()).size(18), chart].spacing(8))
        .padding(16)
        .style(theme::Container::Box)
        .width(Length::Fill)
        .into()
}
