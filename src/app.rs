use chrono::{DateTime, Local};
use iced::{Application, Command, Element, Theme};

use crate::config::Config;
use crate::query::{Horizon, Query, ThemeMode};
use crate::units::TemperatureUnit;
use crate::view;
use crate::view_model::ViewModel;
use crate::weather::{WeatherClient, WeatherError, WeatherSnapshot};

#[derive(Debug, Clone)]
pub enum Message {
    CityEdited(String),
    CitySubmitted,
    UnitPicked(TemperatureUnit),
    ThemeToggled(bool),
    HorizonChanged(u8),
    HorizonReleased,
    /// Carries the sequence number of the cycle that launched the fetch, so
    /// completions from superseded cycles can be told apart and dropped.
    Fetched(u64, Result<WeatherSnapshot, WeatherError>),
}

pub struct DashboardApp {
    pub client: WeatherClient,
    pub query: Query,
    /// Staged city text; it only reaches `query.city` when submitted.
    pub city_input: String,
    pub view_model: Option<ViewModel>,
    pub error: Option<WeatherError>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Local>>,
    pub fetch_seq: u64,
}

impl DashboardApp {
    /// Starts a fresh cycle: bump the sequence number and launch one fetch
    /// for the committed query. An older in-flight fetch is not cancelled,
    /// its completion just no longer matches.
    fn refresh(&mut self) -> Command<Message> {
        self.loading = true;
        self.error = None;
        self.fetch_seq += 1;

        let seq = self.fetch_seq;
        let client = self.client.clone();
        let city = self.query.city.clone();

        Command::perform(async move { client.fetch(&city).await }, move |result| {
            Message::Fetched(seq, result)
        })
    }
}

impl Application for DashboardApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Config;

    fn new(config: Config) -> (DashboardApp, Command<Message>) {
        let query = Query::default();
        let mut app = DashboardApp {
            client: WeatherClient::new(config),
            city_input: query.city.clone(),
            query,
            view_model: None,
            error: None,
            loading: false,
            last_updated: None,
            fetch_seq: 0,
        };

        let command = app.refresh();
        (app, command)
    }

    fn title(&self) -> String {
        String::from("Weather Dashboard")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CityEdited(value) => {
                self.city_input = value;
                Command::none()
            }
            Message::CitySubmitted => {
                // Passed through verbatim; the provider is the sole judge of
                // what makes a valid city query.
                self.query.city = self.city_input.clone();
                self.refresh()
            }
            Message::UnitPicked(unit) => {
                self.query.unit = unit;
                self.refresh()
            }
            Message::ThemeToggled(dark) => {
                self.query.theme = ThemeMode::from_toggle(dark);
                self.refresh()
            }
            Message::HorizonChanged(days) => {
                // Live while dragging, so the label tracks the thumb; the
                // fetch waits for the release.
                self.query.horizon = Horizon::clamped(days);
                Command::none()
            }
            Message::HorizonReleased => self.refresh(),
            Message::Fetched(seq, result) => {
                if seq != self.fetch_seq {
                    tracing::debug!(
                        "discarding stale fetch completion (cycle {seq}, current {})",
                        self.fetch_seq
                    );
                    return Command::none();
                }

                self.loading = false;
                match result {
                    Ok(snapshot) => {
                        let view_model = ViewModel::build(&self.query, &snapshot);
                        tracing::info!("forecast loaded for {}", view_model.location_name);
                        self.view_model = Some(view_model);
                        self.error = None;
                        self.last_updated = Some(Local::now());
                    }
                    Err(error) => {
                        tracing::warn!("fetch cycle {seq} failed: {error}");
                        self.error = Some(error);
                        self.view_model = None;
                        self.last_updated = None;
                    }
                }
                Command::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        match self.query.theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}
