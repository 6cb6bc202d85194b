use crate::query::Query;
use crate::weather::{WeatherError, WeatherSnapshot};

/// Fixed zoom level for the map plate.
pub const MAP_ZOOM: u8 = 10;

/// One chart sample: an hourly timestamp and the value plotted at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub time_epoch: i64,
    pub value: f64,
}

/// Current-conditions figures for the metric tiles, already in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub temperature: f64,
    pub feels_like: f64,
    pub unit_suffix: &'static str,
    pub humidity_percent: u8,
    pub wind_speed_kph: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<SamplePoint>,
    pub unit_suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecipSeries {
    pub points: Vec<SamplePoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub label: String,
}

/// Everything the dashboard widgets draw, derived from one snapshot. The
/// widget layer never reaches back into the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub location_name: String,
    pub summary: Summary,
    pub trend: TrendSeries,
    pub precipitation: PrecipSeries,
    pub marker: MapMarker,
}

impl ViewModel {
    /// Pure transformation from a snapshot plus the active preferences. Unit
    /// conversion happens here, exactly once, always from the Celsius fields.
    /// The horizon truncates leading days; a payload shorter than the horizon
    /// simply yields fewer points.
    pub fn build(query: &Query, snapshot: &WeatherSnapshot) -> Self {
        let unit = query.unit;
        let suffix = unit.suffix();

        let summary = Summary {
            temperature: unit.convert(snapshot.current.temperature_c),
            feels_like: unit.convert(snapshot.current.feels_like_c),
            unit_suffix: suffix,
            humidity_percent: snapshot.current.humidity_percent,
            wind_speed_kph: snapshot.current.wind_speed_kph,
        };

        let visible_hours = || {
            snapshot
                .forecast_days
                .iter()
                .take(query.horizon.days())
                .flat_map(|day| day.hours.iter())
        };

        let trend = TrendSeries {
            points: visible_hours()
                .map(|hour| SamplePoint {
                    time_epoch: hour.time_epoch,
                    value: unit.convert(hour.temperature_c),
                })
                .collect(),
            unit_suffix: suffix,
        };

        let precipitation = PrecipSeries {
            points: visible_hours()
                .map(|hour| SamplePoint {
                    time_epoch: hour.time_epoch,
                    value: hour.precipitation_mm,
                })
                .collect(),
        };

        let marker = MapMarker {
            latitude: snapshot.location.latitude,
            longitude: snapshot.location.longitude,
            zoom: MAP_ZOOM,
            label: format!(
                "{:.1}{}, {}",
                summary.temperature, suffix, snapshot.current.condition_text
            ),
        };

        Self {
            location_name: snapshot.location.name.clone(),
            summary,
            trend,
            precipitation,
            marker,
        }
    }
}

/// Banner wording per error kind. The texts are part of the page's surface
/// and are asserted in tests; change with care.
pub fn banner_message(error: &WeatherError) -> String {
    match error {
        WeatherError::RequestFailed(detail) => {
            format!("Error fetching weather data: {detail}")
        }
        WeatherError::InvalidResponse(_) => "Invalid response from weather API".to_string(),
        WeatherError::ParseFailed(detail) => {
            format!("Error parsing API response: {detail}")
        }
        WeatherError::Unexpected(detail) => format!("Unexpected error: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Horizon;
    use crate::units::TemperatureUnit;
    use crate::weather::fixtures;

    fn query_with(unit: TemperatureUnit, horizon: u8) -> Query {
        Query {
            unit,
            horizon: Horizon::new(horizon).unwrap(),
            ..Query::default()
        }
    }

    #[test]
    fn horizon_truncates_flattened_series() {
        let snapshot = fixtures::snapshot(5, 24);

        for (horizon, expected) in [(1, 24), (3, 72), (5, 120)] {
            let vm = ViewModel::build(&query_with(TemperatureUnit::Celsius, horizon), &snapshot);
            assert_eq!(vm.trend.points.len(), expected);
            assert_eq!(vm.precipitation.points.len(), expected);
        }
    }

    #[test]
    fn trend_and_precipitation_share_timestamps() {
        let snapshot = fixtures::snapshot(5, 24);
        let vm = ViewModel::build(&query_with(TemperatureUnit::Celsius, 3), &snapshot);

        assert_eq!(vm.trend.points[0].time_epoch, fixtures::DAY_ZERO_EPOCH);
        for (t, p) in vm.trend.points.iter().zip(&vm.precipitation.points) {
            assert_eq!(t.time_epoch, p.time_epoch);
        }
    }

    #[test]
    fn celsius_passes_values_through_unchanged() {
        let snapshot = fixtures::snapshot(5, 24);
        let vm = ViewModel::build(&query_with(TemperatureUnit::Celsius, 5), &snapshot);

        assert_eq!(vm.summary.temperature, 11.0);
        assert_eq!(vm.summary.feels_like, 9.5);
        assert_eq!(vm.summary.unit_suffix, "°C");

        let raw: Vec<f64> = snapshot
            .forecast_days
            .iter()
            .flat_map(|day| day.hours.iter().map(|h| h.temperature_c))
            .collect();
        for (point, expected) in vm.trend.points.iter().zip(raw) {
            assert_eq!(point.value, expected);
        }
    }

    #[test]
    fn fahrenheit_derives_from_celsius_exactly() {
        let snapshot = fixtures::snapshot(5, 24);
        let vm = ViewModel::build(&query_with(TemperatureUnit::Fahrenheit, 5), &snapshot);

        assert_eq!(vm.summary.temperature, 11.0 * 9.0 / 5.0 + 32.0);
        assert_eq!(vm.summary.unit_suffix, "°F");

        let raw: Vec<f64> = snapshot
            .forecast_days
            .iter()
            .flat_map(|day| day.hours.iter().map(|h| h.temperature_c))
            .collect();
        for (point, celsius) in vm.trend.points.iter().zip(raw) {
            assert_eq!(point.value, celsius * 9.0 / 5.0 + 32.0);
        }
    }

    #[test]
    fn building_twice_yields_identical_output() {
        let snapshot = fixtures::snapshot(5, 24);
        let query = query_with(TemperatureUnit::Fahrenheit, 4);

        let first = ViewModel::build(&query, &snapshot);
        let second = ViewModel::build(&query, &snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn only_temperatures_change_with_the_unit() {
        let snapshot = fixtures::snapshot(5, 24);
        let celsius = ViewModel::build(&query_with(TemperatureUnit::Celsius, 5), &snapshot);
        let fahrenheit = ViewModel::build(&query_with(TemperatureUnit::Fahrenheit, 5), &snapshot);

        assert_eq!(celsius.precipitation, fahrenheit.precipitation);
        assert_eq!(
            celsius.summary.humidity_percent,
            fahrenheit.summary.humidity_percent
        );
        assert_eq!(
            celsius.summary.wind_speed_kph,
            fahrenheit.summary.wind_speed_kph
        );
    }

    #[test]
    fn marker_carries_location_zoom_and_label() {
        let snapshot = fixtures::snapshot(5, 24);
        let vm = ViewModel::build(&query_with(TemperatureUnit::Celsius, 3), &snapshot);

        assert_eq!(vm.marker.latitude, 51.52);
        assert_eq!(vm.marker.longitude, -0.11);
        assert_eq!(vm.marker.zoom, MAP_ZOOM);
        assert_eq!(vm.marker.label, "11.0°C, Partly cloudy");
        assert_eq!(vm.location_name, "London");
    }

    #[test]
    fn short_payload_yields_fewer_points_without_padding() {
        let snapshot = fixtures::snapshot(2, 24);
        let vm = ViewModel::build(&query_with(TemperatureUnit::Celsius, 5), &snapshot);

        assert_eq!(vm.trend.points.len(), 48);
        assert_eq!(vm.precipitation.points.len(), 48);
    }

    #[test]
    fn banner_text_varies_by_error_kind() {
        assert_eq!(
            banner_message(&WeatherError::RequestFailed("connect refused".into())),
            "Error fetching weather data: connect refused"
        );
        assert_eq!(
            banner_message(&WeatherError::InvalidResponse("missing `current` object".into())),
            "Invalid response from weather API"
        );
        assert_eq!(
            banner_message(&WeatherError::ParseFailed("expected value".into())),
            "Error parsing API response: expected value"
        );
        assert_eq!(
            banner_message(&WeatherError::Unexpected("boom".into())),
            "Unexpected error: boom"
        );
    }
}
