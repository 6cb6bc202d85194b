/// Temperature display preference. Snapshot data stays Celsius-native; this
/// enum decides what the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius-native reading into this display unit.
    pub fn convert(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => to_fahrenheit(celsius),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_values() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn formula_holds_across_range() {
        for i in -800..=800 {
            let celsius = f64::from(i) * 0.25;
            assert_eq!(to_fahrenheit(celsius), celsius * 9.0 / 5.0 + 32.0);
        }
    }

    #[test]
    fn celsius_passes_through_unchanged() {
        assert_eq!(TemperatureUnit::Celsius.convert(17.3), 17.3);
    }

    #[test]
    fn fahrenheit_converts_from_celsius() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert(10.0), 50.0);
    }

    #[test]
    fn suffix_matches_unit() {
        assert_eq!(TemperatureUnit::Celsius.suffix(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.suffix(), "°F");
    }
}
