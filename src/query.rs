use crate::units::TemperatureUnit;

/// Number of leading forecast days to display. The provider is always asked
/// for five; the horizon only bounds how many the renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon(u8);

impl Horizon {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(days: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&days).then_some(Self(days))
    }

    /// Clamp arbitrary input into range. Used for slider values, which the
    /// widget already bounds but the type does not trust.
    pub fn clamped(days: u8) -> Self {
        Self(days.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn days(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_toggle(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Everything the user has asked for in one render cycle. Rebuilt from the
/// settings panel on each committed change; never persisted.
///
/// The city is free text and deliberately unvalidated here. The weather
/// client is the sole validation boundary, so an empty or nonsensical string
/// passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub city: String,
    pub unit: TemperatureUnit,
    pub horizon: Horizon,
    pub theme: ThemeMode,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            city: String::from("London"),
            unit: TemperatureUnit::Celsius,
            horizon: Horizon::default(),
            theme: ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_panel() {
        let query = Query::default();
        assert_eq!(query.city, "London");
        assert_eq!(query.unit, TemperatureUnit::Celsius);
        assert_eq!(query.horizon.get(), 3);
        assert_eq!(query.theme, ThemeMode::Light);
    }

    #[test]
    fn horizon_rejects_out_of_range() {
        assert!(Horizon::new(0).is_none());
        assert!(Horizon::new(6).is_none());
        assert_eq!(Horizon::new(1).map(Horizon::get), Some(1));
        assert_eq!(Horizon::new(5).map(Horizon::get), Some(5));
    }

    #[test]
    fn horizon_clamps_slider_input() {
        assert_eq!(Horizon::clamped(0).get(), 1);
        assert_eq!(Horizon::clamped(3).get(), 3);
        assert_eq!(Horizon::clamped(9).get(), 5);
    }

    #[test]
    fn theme_toggle_round_trip() {
        assert!(ThemeMode::from_toggle(true).is_dark());
        assert!(!ThemeMode::from_toggle(false).is_dark());
    }
}
