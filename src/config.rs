use crate::demo::DEMO_SESSION_COUNT;
use chrono::Weekday;
use std::env;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub demo_session_count: usize,
    pub demo_autostart: bool,
    pub week_start: Weekday,
    pub stats_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            demo_session_count: DEMO_SESSION_COUNT,
            demo_autostart: true,
            week_start: Weekday::Sun,
            stats_top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads each setting through `lookup`, keeping the default for anything
    /// missing or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: setting(&lookup, "PORT", |raw| raw.parse().ok()).unwrap_or(defaults.port),
            demo_session_count: setting(&lookup, "DEMO_SESSION_COUNT", |raw| raw.parse().ok())
                .unwrap_or(defaults.demo_session_count),
            demo_autostart: setting(&lookup, "DEMO_AUTOSTART", parse_flag)
                .unwrap_or(defaults.demo_autostart),
            week_start: setting(&lookup, "CALENDAR_WEEK_START", parse_week_start)
                .unwrap_or(defaults.week_start),
            stats_top_n: setting(&lookup, "STATS_TOP_N", |raw| {
                raw.parse().ok().filter(|n: &usize| *n > 0)
            })
            .unwrap_or(defaults.stats_top_n),
        }
    }
}

fn setting<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("ignoring invalid {key}={raw:?}");
    }
    parsed
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_week_start(raw: &str) -> Option<Weekday> {
    match raw.to_ascii_lowercase().as_str() {
        "sun" | "sunday" => Some(Weekday::Sun),
        "mon" | "monday" => Some(Weekday::Mon),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.demo_session_count, 50);
        assert!(cfg.demo_autostart);
        assert_eq!(cfg.week_start, Weekday::Sun);
        assert_eq!(cfg.stats_top_n, 10);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("PORT", "9000"),
            ("DEMO_SESSION_COUNT", "12"),
            ("DEMO_AUTOSTART", "off"),
            ("CALENDAR_WEEK_START", "Monday"),
            ("STATS_TOP_N", "5"),
        ]);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.demo_session_count, 12);
        assert!(!cfg.demo_autostart);
        assert_eq!(cfg.week_start, Weekday::Mon);
        assert_eq!(cfg.stats_top_n, 5);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("PORT", "not-a-port"),
            ("DEMO_AUTOSTART", "maybe"),
            ("CALENDAR_WEEK_START", "wed"),
            ("STATS_TOP_N", "0"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert!(cfg.demo_autostart);
        assert_eq!(cfg.week_start, Weekday::Sun);
        assert_eq!(cfg.stats_top_n, 10);
    }
}
