//! Deployment configuration for the domain layer.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{TeamdeskError, TeamdeskResult};
use crate::time;

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Configuration read from the server's `teamdesk.toml`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CoreConfig {
    /// Olson name of the timezone dates are displayed and bucketed in.
    /// Recurring-series anchors are always aligned to the fixed reference
    /// timezone regardless of this setting.
    #[serde(default = "default_timezone")]
    pub display_timezone: String,
}

impl Default for CoreConfig {
    fn default() -> CoreConfig {
        CoreConfig {
            display_timezone: default_timezone(),
        }
    }
}

impl CoreConfig {
    /// Load config from a toml file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> TeamdeskResult<CoreConfig> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: CoreConfig =
                toml::from_str(&content).map_err(|e| TeamdeskError::Config(e.to_string()))?;
            config.display_tz()?;
            Ok(config)
        } else {
            Ok(CoreConfig::default())
        }
    }

    pub fn save(&self, path: &Path) -> TeamdeskResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TeamdeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn display_tz(&self) -> TeamdeskResult<Tz> {
        Tz::from_str(&self.display_timezone)
            .map_err(|_| TeamdeskError::Timezone(self.display_timezone.clone()))
    }

    /// The calendar day an instant falls on in the display timezone. Used to
    /// derive exception dates from occurrence timestamps.
    pub fn day_of(&self, ts: DateTime<Utc>) -> TeamdeskResult<NaiveDate> {
        let tz = self.display_tz()?;
        Ok(time::day_start_in(ts, &tz).with_timezone(&tz).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_config_uses_utc() {
        let config = CoreConfig::default();
        assert_eq!(config.display_tz().unwrap(), Tz::UTC);
    }

    #[test]
    fn test_parse_overrides_timezone() {
        let config: CoreConfig =
            toml::from_str("display_timezone = \"Europe/Berlin\"").unwrap();
        assert_eq!(config.display_timezone, "Europe/Berlin");
        assert!(config.display_tz().is_ok());
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let config: CoreConfig = toml::from_str("display_timezone = \"Mars/Olympus\"").unwrap();
        assert!(matches!(
            config.display_tz(),
            Err(TeamdeskError::Timezone(_))
        ));
    }

    #[test]
    fn test_day_of_respects_display_timezone() {
        let config: CoreConfig =
            toml::from_str("display_timezone = \"America/New_York\"").unwrap();
        // 01:30 UTC is still the previous evening in New York
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 1, 30, 0).unwrap();
        assert_eq!(
            config.day_of(ts).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
        );
    }
}
