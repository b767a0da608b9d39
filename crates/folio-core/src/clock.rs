use crate::constants::DEFAULT_TIME_ZONE;
use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Wall clock for a fixed IANA zone, rendered as 24-hour `HH:MM`.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    tz: Tz,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Asia::Kolkata,
        }
    }
}

impl Clock {
    pub fn for_zone(name: &str) -> Result<Self> {
        let tz = name
            .trim()
            .parse::<Tz>()
            .map_err(|_| FolioError::UnknownTimeZone(name.to_owned()))?;
        Ok(Self { tz })
    }

    /// Uses `name` when it is a known zone and the default zone otherwise.
    pub fn for_zone_or_default(name: Option<&str>) -> Self {
        match name {
            Some(n) => Self::for_zone(n).unwrap_or_else(|e| {
                log::warn!("[clock] {e}; using {DEFAULT_TIME_ZONE}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn zone_name(&self) -> &'static str {
        self.tz.name()
    }

    pub fn format_millis(&self, epoch_ms: f64) -> String {
        if !epoch_ms.is_finite() {
            return "--:--".to_owned();
        }
        match DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64) {
            Some(utc) => utc.with_timezone(&self.tz).format("%H:%M").to_string(),
            None => "--:--".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zone_is_kolkata() {
        assert_eq!(Clock::default().zone_name(), DEFAULT_TIME_ZONE);
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert_eq!(
            Clock::for_zone("Mars/Olympus").unwrap_err(),
            FolioError::UnknownTimeZone("Mars/Olympus".to_owned())
        );
    }
}
