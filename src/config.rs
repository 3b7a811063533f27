//! Timeline mount configuration.
//!
//! The host supplies the visible day window and vertical scale when the
//! timeline surface mounts. Two construction paths: [`TimelineConfig::new`]
//! validates and is what a Rust host should use; [`TimelineConfig::from_attrs`]
//! is the lenient dataset-attribute path where missing or unparsable
//! numerics default to 0 rather than failing the mount.

use crate::constants::GRID_MINUTES;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from validated config construction.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("empty day window: day_start {day_start} >= day_end {day_end}")]
    EmptyDayWindow { day_start: i32, day_end: i32 },

    #[error("pixels_per_minute must be positive, got {0}")]
    NonPositiveScale(f64),
}

/// Per-mount timeline configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    /// Start of the visible day window, minutes from midnight.
    pub day_start: i32,
    /// End of the visible day window, minutes from midnight.
    pub day_end: i32,
    /// Vertical scale: screen pixels per minute.
    pub pixels_per_minute: f64,
}

impl TimelineConfig {
    pub fn new(day_start: i32, day_end: i32, pixels_per_minute: f64) -> Result<Self, ConfigError> {
        if day_start >= day_end {
            return Err(ConfigError::EmptyDayWindow { day_start, day_end });
        }
        if pixels_per_minute <= 0.0 {
            return Err(ConfigError::NonPositiveScale(pixels_per_minute));
        }
        Ok(Self { day_start, day_end, pixels_per_minute })
    }

    /// Lenient construction from host dataset attributes
    /// (`day-start`, `day-end`, `ppm`). Unparsable values become 0.
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        fn int(attrs: &HashMap<String, String>, key: &str) -> i32 {
            attrs.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(0)
        }
        fn float(attrs: &HashMap<String, String>, key: &str) -> f64 {
            attrs.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(0.0)
        }
        Self {
            day_start: int(attrs, "day-start"),
            day_end: int(attrs, "day-end"),
            pixels_per_minute: float(attrs, "ppm"),
        }
    }

    /// Latest start minute a block may commit to: one grid step before the
    /// end of the day window.
    pub fn last_start_minute(&self) -> i32 {
        self.day_end - GRID_MINUTES
    }
}
