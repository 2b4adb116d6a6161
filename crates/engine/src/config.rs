//! Session configuration from environment variables.
//!
//! - `CUBE_GRID_FRAME_MS`: scheduler cadence in milliseconds (default 16)
//! - `CUBE_GRID_MAX_FRAMES`: stop after this many frames (default: run until quit)
//! - `CUBE_GRID_FLIP_ROWS`: `1`/`true` to show the image top-down (default: mirrored)
//! - `CUBE_GRID_LOG_PATH`: append logs to this file instead of stderr
//!
//! Unparseable values fall back to the defaults.

use std::time::Duration;

use crate::core::types::DEFAULT_FRAME_MS;
use crate::sampler::RowOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub frame_interval: Duration,
    pub max_frames: Option<u64>,
    pub row_order: RowOrder,
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            max_frames: None,
            row_order: RowOrder::BottomUp,
            log_path: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `RUST_LOG` fallback: `info` when logging to a file, `warn` on stderr,
    /// where records would land on top of the alternate screen.
    pub fn default_log_filter(&self) -> &'static str {
        if self.log_path.is_some() {
            "info"
        } else {
            "warn"
        }
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frame_ms = lookup("CUBE_GRID_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        let max_frames = lookup("CUBE_GRID_MAX_FRAMES")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&n| n > 0);

        let flip = lookup("CUBE_GRID_FLIP_ROWS")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let log_path = lookup("CUBE_GRID_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            frame_interval: Duration::from_millis(frame_ms),
            max_frames,
            row_order: if flip {
                RowOrder::TopDown
            } else {
                RowOrder::BottomUp
            },
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> SessionConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SessionConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), SessionConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let c = config(&[
            ("CUBE_GRID_FRAME_MS", "33"),
            ("CUBE_GRID_MAX_FRAMES", "120"),
            ("CUBE_GRID_FLIP_ROWS", "TRUE"),
            ("CUBE_GRID_LOG_PATH", " /tmp/cube.log "),
        ]);
        assert_eq!(c.frame_interval, Duration::from_millis(33));
        assert_eq!(c.max_frames, Some(120));
        assert_eq!(c.row_order, RowOrder::TopDown);
        assert_eq!(c.log_path.as_deref(), Some("/tmp/cube.log"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[
            ("CUBE_GRID_FRAME_MS", "0"),
            ("CUBE_GRID_MAX_FRAMES", "soon"),
            ("CUBE_GRID_FLIP_ROWS", "nope"),
            ("CUBE_GRID_LOG_PATH", "   "),
        ]);
        assert_eq!(c, SessionConfig::default());
    }

    #[test]
    fn log_filter_depends_on_the_log_target() {
        assert_eq!(SessionConfig::default().default_log_filter(), "warn");
        let to_file = config(&[("CUBE_GRID_LOG_PATH", "/tmp/cube.log")]);
        assert_eq!(to_file.default_log_filter(), "info");
    }
}
