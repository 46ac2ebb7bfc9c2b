use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

pub const DEFAULT_DEPTH: u32 = 2;
/// Own placed-chip count from which `choose_move` first probes for a quick win.
pub const DEFAULT_WIN_PROBE_MIN_STEPS: u32 = 5;

/// Engine configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest ply index searched before the heuristic takes over.
    pub depth: u32,
    pub win_probe_min_steps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, win_probe_min_steps: DEFAULT_WIN_PROBE_MIN_STEPS }
    }
}

impl EngineConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self { depth, ..Self::default() }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| NetError::FileRead { path: path.to_path_buf(), source: e })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(NetError::Config("depth must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"depth": 3}"#).unwrap();
        assert_eq!(cfg.depth, 3);
        assert_eq!(cfg.win_probe_min_steps, DEFAULT_WIN_PROBE_MIN_STEPS);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{"depth": 0}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: depth must be >= 1");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(EngineConfig::from_json_str("{depth"), Err(NetError::Json(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::load(Path::new("/nonexistent/netbot.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/netbot.json"));
    }
}
