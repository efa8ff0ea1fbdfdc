use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::light::wave::{COMPARISON_AMPLITUDE, DEFAULT_SAMPLES};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Color selected when the explorer opens.
    pub default_band: String,
    /// Start with the logarithmic scale enabled.
    pub log_scale: bool,
    /// Nanometers moved per arrow key on the wavelength slider.
    pub slider_step: u32,
    /// Height in terminal rows for plot images.
    pub plot_height: u16,
    /// Points per wave trace.
    pub wave_samples: usize,
    /// Display amplitude of the light trace in the wave comparison.
    pub comparison_amplitude: f64,
    /// Use CODATA 2018 values for `h` and `c` instead of the rounded ones.
    pub codata_constants: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_band: "Azul".to_string(),
            log_scale: false,
            slider_step: 1,
            plot_height: 20,
            wave_samples: DEFAULT_SAMPLES,
            comparison_amplitude: COMPARISON_AMPLITUDE,
            codata_constants: false,
        }
    }
}

/// `~/.config/luz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("luz").join("config.toml"))
}

/// Parse a config file. Missing keys take their defaults.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
    if config.slider_step == 0 {
        return Err(Error::Config("slider_step must be at least 1".to_string()));
    }
    if config.wave_samples < 2 {
        return Err(Error::Config("wave_samples must be at least 2".to_string()));
    }
    Ok(config)
}

/// Load config from `path` (or the default location), returning defaults if
/// the file doesn't exist or is invalid.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => return Config::default(),
    };
    match read_config(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("default_band = \"Rojo\"\nlog_scale = true\n").unwrap();
        assert_eq!(config.default_band, "Rojo");
        assert!(config.log_scale);
        assert_eq!(config.slider_step, 1);
        assert_eq!(config.wave_samples, 500);
        assert_eq!(config.comparison_amplitude, 0.3);
        assert!(!config.codata_constants);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(parse_config("slider_step = 0"), Err(Error::Config(_))));
        assert!(matches!(parse_config("wave_samples = 1"), Err(Error::Config(_))));
        assert!(matches!(parse_config("plot_height = \"tall\""), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("nope.toml")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "slider_step = 5\nplot_height = 12\n").unwrap();
        let config = load_config(Some(&path));
        assert_eq!(config.slider_step, 5);
        assert_eq!(config.plot_height, 12);
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(load_config(Some(&path)), Config::default());
    }
}
