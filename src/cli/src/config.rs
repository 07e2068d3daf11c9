use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use twisty_core::{Edge, EdgeGeometry};

use crate::display::DisplayMode;

const STATE_FILE_NAME: &str = "rubix.rbx";

/// User configuration, read from `config.toml`. Every field is optional in
/// the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cube_size: usize,
    pub display_mode: DisplayMode,
    /// Where the interactive session keeps its cube between runs. Defaults
    /// to `~/rubix.rbx`.
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cube_size: Edge::default().edge_length(),
            display_mode: DisplayMode::default(),
            state_file: None,
        }
    }
}

impl Config {
    /// `<config dir>/twisty/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("twisty");
        path.push("config.toml");
        Some(path)
    }

    /// Load the configuration at `path`, or at [`Config::default_path`] when
    /// no path is given. A missing default file yields the defaults; an
    /// explicitly requested file must exist.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or names an unsupported
    /// cube size.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_owned(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => {
                    debug!("No configuration directory, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!("No configuration at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("Failed to read configuration file {}", path.display())
                });
            }
        };

        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Invalid configuration file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys or an unsupported cube size.
    pub fn parse(text: &str) -> color_eyre::Result<Self> {
        let config = toml::from_str::<Config>(text)?;
        config.edge()?;
        Ok(config)
    }

    /// The configured cube size.
    ///
    /// # Errors
    ///
    /// Fails unless `cube_size` is 2 or 3.
    pub fn edge(&self) -> color_eyre::Result<Edge> {
        Ok(Edge::try_from(self.cube_size)?)
    }

    /// The state file path, falling back to `rubix.rbx` in the home
    /// directory, or in the working directory if there is no home.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        match &self.state_file {
            Some(path) => path.clone(),
            None => dirs::home_dir()
                .map(|home| home.join(STATE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(STATE_FILE_NAME)),
        }
    }
}
