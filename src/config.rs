use crate::geometry::hex::{InvalidRadius, Layout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub fn path() -> PathBuf {
    dirs::config_dir()
        .expect("hexagons must be run by a user with a home directory")
        .join("hexagons")
        .join("config.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Circumradius of every cell in the grid.
    pub radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config { radius: 1.0 }
    }
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path())
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes())?;
        log::debug!("saved configuration to {}", path.display());
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = toml::from_str(&data)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The grid layout described by this configuration.
    pub fn layout(&self) -> Result<Layout, Error> {
        Layout::new(self.radius).map_err(|err| {
            log::warn!("rejecting configured layout: {}", err);
            err.into()
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("invalid layout")]
    InvalidLayout(#[from] InvalidRadius),
}
