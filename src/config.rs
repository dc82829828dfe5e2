// Window manager configuration

use crate::errors::{Result, WmError};
use crate::state::focus::MAX_INITIAL_Z_INDEX;
use crate::state::window::{Position, Size, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "WEBOS_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WmConfig {
    /// Viewport assumed until the host reports the real one
    pub viewport: Viewport,
    pub taskbar_height: f64,
    /// Minimum size for windows that don't ask for their own
    pub min_size: Size,
    pub default_position: Position,
    pub default_size: Size,
    /// The first window gets `initial_z_index + 1`
    pub initial_z_index: u32,
    /// Re-fit maximized windows when the viewport changes
    pub refit_maximized_on_resize: bool,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280.0, 800.0),
            taskbar_height: 50.0,
            min_size: Size::new(300.0, 200.0),
            default_position: Position::new(50.0, 50.0),
            default_size: Size::new(600.0, 400.0),
            initial_z_index: 100,
            refit_maximized_on_resize: false,
        }
    }
}

impl WmConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the window manager can't run with
    pub fn validate(&self) -> Result<()> {
        if self.initial_z_index > MAX_INITIAL_Z_INDEX {
            return Err(WmError::InvalidConfig {
                field: "initialZIndex",
                reason: format!(
                    "{} leaves no room for new windows, the maximum is {}",
                    self.initial_z_index, MAX_INITIAL_Z_INDEX
                ),
            });
        }
        if self.taskbar_height < 0.0 {
            return Err(WmError::InvalidConfig {
                field: "taskbarHeight",
                reason: format!("{} is negative", self.taskbar_height),
            });
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WmError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `$WEBOS_CONFIG` when set, defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
