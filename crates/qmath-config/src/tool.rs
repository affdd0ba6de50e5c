// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::config::{ConfigError, ConfigService, ConfigStore};
use qmath_core::GameVariant;
use serde::{Deserialize, Serialize};

/// Key under which [`ToolConfig`] is stored (`qmath.json` on disk).
pub const TOOL_CONFIG_KEY: &str = "qmath";

/// Persisted settings for the `qmath` CLI.
///
/// Missing fields take their defaults, so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Game flavour published at startup.
    pub game_variant: GameVariant,
    /// Vertical field of view for `project`, in degrees.
    pub fov_y: f32,
    /// Width over height for `project`.
    pub aspect: f32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            game_variant: GameVariant::Quake,
            fov_y: 90.0,
            aspect: 4.0 / 3.0,
        }
    }
}

impl ToolConfig {
    /// Checks ranges: `0 < fov_y < 180` and `aspect > 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(ConfigError::Invalid {
                field: "fov_y",
                reason: format!("{} is outside (0, 180)", self.fov_y),
            });
        }
        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "aspect",
                reason: format!("{} is not a positive ratio", self.aspect),
            });
        }
        Ok(())
    }

    /// Loads the stored config as written, falling back to defaults when
    /// absent. Ranges are not checked, so a bad file can still be inspected
    /// and repaired.
    pub fn load_stored<S: ConfigStore>(svc: &ConfigService<S>) -> Result<Self, ConfigError> {
        Ok(svc.load::<Self>(TOOL_CONFIG_KEY)?.unwrap_or_default())
    }

    /// [`Self::load_stored`] followed by [`Self::validate`].
    pub fn load_or_default<S: ConfigStore>(svc: &ConfigService<S>) -> Result<Self, ConfigError> {
        let cfg = Self::load_stored(svc)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates and persists this config.
    pub fn store<S: ConfigStore>(&self, svc: &ConfigService<S>) -> Result<(), ConfigError> {
        self.validate()?;
        svc.save(TOOL_CONFIG_KEY, self)
    }
}
