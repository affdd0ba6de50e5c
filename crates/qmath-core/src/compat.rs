// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Game-content variant ("mod") compatibility flag.
//!
//! Some mission packs and total conversions change engine behaviour. The
//! active variant is detected once at startup (by whoever inspects the game
//! directory or command line) and published here; every other subsystem
//! only reads it.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::MathError;

/// Content variants with engine-level differences.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum GameVariant {
    /// Base game.
    #[default]
    Quake = 0,
    /// Mission pack 1, Scourge of Armagon.
    Hipnotic = 1,
    /// Mission pack 2, Dissolution of Eternity.
    Rogue = 2,
    /// Kurok total conversion.
    Kurok = 3,
    /// SUPERHOT Quake.
    Superhot = 4,
}

impl GameVariant {
    /// Every variant, ordered by code.
    pub const ALL: [Self; 5] = [
        Self::Quake,
        Self::Hipnotic,
        Self::Rogue,
        Self::Kurok,
        Self::Superhot,
    ];

    /// Numeric code of the variant (0..=4).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a variant by numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Lower-case name used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quake => "quake",
            Self::Hipnotic => "hipnotic",
            Self::Rogue => "rogue",
            Self::Kurok => "kurok",
            Self::Superhot => "superhot",
        }
    }

    /// Maps a game directory name to a variant; unknown directories are the
    /// base game.
    pub fn from_game_dir(dir: &str) -> Self {
        match dir.to_ascii_lowercase().as_str() {
            "hipnotic" => Self::Hipnotic,
            "rogue" => Self::Rogue,
            "kurok" => Self::Kurok,
            "shq" | "superhot" => Self::Superhot,
            _ => Self::Quake,
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameVariant {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MathError::UnknownVariant(s.to_owned()))
    }
}

/// SUPERHOT temp-entity codes carried in `svc_temp_entity` messages.
pub mod superhot {
    /// Thrown weapon shattering.
    pub const TE_THROWN_WEAPON_BREAK: u8 = 40;
    /// Laser spike impact.
    pub const TE_LASERSPIKE: u8 = 41;
    /// Bullet trail, first style.
    pub const TE_TRAIL: u8 = 42;
    /// Bullet trail, second style.
    pub const TE_TRAIL2: u8 = 43;
    /// Bullet trail, third style.
    pub const TE_TRAIL3: u8 = 44;
    /// Alternate teleport splash.
    pub const TE_TELEPORT2: u8 = 45;
}

static ACTIVE_VARIANT: OnceCell<GameVariant> = OnceCell::new();

/// Publishes the process-wide game variant.
///
/// The first call wins. Setting the same variant again is accepted;
/// attempting to switch to a different one is rejected.
///
/// # Errors
/// Returns [`MathError::VariantAlreadySet`] if a different variant is
/// already active.
pub fn set_game_variant(variant: GameVariant) -> Result<(), MathError> {
    match ACTIVE_VARIANT.try_insert(variant) {
        Ok(_) => {
            debug!(%variant, "game variant set");
            Ok(())
        }
        Err((&current, _)) if current == variant => Ok(()),
        Err((&current, requested)) => {
            warn!(%current, %requested, "ignoring attempt to change game variant");
            Err(MathError::VariantAlreadySet { current, requested })
        }
    }
}

/// Active game variant; [`GameVariant::Quake`] until one is published.
pub fn game_variant() -> GameVariant {
    ACTIVE_VARIANT.get().copied().unwrap_or_default()
}

/// `true` when the base game is active.
pub fn is_quake() -> bool {
    game_variant() == GameVariant::Quake
}

/// `true` when Scourge of Armagon is active.
pub fn is_hipnotic() -> bool {
    game_variant() == GameVariant::Hipnotic
}

/// `true` when Dissolution of Eternity is active.
pub fn is_rogue() -> bool {
    game_variant() == GameVariant::Rogue
}

/// `true` when Kurok is active.
pub fn is_kurok() -> bool {
    game_variant() == GameVariant::Kurok
}

/// `true` when SUPERHOT Quake is active.
pub fn is_superhot() -> bool {
    game_variant() == GameVariant::Superhot
}
