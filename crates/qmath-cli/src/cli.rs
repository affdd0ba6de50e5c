// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use qmath_core::{parse_floats, CommandTokenizer, GameVariant, Vec3};

#[derive(Parser, Debug)]
#[command(name = "qmath", author, version, about, long_about = None)]
pub struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` wins
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding `qmath.json` (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Game variant for this run, overriding the config file
    #[arg(long, global = true, conflicts_with = "game_dir")]
    pub variant: Option<GameVariant>,

    /// Derive the game variant from a mod directory name (e.g. `rogue`)
    #[arg(long, global = true, value_name = "NAME")]
    pub game_dir: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a box against a plane: front (1), back (2) or both (3)
    Classify {
        /// Box minimum corner, "x y z"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        mins: Vec3,
        /// Box maximum corner, "x y z"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        maxs: Vec3,
        /// Plane normal, "x y z"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        normal: Vec3,
        /// Plane distance from the origin
        #[arg(long, allow_hyphen_values = true)]
        dist: f32,
        /// Use the axial shortcut when the plane allows it
        #[arg(long)]
        fast: bool,
    },
    /// Print the forward/right/up frame for "pitch yaw roll" angles
    Basis {
        /// Euler angles in degrees
        #[arg(allow_hyphen_values = true, value_parser = parse_vec3)]
        angles: Vec3,
    },
    /// Convert a direction into "pitch yaw roll" angles
    Angles {
        /// Direction vector
        #[arg(allow_hyphen_values = true, value_parser = parse_vec3)]
        dir: Vec3,
    },
    /// Rotate a point about an axis through the origin
    Rotate {
        /// Rotation axis (unit length)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        axis: Vec3,
        /// Point to rotate
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        point: Vec3,
        /// Angle in degrees, right-handed about the axis
        #[arg(long, allow_hyphen_values = true)]
        degrees: f32,
    },
    /// Print a unit vector perpendicular to the given one
    Perp {
        /// Source vector (unit length)
        #[arg(allow_hyphen_values = true, value_parser = parse_vec3)]
        vec: Vec3,
    },
    /// Project a world point to normalized screen coordinates
    Project {
        /// World-space point
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
        point: Vec3,
        /// Camera "pitch yaw roll"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3, default_value = "0 0 0")]
        angles: Vec3,
        /// Camera position
        #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3, default_value = "0 0 0")]
        origin: Vec3,
        /// Vertical field of view in degrees (config `fov_y` when absent)
        #[arg(long)]
        fov_y: Option<f32>,
        /// Width over height (config `aspect` when absent)
        #[arg(long)]
        aspect: Option<f32>,
    },
    /// Reduce an angle into [0, 360) on the 16-bit grid
    Anglemod {
        /// Angle in degrees
        #[arg(allow_hyphen_values = true)]
        degrees: f32,
    },
    /// Floored quotient and non-negative remainder
    Floordiv {
        /// Numerator
        #[arg(allow_hyphen_values = true)]
        numer: f64,
        /// Denominator, must be positive
        #[arg(allow_hyphen_values = true)]
        denom: f64,
    },
    /// Greatest common divisor
    Gcd {
        /// First operand
        a: i32,
        /// Second operand
        b: i32,
    },
    /// Floor of log2
    Log2 {
        /// Value
        val: i32,
    },
    /// Reciprocal of an 8.24 fixed-point value, as 16.16
    Invert {
        /// 8.24 fixed-point input
        #[arg(allow_hyphen_values = true)]
        val: i32,
    },
    /// Parse up to COUNT floats from a console-style string
    Parse {
        /// Input text, e.g. "1 2.5 \"3\""
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Number of output slots
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
    /// Show the active game variant
    Variant,
    /// Inspect or update the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Print the path of the config file
    Path,
    /// Update and persist fields of the stored configuration
    Set {
        /// Game variant to store
        #[arg(long = "game-variant")]
        game_variant: Option<GameVariant>,
        /// Vertical field of view in degrees
        #[arg(long)]
        fov_y: Option<f32>,
        /// Width over height
        #[arg(long)]
        aspect: Option<f32>,
    },
}

/// Parses `"x y z"` with the console tokenizer; missing components are zero.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let mut out = [0.0_f32; 3];
    parse_floats(&CommandTokenizer, s, &mut out).map_err(|e| e.to_string())?;
    Ok(Vec3::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn vectors_parse_with_zero_fill() {
        assert_eq!(parse_vec3("1 -2"), Ok(Vec3::new(1.0, -2.0, 0.0)));
        assert!(parse_vec3("\"1").is_err());
    }
}
