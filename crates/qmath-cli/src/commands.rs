// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand execution. Each command renders its result as text.

use anyhow::{Context, Result};
use qmath_config::{ConfigService, FsConfigStore, ToolConfig, TOOL_CONFIG_KEY};
use qmath_core::{
    angle_mod, angle_vectors, floor_div_mod, game_variant, greatest_common_divisor,
    invert_24_to_16, parse_floats, perpendicular_vector, project, q_log2,
    rotate_point_around_vector, vector_to_angles, CommandTokenizer, Vec3,
};
use qmath_geom::{box_on_plane_side, box_on_plane_side_fast, Aabb, Plane, Sides};
use tracing::{debug, info};

use crate::cli::{Command, ConfigAction};

/// Formats a vector as `x y z`, the same shape the parsers accept.
pub fn fmt_vec(v: &Vec3) -> String {
    // Adding zero folds -0 into 0.
    format!("{} {} {}", v.x() + 0.0, v.y() + 0.0, v.z() + 0.0)
}

fn sides_name(sides: Sides) -> &'static str {
    if sides == Sides::BOTH {
        "both"
    } else if sides == Sides::BACK {
        "back"
    } else {
        "front"
    }
}

/// Runs `cmd` and returns the text to print.
pub fn run(cmd: &Command, cfg: &ToolConfig, svc: &ConfigService<FsConfigStore>) -> Result<String> {
    let out = match cmd {
        Command::Classify {
            mins,
            maxs,
            normal,
            dist,
            fast,
        } => {
            let bbox = box_from_corners(*mins, *maxs)?;
            let plane = finite_plane(*normal, *dist)?;
            debug!(signbits = plane.signbits(), kind = ?plane.kind(), "classifying box");
            let sides = if *fast {
                box_on_plane_side_fast(&bbox, &plane)
            } else {
                box_on_plane_side(&bbox, &plane)
            };
            format!("{} ({})", sides_name(sides), sides.bits())
        }
        Command::Basis { angles } => {
            let b = angle_vectors(angles);
            format!(
                "forward {}\nright {}\nup {}",
                fmt_vec(&b.forward),
                fmt_vec(&b.right),
                fmt_vec(&b.up)
            )
        }
        Command::Angles { dir } => fmt_vec(&vector_to_angles(dir)),
        Command::Rotate {
            axis,
            point,
            degrees,
        } => fmt_vec(&rotate_point_around_vector(axis, point, *degrees)),
        Command::Perp { vec } => fmt_vec(&perpendicular_vector(vec)),
        Command::Project {
            point,
            angles,
            origin,
            fov_y,
            aspect,
        } => {
            let fov_y = fov_y.unwrap_or(cfg.fov_y);
            let aspect = aspect.unwrap_or(cfg.aspect);
            fmt_vec(&project(point, angles, origin, aspect, fov_y))
        }
        Command::Anglemod { degrees } => angle_mod(*degrees).to_string(),
        Command::Floordiv { numer, denom } => {
            let (q, r) = floor_div_mod(*numer, *denom)?;
            format!("{q} {r}")
        }
        Command::Gcd { a, b } => greatest_common_divisor(*a, *b).to_string(),
        Command::Log2 { val } => q_log2(*val).to_string(),
        Command::Invert { val } => invert_24_to_16(*val).to_string(),
        Command::Parse { text, count } => {
            let mut slots = vec![0.0_f32; *count];
            let n = parse_floats(&CommandTokenizer, text, &mut slots)?;
            debug!(parsed = n, slots = count, "parsed float list");
            slots
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }
        Command::Variant => game_variant().to_string(),
        Command::Config { action } => run_config(action, cfg, svc)?,
    };
    Ok(out)
}

fn is_finite(v: &Vec3) -> bool {
    v.to_array().iter().all(|c| c.is_finite())
}

fn box_from_corners(mins: Vec3, maxs: Vec3) -> Result<Aabb> {
    if !is_finite(&mins) || !is_finite(&maxs) {
        anyhow::bail!("box corners must be finite: mins ({}), maxs ({})", fmt_vec(&mins), fmt_vec(&maxs))
    }
    if (0..3).all(|i| mins[i] <= maxs[i]) {
        Ok(Aabb::new(mins, maxs))
    } else {
        anyhow::bail!("box mins ({}) exceed maxs ({})", fmt_vec(&mins), fmt_vec(&maxs))
    }
}

fn finite_plane(normal: Vec3, dist: f32) -> Result<Plane> {
    if !is_finite(&normal) || !dist.is_finite() {
        anyhow::bail!("plane must be finite: normal ({}), dist {dist}", fmt_vec(&normal))
    }
    if normal.is_zero() {
        anyhow::bail!("plane normal must not be zero")
    }
    Ok(Plane::new(normal, dist))
}

fn run_config(
    action: &ConfigAction,
    cfg: &ToolConfig,
    svc: &ConfigService<FsConfigStore>,
) -> Result<String> {
    let path = svc.store().path_for(TOOL_CONFIG_KEY);
    match action {
        ConfigAction::Show => Ok(serde_json::to_string_pretty(cfg)?),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Set {
            game_variant,
            fov_y,
            aspect,
        } => {
            let mut stored = ToolConfig::load_stored(svc).context("loading stored config")?;
            if let Some(v) = game_variant {
                stored.game_variant = *v;
            }
            if let Some(f) = fov_y {
                stored.fov_y = *f;
            }
            if let Some(a) = aspect {
                stored.aspect = *a;
            }
            stored.store(svc).context("saving config")?;
            info!(path = %path.display(), "config saved");
            Ok(serde_json::to_string_pretty(&stored)?)
        }
    }
}
