// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configuration for qmath tools.
//!
//! - [`ConfigStore`]: storage port for raw blobs keyed by logical name.
//! - [`ConfigService`]: JSON (de)serialization over any store.
//! - [`FsConfigStore`]: one `<key>.json` file per key under the platform
//!   config directory.
//! - [`ToolConfig`]: the settings the `qmath` CLI persists.
#![forbid(unsafe_code)]

pub mod config;
mod fs;
mod tool;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use fs::FsConfigStore;
pub use tool::{ToolConfig, TOOL_CONFIG_KEY};
