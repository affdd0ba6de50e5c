// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]
use std::cell::RefCell;
use std::collections::HashMap;

use qmath_config::{
    ConfigError, ConfigService, ConfigStore, FsConfigStore, ToolConfig, TOOL_CONFIG_KEY,
};
use qmath_core::GameVariant;

#[derive(Default)]
struct MemoryStore {
    blobs: RefCell<HashMap<String, Vec<u8>>>,
}

impl ConfigStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs.borrow().get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[test]
fn missing_config_yields_defaults() {
    let svc = ConfigService::new(MemoryStore::default());
    let cfg = ToolConfig::load_or_default(&svc).unwrap();
    assert_eq!(cfg, ToolConfig::default());
    assert_eq!(cfg.game_variant, GameVariant::Quake);
}

#[test]
fn empty_blob_counts_as_missing() {
    let store = MemoryStore::default();
    store.save_raw(TOOL_CONFIG_KEY, b"").unwrap();
    let svc = ConfigService::new(store);
    assert!(svc.load::<ToolConfig>(TOOL_CONFIG_KEY).unwrap().is_none());
}

#[test]
fn partial_file_fills_defaults() {
    let store = MemoryStore::default();
    store
        .save_raw(TOOL_CONFIG_KEY, br#"{ "game_variant": "hipnotic" }"#)
        .unwrap();
    let cfg = ToolConfig::load_or_default(&ConfigService::new(store)).unwrap();
    assert_eq!(cfg.game_variant, GameVariant::Hipnotic);
    assert_eq!(cfg.fov_y, 90.0);
}

#[test]
fn out_of_range_values_are_rejected() {
    let svc = ConfigService::new(MemoryStore::default());
    let bad = ToolConfig {
        fov_y: 180.0,
        ..ToolConfig::default()
    };
    assert!(matches!(
        bad.store(&svc),
        Err(ConfigError::Invalid { field: "fov_y", .. })
    ));
    svc.store()
        .save_raw(TOOL_CONFIG_KEY, br#"{ "aspect": -1.0 }"#)
        .unwrap();
    assert!(matches!(
        ToolConfig::load_or_default(&svc),
        Err(ConfigError::Invalid { field: "aspect", .. })
    ));
}

#[test]
fn out_of_range_file_loads_unchecked_for_repair() {
    let store = MemoryStore::default();
    store
        .save_raw(TOOL_CONFIG_KEY, br#"{ "fov_y": 500.0 }"#)
        .unwrap();
    let svc = ConfigService::new(store);
    assert!(ToolConfig::load_or_default(&svc).is_err());

    let mut cfg = ToolConfig::load_stored(&svc).unwrap();
    assert_eq!(cfg.fov_y, 500.0);
    cfg.fov_y = 90.0;
    cfg.store(&svc).unwrap();
    assert_eq!(ToolConfig::load_or_default(&svc).unwrap(), ToolConfig::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let store = MemoryStore::default();
    store.save_raw(TOOL_CONFIG_KEY, b"{ nope").unwrap();
    let svc = ConfigService::new(store);
    match ToolConfig::load_or_default(&svc) {
        Err(ConfigError::Parse { key, .. }) => assert_eq!(key, TOOL_CONFIG_KEY),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unknown_variant_name_is_a_serde_error() {
    let store = MemoryStore::default();
    store
        .save_raw(TOOL_CONFIG_KEY, br#"{ "game_variant": "doom" }"#)
        .unwrap();
    assert!(matches!(
        ToolConfig::load_or_default(&ConfigService::new(store)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn fs_store_round_trips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path().join("nested")).unwrap();
    let path = store.path_for(TOOL_CONFIG_KEY);
    assert!(path.ends_with("qmath.json"));

    let svc = ConfigService::new(store);
    let cfg = ToolConfig {
        game_variant: GameVariant::Superhot,
        fov_y: 75.0,
        aspect: 16.0 / 9.0,
    };
    cfg.store(&svc).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"superhot\""));
    assert_eq!(ToolConfig::load_or_default(&svc).unwrap(), cfg);
}

#[test]
fn fs_store_reports_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
}
