//! Parameter presets: named parameter sets, persisted as JSON.
//!
//! Presets are validated on insert, so every stored entry can be handed to
//! the generator as-is.
//!
//! # Layout
//! The store serializes as `{ "presets": { "<name>": { ...parameters } } }`.
//! YAML files with a bare `name: parameters` mapping can be merged in; colors
//! may be written as `[r, g, b]` or as hex strings.

use galaxy_common::Rgb;
use galaxy_generator::{GenerateError, Parameters};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the preset matching the generator defaults.
pub const DEFAULT_PRESET: &str = "classic";

/// Errors from preset operations.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("preset not found: {0:?}")]
    NotFound(String),
    #[error("preset {name:?} is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: GenerateError,
    },
}

/// Named parameter presets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetStore {
    presets: BTreeMap<String, Parameters>,
}

impl PresetStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the built-in presets.
    pub fn with_builtins() -> Self {
        let mut store = Self::new();
        for (name, params) in builtin_presets() {
            store.presets.insert(name.to_string(), params);
        }
        store
    }

    /// Add or replace a preset after validating it.
    pub fn insert(&mut self, name: impl Into<String>, params: Parameters) -> Result<(), PresetError> {
        let name = name.into();
        if let Err(source) = params.validate() {
            return Err(PresetError::Invalid { name, source });
        }
        if self.presets.insert(name.clone(), params).is_some() {
            tracing::debug!(%name, "replaced preset");
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Parameters, PresetError> {
        self.presets
            .get(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Option<Parameters> {
        self.presets.remove(name)
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Save the store to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a store from a JSON file, validating every entry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let file = std::fs::File::open(path)?;
        let raw: Self = serde_json::from_reader(file)?;
        let mut store = Self::new();
        for (name, params) in raw.presets {
            store.insert(name, params)?;
        }
        Ok(store)
    }

    /// Merge presets from a YAML file. Returns the imported names.
    pub fn import_yaml(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>, PresetError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        self.import_yaml_str(&data)
    }

    /// Merge presets from a YAML document mapping names to parameters.
    ///
    /// All entries are validated before any is inserted.
    pub fn import_yaml_str(&mut self, yaml: &str) -> Result<Vec<String>, PresetError> {
        let incoming: BTreeMap<String, Parameters> = serde_yaml::from_str(yaml)?;
        for (name, params) in &incoming {
            if let Err(source) = params.validate() {
                return Err(PresetError::Invalid {
                    name: name.clone(),
                    source,
                });
            }
        }
        let names: Vec<String> = incoming.keys().cloned().collect();
        self.presets.extend(incoming);
        tracing::info!(count = names.len(), "imported presets");
        Ok(names)
    }
}

fn builtin_presets() -> [(&'static str, Parameters); 3] {
    let classic = Parameters::default();
    [
        (DEFAULT_PRESET, classic),
        (
            "tight-spiral",
            Parameters {
                branches: 5,
                spin: 2.5,
                randomness: 0.1,
                concentration_power: 6.0,
                outside_color: Rgb::new(0.3, 0.2, 0.9),
                ..classic
            },
        ),
        (
            "diffuse",
            Parameters {
                count: 50_000,
                branches: 2,
                spin: 0.4,
                randomness: 1.2,
                concentration_power: 1.5,
                point_size: 0.02,
                ..classic
            },
        ),
    ]
}

pub fn crate_info() -> &'static str {
    "galaxy-presets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_valid() {
        let store = PresetStore::with_builtins();
        assert_eq!(store.len(), 3);
        for name in store.names() {
            assert!(store.get(name).unwrap().validate().is_ok(), "{name}");
        }
        assert_eq!(store.get(DEFAULT_PRESET).unwrap(), &Parameters::default());
    }

    #[test]
    fn missing_preset_is_not_found() {
        let store = PresetStore::new();
        assert!(store.is_empty());
        assert!(matches!(store.get("nope"), Err(PresetError::NotFound(_))));
    }

    #[test]
    fn insert_rejects_invalid_parameters() {
        let mut store = PresetStore::new();
        let bad = Parameters {
            branches: 0,
            ..Parameters::default()
        };
        let err = store.insert("broken", bad).unwrap_err();
        assert!(matches!(err, PresetError::Invalid { ref name, .. } if name == "broken"));
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_and_remove_deletes() {
        let mut store = PresetStore::with_builtins();
        let custom = Parameters {
            count: 1234,
            ..Parameters::default()
        };
        store.insert(DEFAULT_PRESET, custom).unwrap();
        assert_eq!(store.get(DEFAULT_PRESET).unwrap().count, 1234);
        assert!(store.remove(DEFAULT_PRESET).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let store = PresetStore::with_builtins();
        store.save(tmp.path()).unwrap();

        let loaded = PresetStore::load(tmp.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(
            loaded.get("tight-spiral").unwrap(),
            store.get("tight-spiral").unwrap()
        );
    }

    #[test]
    fn load_rejects_invalid_entries() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            r#"{ "presets": { "bad": { "radius": -1.0 } } }"#,
        )
        .unwrap();
        assert!(matches!(
            PresetStore::load(tmp.path()),
            Err(PresetError::Invalid { .. })
        ));
    }

    #[test]
    fn import_yaml_with_hex_colors() {
        let yaml = r##"
ember:
  count: 2000
  branches: 4
  inside_color: "#ff6030"
  outside_color: [0.1, 0.2, 0.5]
"##;
        let mut store = PresetStore::new();
        let names = store.import_yaml_str(yaml).unwrap();
        assert_eq!(names, vec!["ember".to_string()]);

        let ember = store.get("ember").unwrap();
        assert_eq!(ember.count, 2000);
        assert_eq!(ember.branches, 4);
        assert_eq!(ember.inside_color, Rgb::from_u8(0xff, 0x60, 0x30));
        assert_eq!(ember.radius, Parameters::default().radius);
    }

    #[test]
    fn import_yaml_is_all_or_nothing() {
        let yaml = r#"
good:
  count: 100
bad:
  concentration_power: 0.5
"#;
        let mut store = PresetStore::new();
        assert!(store.import_yaml_str(yaml).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn import_yaml_from_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "wide:\n  radius: 12.0\n").unwrap();
        let mut store = PresetStore::with_builtins();
        store.import_yaml(tmp.path()).unwrap();
        assert_eq!(store.get("wide").unwrap().radius, 12.0);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("presets"));
    }
}
