use super::potential::LjParams;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown parameter preset '{0}'")]
    UnknownPreset(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetFile {
    presets: HashMap<String, LjParams>,
}

/// A named collection of Lennard-Jones parameter sets.
///
/// Presets are loaded from a TOML file of the form:
///
/// ```toml
/// [presets.argon]
/// epsilon = 0.997
/// sigma = 3.4
/// ```
///
/// The built-in library always contains `reduced` (epsilon = sigma = 1).
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: HashMap<String, LjParams>,
}

impl PresetLibrary {
    pub fn builtin() -> Self {
        let mut presets = HashMap::new();
        presets.insert("reduced".to_string(), LjParams::default());
        // Rahman's argon parameters, in kJ/mol and Angstroms.
        presets.insert("argon".to_string(), LjParams::new(0.997, 3.4));
        Self { presets }
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: PresetFile = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self {
            presets: file.presets,
        })
    }

    pub fn get(&self, name: &str) -> Result<LjParams, ParamLoadError> {
        self.presets
            .get(name)
            .copied()
            .ok_or_else(|| ParamLoadError::UnknownPreset(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn builtin_library_contains_reduced_units() {
        let library = PresetLibrary::builtin();
        let params = library.get("reduced").unwrap();
        assert_eq!(params, LjParams::default());
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("presets.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            r#"
            [presets.argon]
            epsilon = 0.997
            sigma = 3.4

            [presets.xenon]
            epsilon = 1.904
            sigma = 3.96
            "#
        )
        .unwrap();

        let library = PresetLibrary::load(&file_path).unwrap();
        assert_eq!(library.get("argon").unwrap(), LjParams::new(0.997, 3.4));
        assert_eq!(library.get("xenon").unwrap(), LjParams::new(1.904, 3.96));
    }

    #[test]
    fn load_fails_with_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("broken.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "[presets.argon]\nepsilon = \"not a number\"").unwrap();

        let result = PresetLibrary::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = PresetLibrary::load(Path::new("/nonexistent/presets.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn get_fails_for_unknown_preset() {
        let library = PresetLibrary::builtin();
        let result = library.get("krypton");
        assert!(matches!(result, Err(ParamLoadError::UnknownPreset(name)) if name == "krypton"));
    }
}
