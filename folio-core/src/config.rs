//! Template lookup table.
//!
//! ```json
//! {
//!   "covers":  { "<style>": [ { "file": "x.idml", "page": 1 } ] },
//!   "spreads": { "<style>": [ { "file": "y.idml", "pages": [2, 3] } ] }
//! }
//! ```
//!
//! A missing file is not an error: [`TemplateConfig::load`] falls back to
//! [`TemplateConfig::builtin`], which knows the `fashion` and `minimal` styles.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Placement, Style, TemplateEntry, TemplateKind};

/// Default location of the template configuration, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/templates_config.json";

type Buckets = BTreeMap<String, Vec<TemplateEntry>>;

/// Immutable style → template table for covers and spreads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub covers: Buckets,
    #[serde(default)]
    pub spreads: Buckets,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was absent; the built-in table is in use.
    Builtin { missing: PathBuf },
}

/// A configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TemplateConfig,
    pub source: ConfigSource,
}

impl TemplateConfig {
    /// Read the table from `path`, falling back to [`TemplateConfig::builtin`]
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "template config not found, using built-in templates"
                );
                return Ok(LoadedConfig {
                    config: Self::builtin(),
                    source: ConfigSource::Builtin {
                        missing: path.to_path_buf(),
                    },
                });
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    /// Minimal two-style table used when no configuration file exists.
    pub fn builtin() -> Self {
        let cover = || TemplateEntry {
            file: "vogue_designes_scripts_label.idml".to_string(),
            placement: Placement::Page(1),
        };
        let spread = |a: u32, b: u32| TemplateEntry {
            file: "julia_stula.idml".to_string(),
            placement: Placement::Pages(vec![a, b]),
        };

        let covers = BTreeMap::from([
            ("fashion".to_string(), vec![cover()]),
            ("minimal".to_string(), vec![cover()]),
        ]);
        let spreads = BTreeMap::from([
            (
                "fashion".to_string(),
                vec![spread(2, 3), spread(4, 5), spread(6, 7)],
            ),
            ("minimal".to_string(), vec![spread(2, 3)]),
        ]);
        Self { covers, spreads }
    }

    /// Templates registered for `kind` under `style`; empty when none are.
    pub fn bucket(&self, kind: TemplateKind, style: &Style) -> &[TemplateEntry] {
        let buckets = match kind {
            TemplateKind::Cover => &self.covers,
            TemplateKind::Spread => &self.spreads,
        };
        buckets.get(&style.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every style named in either section, sorted.
    pub fn styles(&self) -> Vec<Style> {
        self.covers
            .keys()
            .chain(self.spreads.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|s| Style::from(s.as_str()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let dir = TempDir::new().expect("tempdir");
        let loaded = TemplateConfig::load(&dir.path().join("nope.json")).expect("load");
        assert!(matches!(loaded.source, ConfigSource::Builtin { .. }));
        assert_eq!(
            loaded.config.styles(),
            vec![Style::from("fashion"), Style::from("minimal")]
        );
    }

    #[test]
    fn builtin_buckets_match_known_layout() {
        let config = TemplateConfig::builtin();
        let fashion = Style::from("fashion");
        assert_eq!(config.bucket(TemplateKind::Cover, &fashion).len(), 1);
        assert_eq!(config.bucket(TemplateKind::Spread, &fashion).len(), 3);
        assert_eq!(
            config.bucket(TemplateKind::Spread, &Style::from("minimal"))[0].placement,
            Placement::Pages(vec![2, 3])
        );
        assert!(config
            .bucket(TemplateKind::Cover, &Style::from("family"))
            .is_empty());
    }

    #[test]
    fn reads_file_config() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(
            &path,
            r#"{
                "covers": {"family": [{"file": "fam.idml", "page": 1}]},
                "spreads": {"family": [{"file": "fam.idml", "pages": [2, 3]}]}
            }"#,
        )
        .expect("write config");

        let loaded = TemplateConfig::load(&path).expect("load");
        assert_eq!(loaded.source, ConfigSource::File(path));
        assert_eq!(loaded.config.styles(), vec![Style::from("family")]);
        assert_eq!(
            loaded.config.bucket(TemplateKind::Spread, &Style::from("family"))[0].file,
            "fam.idml"
        );
    }

    #[test]
    fn missing_section_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(&path, r#"{"covers": {"solo": [{"file": "s.idml", "page": 4}]}}"#)
            .expect("write config");
        let config = TemplateConfig::load(&path).expect("load").config;
        assert!(config.spreads.is_empty());
        assert_eq!(config.styles(), vec![Style::from("solo")]);
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("templates.json");
        fs::write(&path, "{ not json").expect("write config");
        let err = TemplateConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("templates.json"));
    }
}
