//! Experiment Catalog - name-keyed collection of experiment configurations
//!
//! The catalog is populated by explicit construction (or by loading a
//! catalog file) and then handed to the scheduler read-only.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ExperimentConfig;
use crate::{Error, Result};

/// Collection of experiments keyed by unique name.
///
/// ## Design
///
/// Records live in a vector in registration order; a hash index maps each
/// name to its slot for O(1) lookups. Iteration and serialization follow
/// registration order so catalog files round-trip byte-stable.
#[derive(Debug, Clone, Default)]
pub struct ExperimentCatalog {
    experiments: Vec<ExperimentConfig>,
    index: FxHashMap<String, usize>,
}

/// On-disk shape: a list of records under `experiment`.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    experiment: Vec<ExperimentConfig>,
}

#[derive(Serialize)]
struct CatalogFileRef<'a> {
    experiment: &'a [ExperimentConfig],
}

impl ExperimentCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, registering them in order.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid or duplicate record.
    pub fn from_configs(configs: impl IntoIterator<Item = ExperimentConfig>) -> Result<Self> {
        let mut catalog = Self::new();
        for config in configs {
            catalog.register(config)?;
        }
        Ok(catalog)
    }

    /// Add an experiment to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateExperiment`] if the name is already taken,
    /// or [`Error::InvalidConfiguration`] if the record fails validation.
    pub fn register(&mut self, config: ExperimentConfig) -> Result<()> {
        config.validate()?;

        if self.index.contains_key(config.name()) {
            tracing::warn!(experiment = config.name(), "rejecting duplicate experiment");
            return Err(Error::DuplicateExperiment(config.name().to_string()));
        }

        tracing::debug!(
            experiment = config.name(),
            cp = config.control_program_id(),
            "registered experiment"
        );
        self.index
            .insert(config.name().to_string(), self.experiments.len());
        self.experiments.push(config);
        Ok(())
    }

    /// Get an experiment by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExperimentConfig> {
        self.index.get(name).map(|&slot| &self.experiments[slot])
    }

    /// Get an experiment by name, treating a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownExperiment`] if no record has that name.
    pub fn require(&self, name: &str) -> Result<&ExperimentConfig> {
        self.get(name)
            .ok_or_else(|| Error::UnknownExperiment(name.to_string()))
    }

    /// Check whether an experiment with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of experiments in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Experiment names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.experiments.iter().map(ExperimentConfig::name)
    }

    /// Experiments in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExperimentConfig> {
        self.experiments.iter()
    }

    /// Parse a TOML catalog (`[[experiment]]` tables).
    ///
    /// # Errors
    ///
    /// Returns a parse error (which includes record validation failures) or
    /// [`Error::DuplicateExperiment`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_configs(file.experiment)
    }

    /// Serialize the catalog as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlSer`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.as_file())?)
    }

    /// Parse a JSON catalog (`{"experiment": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] or [`Error::DuplicateExperiment`].
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(source)?;
        Self::from_configs(file.experiment)
    }

    /// Serialize the catalog as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.as_file())?)
    }

    /// Load a catalog file, choosing the format from its extension.
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use radar_experiments::experiment::ExperimentCatalog;
    ///
    /// let catalog = ExperimentCatalog::load("experiments.toml")?;
    /// let normal = catalog.require("Normalscan16")?;
    /// println!("cp {}", normal.control_program_id());
    /// # Ok::<(), radar_experiments::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything but `.toml` and
    /// `.json`, [`Error::Io`] if the file cannot be read, or any parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            path = %path.display(),
            experiments = catalog.len(),
            "loaded experiment catalog"
        );
        Ok(catalog)
    }

    fn as_file(&self) -> CatalogFileRef<'_> {
        CatalogFileRef {
            experiment: &self.experiments,
        }
    }
}

impl<'a> IntoIterator for &'a ExperimentCatalog {
    type Item = &'a ExperimentConfig;
    type IntoIter = std::slice::Iter<'a, ExperimentConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
