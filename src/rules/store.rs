//! Persisted rule document with an in-process cache.
//!
//! The store is the only component that touches the filesystem. Reads never
//! fail: a missing, unreadable or malformed document falls back to
//! [`Rules::default`] with a warning.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::constants::APP_CONFIG_DIR;
use crate::rules::{merge_json, Rules, RulesSource};

/// File name of the rule document inside the config directory.
pub const RULES_FILE_NAME: &str = "rules.json";

/// Rule document at a fixed path plus the cached merge result.
///
/// # File Location
///
/// - Linux: `~/.config/CabinetDraft/rules.json`
/// - macOS: `~/Library/Application Support/CabinetDraft/rules.json`
/// - Windows: `%APPDATA%\CabinetDraft\rules.json`
#[derive(Debug)]
pub struct RuleStore {
    path: PathBuf,
    cache: RwLock<Option<Arc<Rules>>>,
}

impl RuleStore {
    /// Creates a store backed by `path`. Nothing is read until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Creates a store at the platform config location.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Creates a store for the rule document inside `config_dir`.
    #[must_use]
    pub fn in_dir(config_dir: impl AsRef<Path>) -> Self {
        Self::new(config_dir.as_ref().join(RULES_FILE_NAME))
    }

    /// Gets the platform-specific rule document path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR);

        Ok(config_dir.join(RULES_FILE_NAME))
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, merges it over the defaults and caches the result.
    ///
    /// Never fails; read and parse problems are logged and yield defaults.
    pub fn load(&self) -> Arc<Rules> {
        let rules = Arc::new(self.read_merged());
        self.store_cache(Arc::clone(&rules));
        rules
    }

    /// Returns the cached rules, loading them first if needed.
    pub fn get(&self) -> Arc<Rules> {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match cached {
            Some(rules) => rules,
            None => self.load(),
        }
    }

    /// Writes the full rule tree and updates the cache.
    ///
    /// Uses temp file + rename for atomic writes.
    pub fn save(&self, rules: &Rules) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create rules directory: {}",
                dir.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(rules).context("Failed to serialize rules")?;

        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp rules file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp rules file to: {}",
            self.path.display()
        ))?;

        self.store_cache(Arc::new(rules.clone()));
        info!("Saved rules to {}", self.path.display());

        Ok(())
    }

    /// Writes the built-in defaults and returns them.
    pub fn reset(&self) -> Result<Rules> {
        let defaults = Rules::default();
        self.save(&defaults)?;
        Ok(defaults)
    }

    /// Drops the cache; the next [`get`](Self::get) re-reads the document.
    pub fn invalidate(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn store_cache(&self, rules: Arc<Rules>) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(rules);
    }

    fn read_merged(&self) -> Rules {
        if !self.path.exists() {
            debug!(
                "No rules document at {}, using defaults",
                self.path.display()
            );
            return Rules::default();
        }

        match self.try_read_merged() {
            Ok(rules) => {
                debug!("Loaded rules from {}", self.path.display());
                rules
            }
            Err(e) => {
                warn!("{e:#}; falling back to default rules");
                Rules::default()
            }
        }
    }

    fn try_read_merged(&self) -> Result<Rules> {
        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read rules file: {}",
            self.path.display()
        ))?;

        let document: Value = serde_json::from_str(&content).context(format!(
            "Failed to parse rules file: {}",
            self.path.display()
        ))?;

        let mut merged =
            serde_json::to_value(Rules::default()).context("Failed to serialize default rules")?;
        merge_json(&mut merged, document);

        serde_json::from_value(merged).context(format!(
            "Rules file has an invalid shape: {}",
            self.path.display()
        ))
    }
}

impl RulesSource for RuleStore {
    fn rules(&self) -> Arc<Rules> {
        self.get()
    }

    fn save(&self, rules: &Rules) -> Result<()> {
        RuleStore::save(self, rules)
    }

    fn reset(&self) -> Result<Rules> {
        RuleStore::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> RuleStore {
        RuleStore::new(temp_dir.path().join(RULES_FILE_NAME))
    }

    #[test]
    fn test_in_dir_uses_document_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = RuleStore::in_dir(temp_dir.path());
        assert_eq!(store.path(), temp_dir.path().join(RULES_FILE_NAME));
    }

    #[test]
    fn test_default_path_is_under_app_dir() {
        if let Ok(path) = RuleStore::default_path() {
            assert!(path.ends_with(Path::new(APP_CONFIG_DIR).join(RULES_FILE_NAME)));
        }
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert_eq!(*store.get(), Rules::default());
    }

    #[test]
    fn test_partial_document_merges_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(
            store.path(),
            r#"{"materials":{"body":{"thickness":15}},"hardware":{"hinges_per_door":3}}"#,
        )
        .unwrap();

        let rules = store.load();
        assert!((rules.materials.body.thickness - 15.0).abs() < f64::EPSILON);
        assert_eq!(rules.materials.body.label, "PB 18T");
        assert_eq!(rules.hardware.hinges_per_door, 3);
        assert_eq!(rules.hardware.hinge_type, Rules::default().hardware.hinge_type);
    }

    #[test]
    fn test_malformed_document_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(*store.load(), Rules::default());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), r#"{"construction":{"door_gap":"wide"}}"#).unwrap();
        assert_eq!(*store.load(), Rules::default());
    }

    #[test]
    fn test_save_updates_cache_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut rules = Rules::default();
        rules.construction.door_gap = 3.0;
        store.save(&rules).unwrap();

        assert!((store.get().construction.door_gap - 3.0).abs() < f64::EPSILON);

        let reopened = store_in(&temp_dir);
        assert!((reopened.get().construction.door_gap - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cache_survives_file_edits_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!((store.get().construction.door_gap - 4.0).abs() < f64::EPSILON);

        fs::write(store.path(), r#"{"construction":{"door_gap":5}}"#).unwrap();
        assert!((store.get().construction.door_gap - 4.0).abs() < f64::EPSILON);

        store.invalidate();
        assert!((store.get().construction.door_gap - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), r#"{"construction":{"door_gap":5}}"#).unwrap();
        store.load();

        let rules = store.reset().unwrap();
        assert_eq!(rules, Rules::default());
        assert_eq!(*store.get(), Rules::default());

        let content = fs::read_to_string(store.path()).unwrap();
        let on_disk: Rules = serde_json::from_str(&content).unwrap();
        assert_eq!(on_disk, Rules::default());
    }
}
