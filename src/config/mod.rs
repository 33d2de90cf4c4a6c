//! Configuration for a matchup run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MatchupError, Result};
use crate::error::util::safe_open_file;
use crate::models::Category;

/// File names of the per-level extracts, relative to the extract directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractFiles {
    pub townlands: String,
    pub civil_parishes: String,
    pub counties: String,
    pub baronies: String,
}

impl ExtractFiles {
    /// Extract file holding rows of `category`
    #[must_use]
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::County => &self.counties,
            Category::Barony => &self.baronies,
            Category::CivilParish => &self.civil_parishes,
            Category::Townland => &self.townlands,
        }
    }
}

impl Default for ExtractFiles {
    fn default() -> Self {
        Self {
            townlands: "townlands-no-geom.csv".to_string(),
            civil_parishes: "civil_parishes-no-geom.csv".to_string(),
            counties: "counties-no-geom.csv".to_string(),
            baronies: "baronies-no-geom.csv".to_string(),
        }
    }
}

/// Configuration for the matchup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchupConfig {
    /// Directory containing the extract CSVs
    pub extract_dir: PathBuf,
    /// Extract file names
    pub extract_files: ExtractFiles,
    /// Registry names file
    pub registry_names: PathBuf,
    /// Registry containment edges file
    pub registry_contains: PathBuf,
    /// Separator marking a multi-valued registry reference
    pub multi_ref_separator: char,
    /// Categories to match, in the order the passes run
    pub categories: Vec<Category>,
    /// Keep at most this many matches, lowest boundary ids first
    pub limit: Option<usize>,
    /// Template for the `logainm:url` tag, `{id}` is replaced
    pub url_template: String,
    /// Draw a progress bar for each pass
    pub show_progress: bool,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        Self {
            extract_dir: PathBuf::from("."),
            extract_files: ExtractFiles::default(),
            registry_names: PathBuf::from("names.csv"),
            registry_contains: PathBuf::from("geometric_contains.csv"),
            multi_ref_separator: ';',
            categories: Category::HIERARCHY.to_vec(),
            limit: None,
            url_template: "https://www.logainm.ie/en/{id}".to_string(),
            show_progress: false,
        }
    }
}

impl MatchupConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "matchup config")?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the extract holding rows of `category`
    #[must_use]
    pub fn extract_path(&self, category: Category) -> PathBuf {
        self.extract_dir.join(self.extract_files.for_category(category))
    }

    /// `logainm:url` value for a registry id
    #[must_use]
    pub fn registry_url(&self, id: crate::models::RegistryId) -> String {
        self.url_template.replace("{id}", &id.to_string())
    }

    /// Reject configurations that would run passes out of hierarchy order
    pub fn validate(&self) -> Result<()> {
        if self.categories.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(MatchupError::ConfigError(format!(
                "categories must be listed outermost first without repeats, got {:?}",
                self.categories
            )));
        }
        if self.multi_ref_separator.is_ascii_digit() {
            return Err(MatchupError::ConfigError(
                "multi_ref_separator cannot be a digit".to_string(),
            ));
        }
        Ok(())
    }
}
