//! Rendering configuration
//!
//! Settings shared by every request: page defaults, the query parameter
//! names used for navigation links, and output layout knobs. Loadable from
//! YAML or JSON.

use crate::error::{Error, Result, ResultExt};
use crate::pagination::{DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_PARAM};
use crate::record::ANSIC_TIMESTAMP_FORMAT;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Render Config
// ============================================================================

/// Configuration for the rendering pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page size used when the request does not give one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Query parameter carrying the page number
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Query parameter carrying the page size
    #[serde(default = "default_page_size_param")]
    pub page_size_param: String,

    /// Spaces per indentation level in XML output
    #[serde(default = "default_xml_indent")]
    pub xml_indent: usize,

    /// strftime layout for timestamp cells in CSV output
    #[serde(default = "default_csv_timestamp_format")]
    pub csv_timestamp_format: String,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_page_param() -> String {
    DEFAULT_PAGE_PARAM.to_string()
}

fn default_page_size_param() -> String {
    DEFAULT_PAGE_SIZE_PARAM.to_string()
}

fn default_xml_indent() -> usize {
    1
}

fn default_csv_timestamp_format() -> String {
    ANSIC_TIMESTAMP_FORMAT.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_param: default_page_param(),
            page_size_param: default_page_size_param(),
            xml_indent: default_xml_indent(),
            csv_timestamp_format: default_csv_timestamp_format(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::debug!(path = %path.display(), "Loaded render config");
        Ok(config)
    }

    /// Check the config for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::invalid_config(
                "default_page_size",
                "must be greater than zero",
            ));
        }

        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_config("page_param", "must not be empty"));
        }

        if self.page_size_param.trim().is_empty() {
            return Err(Error::invalid_config("page_size_param", "must not be empty"));
        }

        if self.page_param == self.page_size_param {
            return Err(Error::invalid_config(
                "page_size_param",
                "must differ from page_param",
            ));
        }

        if self.xml_indent == 0 {
            return Err(Error::invalid_config("xml_indent", "must be greater than zero"));
        }

        if self.csv_timestamp_format.is_empty()
            || StrftimeItems::new(&self.csv_timestamp_format).any(|item| item == Item::Error)
        {
            return Err(Error::invalid_config(
                "csv_timestamp_format",
                format!("'{}' is not a valid strftime layout", self.csv_timestamp_format),
            ));
        }

        Ok(())
    }
}
