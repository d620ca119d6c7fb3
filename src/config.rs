//! Widget defaults loaded from TOML
//!
//! Every section is optional; missing keys fall back to the widget's own
//! defaults.
//!
//! ```toml
//! [accordion]
//! mode = "single"
//!
//! [toast]
//! timeout_ms = 4000
//! position = "top-right"
//! progress_bar = true
//! ```

use crate::components::{AccordionMode, ToastPosition};
use crate::error::WidgetError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Aggregated widget configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub accordion: AccordionConfig,
    pub select: SelectConfig,
    pub rating: RatingConfig,
    pub calendar: CalendarConfig,
    pub toast: ToastConfig,
    pub dialog: DialogConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AccordionConfig {
    /// "multiple" or "single"
    pub mode: AccordionMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectConfig {
    /// Trigger text while nothing is selected
    pub label: String,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of stars
    pub items: usize,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    pub show_change_month_buttons: bool,
    /// First year of a 15-year picker; ignored when `years` is set
    pub first_year: Option<i32>,
    /// Explicit year list
    pub years: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    pub timeout_ms: u64,
    pub reset_grace_ms: u64,
    pub position: ToastPosition,
    pub progress_bar: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DialogConfig {
    pub width: u16,
    pub height: u16,
    pub close_on_escape: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            label: "Select".to_string(),
            default_value: None,
        }
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self { items: 5 }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            reset_grace_ms: 300,
            position: ToastPosition::default(),
            progress_bar: false,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 10,
            close_on_escape: false,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WidgetConfig =
            toml::from_str(content).context("Failed to parse widget config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))
    }

    /// Check values the widgets would reject at construction
    pub fn validate(&self) -> std::result::Result<(), WidgetError> {
        if self.rating.items == 0 {
            return Err(WidgetError::InvalidConfig(
                "rating.items must be at least 1".to_string(),
            ));
        }
        if self.toast.timeout_ms == 0 {
            return Err(WidgetError::InvalidConfig(
                "toast.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if matches!(&self.calendar.years, Some(years) if years.is_empty()) {
            return Err(WidgetError::InvalidConfig(
                "calendar.years must not be empty".to_string(),
            ));
        }
        if self.dialog.width == 0 || self.dialog.height == 0 {
            return Err(WidgetError::InvalidConfig(format!(
                "dialog size {}x{} is empty",
                self.dialog.width, self.dialog.height
            )));
        }
        Ok(())
    }
}
