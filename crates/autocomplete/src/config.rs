// Chunk: docs/chunks/autocomplete_config - Configuration snapshots
//!
//! Configuration snapshots handed to the engine by its host.
//!
//! A configuration is immutable once handed over: the engine replaces its whole
//! working set when it receives a new one. The JSON form uses camelCase keys:
//!
//! ```json
//! {
//!   "placeholder": "Search for items",
//!   "minCharacters": 0,
//!   "maxResults": 0,
//!   "maxHeightUnits": 5,
//!   "initialValue": "",
//!   "clearOnSelect": false,
//!   "width": 300,
//!   "items": [{ "name": "Pizza", "payload": { "id": 0, "text": "Pizza" } }]
//! }
//! ```
//!
//! Missing keys take the defaults from [`AutocompleteConfig::default`].
//! The engine itself never validates; hosts call [`AutocompleteConfig::validate`]
//! (the loaders do it for them).

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debouncer::DEFAULT_DEBOUNCE_MS;
use crate::item::{Item, ItemCatalog};
use crate::scroll_sync::DEFAULT_ROW_HEIGHT;

/// Placeholder shown when the host does not set one.
pub const DEFAULT_PLACEHOLDER: &str = "Search for items";

/// Default number of visible rows before the list scrolls.
pub const DEFAULT_MAX_HEIGHT_UNITS: u32 = 5;

/// Default input width in rendering units.
pub const DEFAULT_WIDTH: f32 = 300.0;

/// Errors raised at the configuration boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("maxHeightUnits must be positive")]
    ZeroMaxHeight,
    #[error("width must be a positive finite number, got {0}")]
    InvalidWidth(f32),
}

/// One configuration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[serde(bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>"))]
pub struct AutocompleteConfig<P = serde_json::Value> {
    /// Text shown in the empty input
    pub placeholder: String,
    /// Minimum query length before any result is shown
    pub min_characters: usize,
    /// Result cap; 0 means unbounded
    pub max_results: usize,
    /// The selectable items
    pub items: ItemCatalog<P>,
    /// Visible rows before the list scrolls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height_units: Option<u32>,
    /// Text committed immediately when the engine activates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Empty the input after a selection instead of showing the item name
    pub clear_on_select: bool,
    /// Input width in rendering units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl<P> Default for AutocompleteConfig<P> {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_characters: 0,
            max_results: 0,
            items: ItemCatalog::empty(),
            max_height_units: Some(DEFAULT_MAX_HEIGHT_UNITS),
            initial_value: None,
            clear_on_select: false,
            width: Some(DEFAULT_WIDTH),
        }
    }
}

impl<P> AutocompleteConfig<P> {
    /// Creates a default configuration over the given items.
    pub fn with_items(items: impl Into<ItemCatalog<P>>) -> Self {
        Self {
            items: items.into(),
            ..Self::default()
        }
    }

    pub fn min_characters(mut self, min_characters: usize) -> Self {
        self.min_characters = min_characters;
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn clear_on_select(mut self, clear: bool) -> Self {
        self.clear_on_select = clear;
        self
    }

    pub fn max_height_units(mut self, units: Option<u32>) -> Self {
        self.max_height_units = units;
        self
    }

    /// Checks the constraints the engine relies on.
    ///
    /// Counts are unsigned by construction; this covers the optional fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height_units == Some(0) {
            return Err(ConfigError::ZeroMaxHeight);
        }
        if let Some(width) = self.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::InvalidWidth(width));
            }
        }
        Ok(())
    }

    /// Maximum list height in rendering units (`maxHeightUnits × row_height`).
    pub fn max_height(&self, row_height: f32) -> Option<f32> {
        self.max_height_units.map(|units| units as f32 * row_height)
    }
}

impl<P: DeserializeOwned> AutocompleteConfig<P> {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl AutocompleteConfig<serde_json::Value> {
    /// The catalog of the stock demo page: Pizza, Burger, Kebab.
    pub fn demo() -> Self {
        let items = ["Pizza", "Burger", "Kebab"]
            .iter()
            .enumerate()
            .map(|(id, text)| Item::new(*text, serde_json::json!({ "id": id, "text": text })))
            .collect::<ItemCatalog<_>>();
        Self::with_items(items)
    }
}

/// Engine tunables that are not part of a configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Quiet period before raw input is committed
    pub debounce: Duration,
    /// Height of one result row, shared with the renderer
    pub row_height: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}
