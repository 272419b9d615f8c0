//! Document state: the ordered layer sequence and the global distribution
//!
//! A document always holds at least one layer. Every structural edit goes
//! through the operations here, which keep that invariant and report index
//! errors instead of panicking.

use crate::document::layer::{Layer, composition_radius};
use crate::io::configuration::{DISTRIBUTION_MAX, DISTRIBUTION_MIN};
use crate::io::error::{PatternError, Result, WithPath, invalid_document, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered layers plus the distribution parameter shared by all of them
///
/// Layers are drawn in order, so later layers paint over earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentState {
    /// Layers in drawing order
    pub layers: Vec<Layer>,
    /// Exponent of the radial distribution remap, in `[-3, 3]`
    pub distribution: f64,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            layers: vec![Layer::new("Layer 1")],
            distribution: 0.0,
        }
    }
}

impl DocumentState {
    /// Single-layer document with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layers
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the document has no layers, only possible after manual edits
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer at `index`
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if `index` is out of bounds
    pub fn layer(&self, index: usize) -> Result<&Layer> {
        let layer_count = self.layers.len();
        self.layers
            .get(index)
            .ok_or(PatternError::LayerIndex { index, layer_count })
    }

    /// Mutable layer at `index`
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if `index` is out of bounds
    pub fn layer_mut(&mut self, index: usize) -> Result<&mut Layer> {
        let layer_count = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(PatternError::LayerIndex { index, layer_count })
    }

    /// Append a default layer named `Layer N` and return its index
    pub fn add_layer(&mut self) -> usize {
        let name = format!("Layer {}", self.layers.len() + 1);
        self.layers.push(Layer::new(name));
        self.layers.len() - 1
    }

    /// Append a deep copy of layer `index` and return the copy's index
    ///
    /// The copy is named `"<name> copy"`, or `"<name> copy N"` with the
    /// smallest `N >= 2` not already taken.
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if `index` is out of bounds
    pub fn duplicate_layer(&mut self, index: usize) -> Result<usize> {
        let mut copy = self.layer(index)?.clone();
        let base = if copy.name.is_empty() {
            "Layer".to_string()
        } else {
            copy.name.clone()
        };

        let mut name = format!("{base} copy");
        let mut suffix = 2_u32;
        while self.layers.iter().any(|layer| layer.name == name) {
            name = format!("{base} copy {suffix}");
            suffix += 1;
        }

        log::debug!("Duplicated layer {index} as '{name}'");
        copy.name = name;
        self.layers.push(copy);
        Ok(self.layers.len() - 1)
    }

    /// Remove layer `index` and return the index to select afterwards
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if `index` is out of bounds, or
    /// `InvalidParameter` if it is the only remaining layer
    pub fn delete_layer(&mut self, index: usize) -> Result<usize> {
        self.layer(index)?;
        if self.layers.len() <= 1 {
            return Err(invalid_parameter(
                "layer",
                &index,
                &"a document keeps at least one layer",
            ));
        }

        self.layers.remove(index);
        Ok(index.saturating_sub(1).min(self.layers.len() - 1))
    }

    /// Move layer `from` so it ends up at position `to`
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if either index is out of bounds
    pub fn move_layer(&mut self, from: usize, to: usize) -> Result<()> {
        self.layer(from)?;
        self.layer(to)?;
        if from != to {
            let layer = self.layers.remove(from);
            self.layers.insert(to, layer);
        }
        Ok(())
    }

    /// Restore layer `index` to defaults, keeping its name and colors
    ///
    /// # Errors
    ///
    /// Returns `LayerIndex` if `index` is out of bounds
    pub fn reset_layer(&mut self, index: usize) -> Result<()> {
        self.layer_mut(index)?.reset_keeping_colors();
        Ok(())
    }

    /// Largest radius over all layers, at least 1
    pub fn max_radius(&self) -> f64 {
        composition_radius(&self.layers)
    }

    /// Copy with every layer sanitized and the distribution clamped
    pub fn sanitized(&self) -> Self {
        let distribution = if self.distribution.is_finite() {
            self.distribution.clamp(DISTRIBUTION_MIN, DISTRIBUTION_MAX)
        } else {
            0.0
        };
        Self {
            layers: self.layers.iter().map(Layer::sanitized).collect(),
            distribution,
        }
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the text is not a valid document or
    /// holds no layers
    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(text).map_err(|error| invalid_document(&error))?;
        document.validated()
    }

    /// Serialize the document as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `DocumentEncode` if serialization fails
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| PatternError::DocumentEncode { source })
    }

    /// Read a document from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds no layers
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read document")?;
        let document: Self =
            serde_json::from_str(&text).map_err(|source| PatternError::DocumentParse {
                path: path.to_path_buf(),
                source,
            })?;
        document.validated()
    }

    /// Write the document to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json_string()?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        std::fs::write(path, text).with_path(path, "write document")
    }

    fn validated(self) -> Result<Self> {
        if self.layers.is_empty() {
            return Err(invalid_document(&"document has no layers"));
        }
        Ok(self)
    }
}
