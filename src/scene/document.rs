//! Scene documents: a JSON snapshot of a design canvas.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{FontName, NodeKind};

use super::fonts::SceneFonts;
use super::node::SceneNode;

/// A canvas snapshot with its font list and current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Document name
    #[serde(default)]
    pub name: String,

    /// Fonts available to the host; all fonts when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<FontName>>,

    /// Ids of the selected nodes
    #[serde(default)]
    pub selection: Vec<String>,

    /// Top-level nodes
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
}

impl SceneDocument {
    /// Create an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fonts: None,
            selection: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Parse a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Scene(e.to_string()))
    }

    /// Read and parse a scene file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Find a node by id anywhere in the document.
    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Resolve node ids, failing on unknown ids.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<&SceneNode>> {
        ids.iter()
            .map(|id| {
                self.find(id)
                    .ok_or_else(|| Error::Scene(format!("unknown node id '{}'", id)))
            })
            .collect()
    }

    /// Nodes named by the document's selection.
    pub fn selected_nodes(&self) -> Result<Vec<&SceneNode>> {
        self.resolve(&self.selection)
    }

    /// Font loader for this document's declared fonts.
    pub fn font_loader(&self) -> SceneFonts {
        match &self.fonts {
            Some(fonts) => SceneFonts::with_available(fonts.iter().cloned()),
            None => SceneFonts::all_available(),
        }
    }

    /// Count nodes of the given kind across the document.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().map(|n| n.count(kind)).sum()
    }
}
