//! Block data: a block with its state properties and its pre-flattening id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A block state described both ways a server release may need it.
///
/// Releases from 1.13 identify the state by name and properties; older ones
/// by numeric item id plus a 4-bit data value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockData {
    pub name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub legacy_id: u16,
    #[serde(default)]
    pub legacy_data: u8,
}

impl BlockData {
    pub fn new(name: impl Into<String>, legacy_id: u16) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            legacy_id,
            legacy_data: 0,
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_legacy_data(mut self, data: u8) -> Self {
        self.legacy_data = data & 0xF;
        self
    }

    /// Name with the `minecraft:` namespace added when missing.
    #[must_use]
    pub fn namespaced_name(&self) -> String {
        if self.name.contains(':') {
            self.name.clone()
        } else {
            format!("minecraft:{}", self.name)
        }
    }

    /// `itemId + (data << 12)`, the id pre-1.13 clients expect.
    #[must_use]
    pub fn legacy_combined_id(&self) -> i32 {
        i32::from(self.legacy_id) + (i32::from(self.legacy_data) << 12)
    }
}
