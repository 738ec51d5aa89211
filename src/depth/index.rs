use std::collections::BTreeMap;

use crate::{depth::field::DepthField, foundation::core::GridCell};

/// Reverse lookup from depth value to the grid cells carrying it.
///
/// Built once per field; never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct DepthIndex {
    depths: Vec<u8>,
    cells: BTreeMap<u8, Vec<GridCell>>,
}

impl DepthIndex {
    /// Group every cell of `field` by its depth value.
    pub fn build(field: &DepthField) -> Self {
        let mut cells: BTreeMap<u8, Vec<GridCell>> = BTreeMap::new();
        for (cell, depth) in field.cells() {
            cells.entry(depth).or_default().push(cell);
        }
        let depths: Vec<u8> = cells.keys().copied().collect();
        tracing::debug!(
            layers = depths.len(),
            width = field.width(),
            height = field.height(),
            "built depth index"
        );
        Self { depths, cells }
    }

    /// Distinct depth values present in the field, ascending.
    pub fn depths(&self) -> &[u8] {
        &self.depths
    }

    /// Cells whose depth equals `depth` (empty when the value is absent).
    pub fn cells_at(&self, depth: u8) -> &[GridCell] {
        self.cells.get(&depth).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct depth layers.
    pub fn layer_count(&self) -> usize {
        self.depths.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/depth/index.rs"]
mod tests;
