//! Generic table/tree query protocol.
//!
//! A view renders any [`ItemModel`] by asking for child counts, cell values
//! and header titles. Nothing here knows about widgets or drawing.

mod index;
mod observer;
mod value;

pub use index::ModelIndex;
pub use observer::{ModelEvent, ModelObserver, ObserverId};
pub(crate) use observer::Observers;
pub use value::{ItemFlags, Orientation, Role, Value};

pub trait ItemModel {
    /// Handle for the cell at `row`/`column` under `parent`, or the root
    /// handle when no such cell exists.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    fn row_count(&self, parent: &ModelIndex) -> usize;

    fn column_count(&self, parent: &ModelIndex) -> usize;

    fn data(&self, index: &ModelIndex, role: Role) -> Value;

    fn header_data(&self, section: usize, orientation: Orientation, role: Role) -> Value;

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if self.index_in_range(index) {
            ItemFlags::READ_ONLY
        } else {
            ItemFlags::NONE
        }
    }

    fn has_index(&self, row: usize, column: usize, parent: &ModelIndex) -> bool {
        row < self.row_count(parent) && column < self.column_count(parent)
    }

    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    fn sibling(&self, row: usize, column: usize, index: &ModelIndex) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::ROOT;
        }
        self.index(row, column, &self.parent(index))
    }

    /// True when `index` still addresses an existing cell.
    fn index_in_range(&self, index: &ModelIndex) -> bool {
        match index.cell() {
            Some((row, column)) => self.has_index(row, column, &self.parent(index)),
            None => false,
        }
    }
}
