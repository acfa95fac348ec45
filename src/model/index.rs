/// Opaque handle to a cell of an [`ItemModel`](super::ItemModel).
///
/// A handle is either the root (also used as "no parent" and "invalid") or a
/// `(row, column)` pair. Handles carry no identity: a model checks them
/// against its current shape on every use, so a handle issued before a
/// mutation may silently stop addressing anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    cell: Option<(usize, usize)>,
}

impl ModelIndex {
    pub const ROOT: ModelIndex = ModelIndex { cell: None };

    pub fn new(row: usize, column: usize) -> Self {
        Self {
            cell: Some((row, column)),
        }
    }

    pub fn root() -> Self {
        Self::ROOT
    }

    pub fn is_valid(&self) -> bool {
        self.cell.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.cell.is_none()
    }

    pub fn row(&self) -> Option<usize> {
        self.cell.map(|(row, _)| row)
    }

    pub fn column(&self) -> Option<usize> {
        self.cell.map(|(_, column)| column)
    }

    pub fn cell(&self) -> Option<(usize, usize)> {
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_default_and_invalid() {
        assert_eq!(ModelIndex::default(), ModelIndex::ROOT);
        assert!(ModelIndex::root().is_root());
        assert!(!ModelIndex::root().is_valid());
        assert_eq!(ModelIndex::root().row(), None);
    }

    #[test]
    fn cell_accessors() {
        let index = ModelIndex::new(4, 2);
        assert!(index.is_valid());
        assert_eq!(index.row(), Some(4));
        assert_eq!(index.column(), Some(2));
        assert_eq!(index.cell(), Some((4, 2)));
    }
}
