use std::slice;

use tracing::debug;

use crate::config::ModelConfig;
use crate::data::{Column, Pid, ProcessInfo, ProcessRecord};
use crate::error::{ModelError, Result};
use crate::model::{
    ItemModel, ModelEvent, ModelIndex, ModelObserver, ObserverId, Observers, Orientation, Role,
    Value,
};

/// Flat, insertion-ordered table of processes for the attach dialog.
///
/// The enumerator fills it with [`append`](Self::append) and empties it with
/// [`clear`](Self::clear); views read it through [`ItemModel`]. Every row is
/// a child of the root and has no children of its own.
pub struct ProcessModel {
    rows: Vec<ProcessRecord>,
    capacity_hint: usize,
    observers: Observers,
}

impl Default for ProcessModel {
    fn default() -> Self {
        Self::with_config(&ModelConfig::default())
    }
}

impl ProcessModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ModelConfig) -> Self {
        Self {
            rows: Vec::with_capacity(config.capacity_hint),
            capacity_hint: config.capacity_hint,
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self, observer: impl ModelObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Adds `record` as the last row. Duplicate pids are kept.
    pub fn append(&mut self, record: ProcessRecord) {
        let row = self.rows.len();
        let parent = ModelIndex::ROOT;

        self.observers.emit(ModelEvent::RowsAboutToBeInserted {
            parent,
            first: row,
            last: row,
        });
        debug!(pid = record.pid, row, "process appended");
        self.rows.push(record);
        self.observers.emit(ModelEvent::RowsInserted {
            parent,
            first: row,
            last: row,
        });
    }

    pub fn add_process<P: ProcessInfo + ?Sized>(&mut self, process: &P) {
        self.append(ProcessRecord::from_process(process));
    }

    /// Drops every row. All previously issued indices stop resolving.
    pub fn clear(&mut self) {
        self.observers.emit(ModelEvent::AboutToReset);
        debug!(rows = self.rows.len(), "process model cleared");
        self.rows.clear();
        self.rows.shrink_to(self.capacity_hint);
        self.rows.reserve(self.capacity_hint);
        self.observers.emit(ModelEvent::Reset);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.rows
    }

    pub fn record(&self, row: usize) -> Option<&ProcessRecord> {
        self.rows.get(row)
    }

    pub fn iter(&self) -> slice::Iter<'_, ProcessRecord> {
        self.rows.iter()
    }

    pub fn is_index_valid(&self, index: &ModelIndex) -> bool {
        self.index_in_range(index)
    }

    /// Pid of the row `index` points at, whichever column it names.
    pub fn process_id(&self, index: &ModelIndex) -> Result<Pid> {
        let row = index.row().ok_or(ModelError::InvalidIndex)?;
        self.rows
            .get(row)
            .map(|record| record.pid)
            .ok_or_else(|| ModelError::stale_index(row, self.rows.len()))
    }

    fn cell(&self, index: &ModelIndex) -> Option<(&ProcessRecord, Column)> {
        let (row, column) = index.cell()?;
        Some((self.rows.get(row)?, Column::from_index(column)?))
    }
}

impl ItemModel for ProcessModel {
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if self.has_index(row, column, parent) {
            ModelIndex::new(row, column)
        } else {
            ModelIndex::ROOT
        }
    }

    fn parent(&self, _index: &ModelIndex) -> ModelIndex {
        ModelIndex::ROOT
    }

    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_root() {
            self.rows.len()
        } else {
            0
        }
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        Column::COUNT
    }

    fn data(&self, index: &ModelIndex, role: Role) -> Value {
        if role != Role::Display {
            return Value::Empty;
        }
        self.cell(index)
            .map(|(record, column)| column.value_of(record))
            .unwrap_or_default()
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: Role) -> Value {
        if orientation != Orientation::Horizontal || role != Role::Display {
            return Value::Empty;
        }
        Column::from_index(section)
            .map(|column| Value::from(column.title()))
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a ProcessModel {
    type Item = &'a ProcessRecord;
    type IntoIter = slice::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ProcessRecord> for ProcessModel {
    fn extend<T: IntoIterator<Item = ProcessRecord>>(&mut self, iter: T) {
        for record in iter {
            self.append(record);
        }
    }
}
