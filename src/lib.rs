//! Process table model for the debugger's "attach to process" dialog.
//!
//! [`ProcessModel`] keeps the processes handed to it by an enumerator in
//! insertion order and answers the [`ItemModel`] query protocol so that any
//! table view can draw them and report which pid the user picked.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
mod process_model;

pub use config::ModelConfig;
pub use data::{Column, Pid, ProcessInfo, ProcessRecord, Uid};
pub use error::{ModelError, Result};
pub use model::{
    ItemFlags, ItemModel, ModelEvent, ModelIndex, ModelObserver, ObserverId, Orientation, Role,
    Value,
};
pub use process_model::ProcessModel;
