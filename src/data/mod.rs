mod column;
mod process;

pub use column::Column;
pub use process::{Pid, ProcessInfo, ProcessRecord, Uid};
