use serde::{Deserialize, Serialize};

/// OS process identifier
pub type Pid = u32;

/// OS user identifier
pub type Uid = u32;

/// Read access to a live process as seen by the debugger.
///
/// The enumerator hands implementors of this trait to
/// [`ProcessModel::add_process`](crate::ProcessModel::add_process), which
/// snapshots the four fields into a [`ProcessRecord`]. User name resolution
/// is the implementor's job; an empty name is acceptable.
pub trait ProcessInfo {
    fn pid(&self) -> Pid;
    fn uid(&self) -> Uid;
    fn user(&self) -> &str;
    fn name(&self) -> &str;
}

/// One row of the process table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub uid: Uid,
    pub user: String,
    pub name: String,
}

impl ProcessRecord {
    pub fn new(pid: Pid, uid: Uid, user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pid,
            uid,
            user: user.into(),
            name: name.into(),
        }
    }

    pub fn from_process<P: ProcessInfo + ?Sized>(process: &P) -> Self {
        Self {
            pid: process.pid(),
            uid: process.uid(),
            user: process.user().to_owned(),
            name: process.name().to_owned(),
        }
    }
}

impl ProcessInfo for ProcessRecord {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn uid(&self) -> Uid {
        self.uid
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn name(&self) -> &str {
        &self.name
    }
}
