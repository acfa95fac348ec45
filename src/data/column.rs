use super::ProcessRecord;
use crate::model::Value;

/// The fixed column set of the process table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Pid,
    Uid,
    User,
    Name,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Pid, Column::Uid, Column::User, Column::Name];
    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Column::Pid => 0,
            Column::Uid => 1,
            Column::User => 2,
            Column::Name => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Pid => "PID",
            Column::Uid => "UID",
            Column::User => "User",
            Column::Name => "Name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pid" => Some(Column::Pid),
            "uid" => Some(Column::Uid),
            "user" => Some(Column::User),
            "name" => Some(Column::Name),
            _ => None,
        }
    }

    pub(crate) fn value_of(self, record: &ProcessRecord) -> Value {
        match self {
            Column::Pid => Value::from(record.pid),
            Column::Uid => Value::from(record.uid),
            Column::User => Value::from(record.user.as_str()),
            Column::Name => Value::from(record.name.as_str()),
        }
    }
}
