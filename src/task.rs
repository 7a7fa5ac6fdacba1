//! To-do tasks and their identifiers

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// An opaque, unique task identifier.
///
/// Generated at task creation, immutable, and never reused for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u: Uuid = s.parse()?;
        Ok(Self { content: u })
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content.to_hyphenated().to_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let u = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
        Ok(TaskId { content: u })
    }
}

/// A to-do item, due on a concrete calendar day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// The unique identifier of this task
    id: TaskId,

    /// The display name of the task. Guaranteed non-empty by the store's add operation
    name: String,

    /// Whether this task is completed.
    /// The UI hints at a completion toggle (a strikethrough style), but no reachable path
    /// ever sets this to true. The field is kept for data-shape fidelity only.
    completed: bool,

    /// The concrete moment this task is due, resolved at creation time from the selected
    /// day-of-week index. Always fully resolved, never a bare weekday symbol.
    due_date: DateTime<Utc>,

    /// The time this task was created
    creation_date: DateTime<Utc>,
}

impl Task {
    /// Create a brand new, uncompleted Task due at the given moment.
    /// This will pick a new (random) task ID.
    pub fn new(name: String, due_date: DateTime<Utc>, creation_date: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::random(),
            name,
            completed: false,
            due_date,
            creation_date,
        }
    }

    pub fn id(&self) -> &TaskId     { &self.id        }
    pub fn name(&self) -> &str      { &self.name      }
    pub fn completed(&self) -> bool { self.completed  }
    pub fn due_date(&self) -> &DateTime<Utc>      { &self.due_date      }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
}
