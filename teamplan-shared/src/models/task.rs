use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Weekday slot a recurring task repeats on.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepeatDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl RepeatDay {
    /// Two-letter badge label shown next to recurring tasks.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Monday => "Mo",
            Self::Tuesday => "Tu",
            Self::Wednesday => "We",
            Self::Thursday => "Th",
            Self::Friday => "Fr",
            Self::Saturday => "Sa",
            Self::Sunday => "Su",
        }
    }
}

/// A single task inside a task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Whether the task is checked off.
    pub done: bool,
    /// Weekdays the task repeats on; empty for one-off tasks.
    #[serde(default)]
    pub repeat_days: Vec<RepeatDay>,
}

impl Task {
    /// Whether this task repeats on at least one weekday.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        !self.repeat_days.is_empty()
    }
}

/// A named list of tasks belonging to a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskList {
    /// Unique identifier for the list.
    pub id: uuid::Uuid,
    /// List name.
    pub name: String,
    /// Tasks in the list, in display order.
    pub tasks: Vec<Task>,
}

/// Request schema for `POST /teams/{id}/lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskListRequest {
    /// Name for the new list.
    pub name: String,
}

/// Request schema for `POST /lists/{id}/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Title for the new task.
    pub title: String,
    /// Weekdays the task repeats on; empty for a one-off task.
    #[serde(default)]
    pub repeat_days: Vec<RepeatDay>,
}

/// Request schema for `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// New done state for the task.
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    /// Repeat days parse from and render to their lowercase names
    #[test]
    fn test_repeat_day_string_forms() {
        assert_eq!(RepeatDay::Monday.to_string(), "monday");
        assert_eq!(RepeatDay::from_str("sunday"), Ok(RepeatDay::Sunday));
        assert!(RepeatDay::from_str("noday").is_err());
    }

    /// Every repeat day has a distinct badge label
    #[test]
    fn test_repeat_day_short_labels_distinct() {
        let labels: std::collections::HashSet<_> =
            RepeatDay::iter().map(RepeatDay::short_label).collect();
        assert_eq!(labels.len(), 7);
    }

    /// A task with no repeat days is one-off; repeatDays may be omitted entirely
    #[test]
    fn test_task_recurrence() {
        let task: Task = serde_json::from_str(
            r#"{"id":"6f2e1f9e-6e1c-4f6a-9e1d-0a62e8b2b001","title":"Water plants","done":false}"#,
        )
        .expect("task without repeatDays");
        assert!(!task.is_recurring());

        let recurring: Task = serde_json::from_str(
            r#"{"id":"6f2e1f9e-6e1c-4f6a-9e1d-0a62e8b2b002","title":"Standup notes","done":true,"repeatDays":["monday","thursday"]}"#,
        )
        .expect("task with repeatDays");
        assert!(recurring.is_recurring());
        assert_eq!(
            recurring.repeat_days,
            vec![RepeatDay::Monday, RepeatDay::Thursday]
        );
    }
}
