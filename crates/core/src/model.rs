use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A task as reported by the LifeOS backend.
///
/// Only `title` originates from the client; `difficulty` and `points` are
/// assigned server-side. `id` and `completed` are carried when the backend
/// sends them but nothing in the client acts on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub difficulty: String,
    pub points: Number,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, difficulty: impl Into<String>, points: u64) -> Self {
        Self {
            id: None,
            title: title.into(),
            difficulty: difficulty.into(),
            points: Number::from(points),
            completed: false,
        }
    }
}

/// Renders the list row form: `title (difficulty) - points pts`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} pts",
            self.title, self.difficulty, self.points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_matches_row_format() {
        let task = Task::new("Write report", "hard", 20);
        assert_eq!(task.to_string(), "Write report (hard) - 20 pts");
    }

    #[test]
    fn deserializes_backend_record_with_extra_fields() {
        let raw = r#"{"id":3,"title":"Stretch","difficulty":"easy","completed":false,"points":5,"owner":"me"}"#;
        let task: Task = serde_json::from_str(raw).expect("task");

        assert_eq!(task.id, Some(3));
        assert_eq!(task.title, "Stretch");
        assert_eq!(task.to_string(), "Stretch (easy) - 5 pts");
    }

    #[test]
    fn fractional_points_render_like_json() {
        let raw = r#"{"title":"Nap","difficulty":"easy","points":2.5}"#;
        let task: Task = serde_json::from_str(raw).expect("task");

        assert!(!task.completed);
        assert_eq!(task.to_string(), "Nap (easy) - 2.5 pts");
    }

    #[test]
    fn missing_points_is_rejected() {
        let raw = r#"{"title":"Nap","difficulty":"easy"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }
}
