use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const EMPTY_TASKS_PLACEHOLDER: &str = "No tasks added yet.";
pub(crate) const TITLE_PLACEHOLDER: &str = "Describe your task";
pub(crate) const SUBMIT_LABEL: &str = "Add Task";

pub(crate) const STATUS_TITLE_REQUIRED: &str = "Please fill out this field.";

pub(crate) const HELP_STATIC: &str =
    "tab/shift+tab or ←/→ switch views | 1-5 jump | q quit";
pub(crate) const HELP_TASKS: &str =
    "type a title | enter add task | tab/shift+tab switch views | ctrl+c quit";
