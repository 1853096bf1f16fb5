pub mod forms;
pub mod hooks;
pub mod ui;
