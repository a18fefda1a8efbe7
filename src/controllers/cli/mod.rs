pub mod args;
pub mod gesture_script;
pub mod render_command;
