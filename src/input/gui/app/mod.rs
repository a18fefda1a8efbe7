pub mod gesture_input;
pub mod gui_app;
pub mod ports;
pub mod state;
