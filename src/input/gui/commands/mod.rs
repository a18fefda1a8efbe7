pub mod args;
pub mod ports;
pub mod run_gui;
