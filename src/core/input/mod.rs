pub mod gesture;
pub mod translator;
