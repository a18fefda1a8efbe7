pub mod region_math;
pub mod status;
pub mod viewport_state;
