mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{
    PixelFormatError, copy_pixel_buffer_to_rgba, copy_rgb_to_rgba,
};
pub use crate::controllers::cli::args::{ExplorerArgs, RenderArgs};
pub use crate::controllers::cli::gesture_script::{
    GestureParseError, GestureStep, parse_gesture_step,
};
pub use crate::controllers::cli::render_command::CliRenderController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::render_frame::{render_frame, render_frame_serial};
pub use crate::core::colour_mapping::factory::palette_factory;
pub use crate::core::colour_mapping::kinds::PaletteKind;
pub use crate::core::colour_mapping::palette::{Palette, PaletteError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, Real};
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{EscapeTime, escape_time};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
pub use crate::core::input::gesture::{Gesture, PanDirection, PointerButton};
pub use crate::core::input::translator::{
    ControlSettings, ControlSettingsError, GestureEffect, GestureTranslator,
};
pub use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, screen_to_complex};
pub use crate::core::viewport::region_math::{ZoomAnchor, panned_region, zoomed_region};
pub use crate::core::viewport::status::{region_text, status_text};
pub use crate::core::viewport::viewport_state::{ViewportError, ViewportSnapshot, ViewportState};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::args::GuiArgs;
#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
