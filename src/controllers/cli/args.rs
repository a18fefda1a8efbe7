use std::path::PathBuf;

use clap::{Args, Parser};

use crate::controllers::cli::gesture_script::{GestureStep, parse_gesture_step};
use crate::core::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ConfigError, DEFAULT_HEIGHT, DEFAULT_WIDTH, MandelbrotConfig,
};
use crate::core::input::translator::{
    ControlSettings, DEFAULT_ITERATION_SCALE_FACTOR, DEFAULT_PAN_FRACTION, DEFAULT_ZOOM_FACTOR,
};
use crate::core::viewport::region_math::ZoomAnchor;
use crate::core::viewport::viewport_state::DEFAULT_MAX_ITERATIONS;

/// Region bounds as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
}

impl RegionBounds {
    fn apply_to(self, config: MandelbrotConfig) -> Result<MandelbrotConfig, ConfigError> {
        config.with_region(self.min_re, self.max_re, self.min_im, self.max_im)
    }
}

fn parse_region(value: &str) -> Result<RegionBounds, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid number in region '{value}': {err}"))?;

    match parts.as_slice() {
        [min_re, max_re, min_im, max_im] => Ok(RegionBounds {
            min_re: *min_re,
            max_re: *max_re,
            min_im: *min_im,
            max_im: *max_im,
        }),
        _ => Err(format!(
            "expected MIN_RE,MAX_RE,MIN_IM,MAX_IM but got {} values",
            parts.len()
        )),
    }
}

/// Startup options shared by the file renderer and the interactive explorer.
#[derive(Args, Debug, Clone)]
pub struct ExplorerArgs {
    /// Render width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Render height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Initial iteration bound.
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Initial region as MIN_RE,MAX_RE,MIN_IM,MAX_IM.
    #[arg(long, value_parser = parse_region, allow_hyphen_values = true)]
    pub region: Option<RegionBounds>,

    /// Magnification applied by one zoom-in press.
    #[arg(long, default_value_t = DEFAULT_ZOOM_FACTOR)]
    pub zoom_factor: f64,

    /// Multiplier applied to the iteration bound by one wheel step.
    #[arg(long, default_value_t = DEFAULT_ITERATION_SCALE_FACTOR)]
    pub scale_factor: f64,

    /// Share of the visible extent moved by one pan step.
    #[arg(long, default_value_t = DEFAULT_PAN_FRACTION)]
    pub pan_fraction: f64,

    /// Upper limit for the iteration bound after wheel steps.
    #[arg(long)]
    pub iteration_ceiling: Option<u32>,

    /// Colour palette: rainbow, fire or blue-white.
    #[arg(short, long, default_value = "rainbow")]
    pub palette: PaletteKind,

    /// Zoom placement: recenter or cursor.
    #[arg(long, default_value = "recenter")]
    pub anchor: ZoomAnchor,
}

impl ExplorerArgs {
    /// Builds and validates the startup configuration.
    pub fn to_config(&self) -> Result<MandelbrotConfig, ConfigError> {
        let mut config = MandelbrotConfig {
            max_iterations: self.max_iterations,
            palette_kind: self.palette,
            controls: ControlSettings {
                zoom_factor: self.zoom_factor,
                iteration_scale_factor: self.scale_factor,
                pan_fraction: self.pan_fraction,
                zoom_anchor: self.anchor,
                iteration_ceiling: self.iteration_ceiling,
            },
            width: self.width,
            height: self.height,
            ..MandelbrotConfig::default()
        };

        if let Some(bounds) = self.region {
            config = bounds.apply_to(config)?;
        }

        config.validate()?;

        Ok(config)
    }
}

/// Render one Mandelbrot frame to a PPM file, optionally after a scripted
/// sequence of gestures.
#[derive(Parser, Debug)]
#[command(name = "mandelzoom", version, about, long_about = None)]
pub struct RenderArgs {
    #[command(flatten)]
    pub explorer: ExplorerArgs,

    /// Output file path.
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,

    /// Gesture applied before rendering, in order. Repeatable.
    /// One of zoom-in:X,Y  zoom-out:X,Y  pan:left|right|up|down  wheel:up|down
    #[arg(short, long = "gesture", value_parser = parse_gesture_step)]
    pub gestures: Vec<GestureStep>,
}
