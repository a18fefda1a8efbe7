use clap::Parser;

use crate::controllers::cli::args::ExplorerArgs;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

/// Used when no ceiling is given on the command line, raised to the initial
/// bound when that is higher.
pub const DEFAULT_GUI_ITERATION_CEILING: u32 = 1 << 16;

/// Explore the Mandelbrot set: left click zooms in, right click zooms out,
/// arrow keys pan, the wheel scales the iteration bound and Escape quits.
#[derive(Parser, Debug)]
#[command(name = "gui", version, about, long_about = None)]
pub struct GuiArgs {
    #[command(flatten)]
    pub explorer: ExplorerArgs,
}

impl GuiArgs {
    pub fn to_config(&self) -> Result<MandelbrotConfig, ConfigError> {
        let mut config = self.explorer.to_config()?;

        config
            .controls
            .iteration_ceiling
            .get_or_insert(DEFAULT_GUI_ITERATION_CEILING.max(config.max_iterations));
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_is_applied() {
        let args = GuiArgs::try_parse_from(["gui"]).unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(
            config.controls.iteration_ceiling,
            Some(DEFAULT_GUI_ITERATION_CEILING)
        );
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn explicit_ceiling_wins() {
        let args = GuiArgs::try_parse_from(["gui", "--iteration-ceiling", "512"]).unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(config.controls.iteration_ceiling, Some(512));
    }

    #[test]
    fn default_ceiling_never_sits_below_initial_bound() {
        let args = GuiArgs::try_parse_from(["gui", "-i", "100000"]).unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(config.controls.iteration_ceiling, Some(100_000));
        assert_eq!(config.max_iterations, 100_000);
    }

    #[test]
    fn explicit_ceiling_below_initial_bound_is_rejected() {
        let args = GuiArgs::try_parse_from([
            "gui",
            "-i",
            "100000",
            "--iteration-ceiling",
            "65536",
        ])
        .unwrap();

        assert_eq!(
            args.to_config(),
            Err(ConfigError::IterationsAboveCeiling {
                max_iterations: 100_000,
                ceiling: 65_536
            })
        );
    }
}
