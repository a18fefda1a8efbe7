pub mod algorithm;
pub mod mandelbrot_config;
