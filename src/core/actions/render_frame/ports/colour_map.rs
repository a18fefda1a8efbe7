use crate::core::data::colour::Colour;

/// Turns a normalised escape position in `[0, 1]` into a colour.
pub trait ColourMap {
    fn map(&self, position: f64) -> Colour;

    fn display_name(&self) -> &str;
}
