use crate::core::colour_mapping::kinds::PaletteKind;
use crate::core::colour_mapping::palette::Palette;
use crate::core::data::colour::Colour;

const RAINBOW: [Colour; 10] = [
    Colour::new(0, 0, 0),
    Colour::new(255, 0, 0),
    Colour::new(255, 127, 0),
    Colour::new(255, 255, 0),
    Colour::new(0, 255, 0),
    Colour::new(0, 0, 255),
    Colour::new(75, 0, 130),
    Colour::new(148, 0, 211),
    Colour::new(255, 0, 255),
    Colour::new(255, 255, 255),
];

const FIRE: [Colour; 5] = [
    Colour::new(0, 0, 0),
    Colour::new(255, 0, 0),
    Colour::new(255, 165, 0),
    Colour::new(255, 255, 0),
    Colour::new(255, 255, 255),
];

const BLUE_WHITE: [Colour; 5] = [
    Colour::new(0, 0, 0),
    Colour::new(0, 7, 100),
    Colour::new(32, 107, 203),
    Colour::new(237, 255, 255),
    Colour::new(255, 255, 255),
];

const fn anchors_for(kind: PaletteKind) -> &'static [Colour] {
    match kind {
        PaletteKind::Rainbow => &RAINBOW,
        PaletteKind::Fire => &FIRE,
        PaletteKind::BlueWhite => &BLUE_WHITE,
    }
}

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Palette {
    Palette::from_static(kind.display_name(), anchors_for(kind))
}
