use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{0}', expected one of: rainbow, fire, blue-white")]
pub struct UnknownPaletteKind(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Rainbow,
    Fire,
    BlueWhite,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::Fire, Self::BlueWhite];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire gradient",
            Self::BlueWhite => "Blue-white gradient",
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::Rainbow
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PaletteKind {
    type Err = UnknownPaletteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rainbow" => Ok(Self::Rainbow),
            "fire" => Ok(Self::Fire),
            "blue-white" | "bluewhite" => Ok(Self::BlueWhite),
            _ => Err(UnknownPaletteKind(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!("rainbow".parse(), Ok(PaletteKind::Rainbow));
        assert_eq!("Fire".parse(), Ok(PaletteKind::Fire));
        assert_eq!("blue-white".parse(), Ok(PaletteKind::BlueWhite));
        assert_eq!(
            "plasma".parse::<PaletteKind>(),
            Err(UnknownPaletteKind("plasma".to_owned()))
        );
    }
}
