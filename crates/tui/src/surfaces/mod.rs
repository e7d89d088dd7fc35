//! The two overlay presentations of a search session.

pub mod palette;
pub mod panel;

/// Which overlay the search hotkey summons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    /// Compact quick-launch palette: input plus a flat ranked list.
    #[default]
    Palette,
    /// Fuller panel with facet tabs and recent/popular sections.
    Panel,
}

impl SurfaceKind {
    /// Names accepted in config and on the command line.
    #[must_use]
    pub const fn names() -> [&'static str; 2] {
        ["palette", "panel"]
    }

    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "palette" => Some(Self::Palette),
            "panel" => Some(Self::Panel),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Panel => "panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_accepts_both_surfaces_case_insensitively() {
        assert_eq!(SurfaceKind::by_name("palette"), Some(SurfaceKind::Palette));
        assert_eq!(SurfaceKind::by_name("Panel"), Some(SurfaceKind::Panel));
        assert_eq!(SurfaceKind::by_name("drawer"), None);
    }

    #[test]
    fn names_round_trip() {
        for name in SurfaceKind::names() {
            assert_eq!(SurfaceKind::by_name(name).map(SurfaceKind::as_str), Some(name));
        }
    }
}
