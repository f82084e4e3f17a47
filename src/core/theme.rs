#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme from the stored preference; absent or unknown values fall back
    /// to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle: the button offers the other theme.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    pub fn icon_rotation(self) -> &'static str {
        match self {
            Self::Light => "rotate(0deg)",
            Self::Dark => "rotate(180deg)",
        }
    }
}
