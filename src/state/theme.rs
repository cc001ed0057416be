#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Light/dark visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the durable store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What the toggle control offers while this theme is active.
    #[must_use]
    pub fn affordance(self) -> Affordance {
        match self {
            Self::Light => Affordance { icon_class: "bx bx-moon", label: "Switch to dark mode" },
            Self::Dark => Affordance { icon_class: "bx bx-sun", label: "Switch to light mode" },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored text did not name a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Icon and accessible text rendered on the toggle control.
///
/// `label` is used for both `aria-label` and `title`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordance {
    pub icon_class: &'static str,
    pub label: &'static str,
}

impl Affordance {
    /// Inner HTML of the control button.
    #[must_use]
    pub fn icon_html(&self) -> String {
        format!("<i class=\"{}\"></i>", self.icon_class)
    }
}
