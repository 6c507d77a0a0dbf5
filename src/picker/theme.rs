//! Light/dark theme flag and the labels derived from it.

use std::fmt;

/// Visual mode of the widget. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Style class name (`light` / `dark`).
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Toggle button label. It always names the mode a click switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn label_names_the_target_mode() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
    }

    #[test]
    fn dark_flag_maps_to_class_name() {
        assert_eq!(Theme::from_dark_flag(true).to_string(), "dark");
        assert_eq!(Theme::from_dark_flag(false).to_string(), "light");
    }
}
