use std::str::FromStr;

/// Browser storage key holding the chosen preference
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Theme shared with every view through the Dioxus context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    /// Whether the operating system prefers a dark color scheme
    pub system_dark: bool,
}

impl ThemeContext {
    pub fn resolved(&self) -> Theme {
        match self.preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if self.system_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }

    /// Value of the `data-theme` attribute on the root element
    pub fn data_theme(&self) -> &'static str {
        match self.resolved() {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Switches to the opposite of what is currently shown
    pub fn toggle(&mut self) {
        self.preference = match self.resolved() {
            Theme::Light => ThemePreference::Dark,
            Theme::Dark => ThemePreference::Light,
        };
    }
}
