//! Theme - Colors, Typography and the Active Theme Global

pub mod colors;
pub mod typography;

use gpui::{App, Global, Window};
use gpui_component::ThemeMode;
use serde::{Deserialize, Serialize};

pub use colors::Palette;
pub use typography::Typography;

/// Theme preference as written in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl From<ThemePreference> for ThemeMode {
    fn from(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        }
    }
}

/// Active theme, installed as a GPUI global
#[derive(Debug, Clone)]
pub struct Theme {
    mode: ThemeMode,
    palette: Palette,
}

impl Global for Theme {}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: Self::palette_for(mode),
        }
    }

    fn palette_for(mode: ThemeMode) -> Palette {
        if mode.is_dark() {
            Palette::dark()
        } else {
            Palette::light()
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.palette = Self::palette_for(mode);
    }

    /// Install the theme global and align gpui-component widgets with it
    pub fn init(mode: ThemeMode, cx: &mut App) {
        cx.set_global(Self::new(mode));
        gpui_component::Theme::change(mode, None, cx);
    }

    /// Palette of the active theme; light if none was installed
    pub fn palette_of(cx: &App) -> Palette {
        cx.try_global::<Theme>()
            .map(|theme| theme.palette)
            .unwrap_or_else(Palette::light)
    }

    /// Flip light/dark and redraw the window
    pub fn toggle(window: &mut Window, cx: &mut App) {
        let next = if Self::mode_of(cx).is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        cx.set_global(Self::new(next));
        gpui_component::Theme::change(next, Some(window), cx);
        tracing::debug!(dark = next.is_dark(), "Theme toggled");
    }

    fn mode_of(cx: &App) -> ThemeMode {
        cx.try_global::<Theme>()
            .map(|theme| theme.mode)
            .unwrap_or(ThemeMode::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_mode_swaps_palette() {
        let mut theme = Theme::new(ThemeMode::Light);
        assert_eq!(*theme.palette(), Palette::light());
        theme.set_mode(ThemeMode::Dark);
        assert_eq!(*theme.palette(), Palette::dark());
        assert!(theme.mode().is_dark());
    }

    #[test]
    fn test_preference_maps_to_mode() {
        assert!(ThemeMode::from(ThemePreference::Dark).is_dark());
        assert!(!ThemeMode::from(ThemePreference::Light).is_dark());
    }
}
