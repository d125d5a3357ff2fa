//! Colors - Light and Dark Palettes

use gpui::{Rgba, rgb, rgba};

/// Color palette for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Surfaces
    /// Window background
    pub app_bg: Rgba,
    /// Cards, tables, modals
    pub surface: Rgba,
    /// Alternate rows, filled cards
    pub surface_alt: Rgba,
    /// Row and ghost hover
    pub surface_hover: Rgba,
    /// Header background
    pub header_bg: Rgba,
    pub header_text: Rgba,

    // Text
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_muted: Rgba,
    /// Text on accent/danger fills
    pub text_inverse: Rgba,

    // Borders
    pub border: Rgba,
    pub border_focus: Rgba,

    // Actions
    pub accent: Rgba,
    pub accent_hover: Rgba,
    pub accent_text: Rgba,
    pub secondary: Rgba,
    pub secondary_hover: Rgba,
    pub danger_hover: Rgba,

    // Status
    pub success: Rgba,
    pub warning: Rgba,
    pub danger: Rgba,
    pub info: Rgba,

    // Overlays
    pub backdrop: Rgba,
    pub tooltip_bg: Rgba,
    pub tooltip_text: Rgba,
}

impl Palette {
    /// Default light palette
    pub fn light() -> Self {
        Self {
            app_bg: rgb(0xf5f5f5),
            surface: rgb(0xffffff),
            surface_alt: rgb(0xf9fafb),
            surface_hover: rgb(0xf3f4f6),
            header_bg: rgb(0x2cb3b8),
            header_text: rgb(0xffffff),

            text_primary: rgb(0x1f2937),
            text_secondary: rgb(0x6b7280),
            text_muted: rgb(0x9ca3af),
            text_inverse: rgb(0xffffff),

            border: rgb(0xe5e7eb),
            border_focus: rgb(0x3b82f6),

            accent: rgb(0x3b82f6),
            accent_hover: rgb(0x2563eb),
            accent_text: rgb(0xffffff),
            secondary: rgb(0xe5e7eb),
            secondary_hover: rgb(0xd1d5db),
            danger_hover: rgb(0xdc2626),

            success: rgb(0x22c55e),
            warning: rgb(0xf59e0b),
            danger: rgb(0xef4444),
            info: rgb(0x3b82f6),

            backdrop: rgba(0x00000088),
            tooltip_bg: rgb(0x1f2937),
            tooltip_text: rgb(0xf9fafb),
        }
    }

    /// Default dark palette
    pub fn dark() -> Self {
        Self {
            app_bg: rgb(0x111827),
            surface: rgb(0x1f2937),
            surface_alt: rgb(0x1a2332),
            surface_hover: rgb(0x374151),
            header_bg: rgb(0x0f766e),
            header_text: rgb(0xf9fafb),

            text_primary: rgb(0xf9fafb),
            text_secondary: rgb(0xd1d5db),
            text_muted: rgb(0x9ca3af),
            text_inverse: rgb(0xffffff),

            border: rgb(0x374151),
            border_focus: rgb(0x60a5fa),

            accent: rgb(0x60a5fa),
            accent_hover: rgb(0x3b82f6),
            accent_text: rgb(0x0b1220),
            secondary: rgb(0x374151),
            secondary_hover: rgb(0x4b5563),
            danger_hover: rgb(0xb91c1c),

            success: rgb(0x4ade80),
            warning: rgb(0xfbbf24),
            danger: rgb(0xf87171),
            info: rgb(0x60a5fa),

            backdrop: rgba(0x000000aa),
            tooltip_bg: rgb(0xf9fafb),
            tooltip_text: rgb(0x111827),
        }
    }
}

/// Apply an alpha multiplier to a color
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba {
        a: (color.a * alpha).clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_scales() {
        let half = with_alpha(rgb(0xffffff), 0.5);
        assert!((half.a - 0.5).abs() < 1e-6);
        assert_eq!(half.r, 1.0);
    }

    #[test]
    fn test_palettes_differ_in_surface() {
        assert_ne!(Palette::light().surface, Palette::dark().surface);
    }
}
