//! ProgressBar Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Rgba, Styled, Window, div, px, relative};

use crate::theme::Theme;

/// Horizontal percentage bar
#[derive(IntoElement)]
pub struct ProgressBar {
    percent: f32,
    color: Option<Rgba>,
    height: f32,
}

impl ProgressBar {
    /// Percentages outside `[0, 100]` are clamped
    pub fn new(percent: f32) -> Self {
        Self {
            percent: clamp_percent(percent),
            color: None,
            height: 3.0,
        }
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        div()
            .w_full()
            .h(px(self.height))
            .bg(palette.border)
            .child(
                div()
                    .h_full()
                    .w(relative(self.percent / 100.0))
                    .bg(self.color.unwrap_or(palette.accent)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(ProgressBar::new(140.0).percent, 100.0);
        assert_eq!(ProgressBar::new(-3.0).percent, 0.0);
        assert_eq!(ProgressBar::new(f32::NAN).percent, 0.0);
        assert_eq!(ProgressBar::new(42.5).percent, 42.5);
    }
}
