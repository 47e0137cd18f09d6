use pullup_core::{AnimationSpec, Easing};
use web_time::Duration;

/// Tuning shared by the presenting and dismissing controllers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionConfig {
    /// Share of the presenting travel over which the popup bar fades out;
    /// the close button fades in over the rest.
    pub bar_fade_span: f32,
    /// Duration factor handed to the presentation controller when a released
    /// dismiss continues on its own.
    pub dismiss_duration_factor: f32,
    /// Implicit animation for status bar updates while dragging.
    pub status_bar_animation: AnimationSpec,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            bar_fade_span: 0.30,
            dismiss_duration_factor: 0.5,
            status_bar_animation: AnimationSpec::tween(Duration::from_millis(250), Easing::EaseOut),
        }
    }
}

impl TransitionConfig {
    /// Popup bar alpha at `progress`: 1 at rest, 0 once the fade span is covered.
    pub fn bar_alpha(&self, progress: f32) -> f32 {
        if self.bar_fade_span <= 0.0 {
            return 0.0;
        }
        ((self.bar_fade_span - progress) / self.bar_fade_span).clamp(0.0, 1.0)
    }

    /// Close button alpha at `progress`: 0 until the fade span, 1 at the end.
    pub fn close_button_alpha(&self, progress: f32) -> f32 {
        let rest = 1.0 - self.bar_fade_span;
        if rest <= 0.0 {
            return 1.0;
        }
        ((progress - self.bar_fade_span) / rest).clamp(0.0, 1.0)
    }
}
