//! Drag distance normalization.
//!
//! Translation is divided by the signed travel so one formula covers both
//! directions: presenting drags up (negative translation over negative
//! travel), dismissing drags down (positive over positive).

use pullup_core::{EdgeInsets, PresentationState, PresentationStyle, Size};

/// Geometry the container reports for the popup chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TravelMetrics {
    pub container: Size,
    /// Intrinsic size of the popup content; used for `PresentationStyle::Custom`.
    pub content: Size,
    pub bar_height: f32,
    pub bottom_bar_height: f32,
    pub bottom_bar_hidden: bool,
    pub insets: EdgeInsets,
    pub presentation_style: PresentationStyle,
}

/// Signed distance the popup can be dragged: positive when the popup is open
/// or closing, negative otherwise.
pub fn available_travel(metrics: &TravelMetrics, state: PresentationState) -> f32 {
    let height = match metrics.presentation_style {
        PresentationStyle::Custom => metrics.content.height,
        _ => metrics.container.height,
    };
    let bottom_bar = if metrics.bottom_bar_hidden {
        0.0
    } else {
        metrics.bottom_bar_height
    };
    let travel = height - metrics.bar_height - bottom_bar - metrics.insets.bottom;

    if state.is_dismiss_oriented() {
        travel
    } else {
        -travel
    }
}

/// Unclamped ratio of translation to travel. Degenerate travel reads as no progress.
pub fn raw_progress(translation_y: f32, travel: f32) -> f32 {
    let p = translation_y / travel;
    if p.is_finite() { p } else { 0.0 }
}

/// Progress in `[0, 1]`.
pub fn progress_for(translation_y: f32, travel: f32) -> f32 {
    raw_progress(translation_y, travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> TravelMetrics {
        TravelMetrics {
            container: Size {
                width: 390.0,
                height: 844.0,
            },
            content: Size {
                width: 390.0,
                height: 500.0,
            },
            bar_height: 64.0,
            bottom_bar_height: 49.0,
            bottom_bar_hidden: false,
            insets: EdgeInsets {
                bottom: 34.0,
                ..Default::default()
            },
            presentation_style: PresentationStyle::Deck,
        }
    }

    #[test]
    fn subtracts_chrome_from_container() {
        assert_eq!(available_travel(&metrics(), PresentationState::Open), 697.0);
    }

    #[test]
    fn hidden_bottom_bar_is_not_subtracted() {
        let m = TravelMetrics {
            bottom_bar_hidden: true,
            ..metrics()
        };
        assert_eq!(available_travel(&m, PresentationState::Closing), 746.0);
    }

    #[test]
    fn custom_style_uses_content_height() {
        let m = TravelMetrics {
            presentation_style: PresentationStyle::Custom,
            ..metrics()
        };
        assert_eq!(available_travel(&m, PresentationState::Open), 353.0);
    }

    #[test]
    fn present_oriented_states_are_negative() {
        assert_eq!(available_travel(&metrics(), PresentationState::Closed), -697.0);
        assert_eq!(available_travel(&metrics(), PresentationState::Opening), -697.0);
    }

    #[test]
    fn one_formula_serves_both_directions() {
        let m = metrics();
        let up = available_travel(&m, PresentationState::Closed);
        let down = available_travel(&m, PresentationState::Open);
        assert!((progress_for(-348.5, up) - 0.5).abs() < 1e-6);
        assert!((progress_for(348.5, down) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_is_always_clamped() {
        let travels = [-700.0f32, -1.0, 0.0, 1.0, 700.0];
        let translations = [-5000.0f32, -350.0, -0.5, 0.0, 0.5, 350.0, 5000.0];
        for &t in &travels {
            for &y in &translations {
                let p = progress_for(y, t);
                assert!((0.0..=1.0).contains(&p), "{y} / {t} -> {p}");
            }
        }
    }

    #[test]
    fn zero_travel_reads_as_no_progress() {
        assert_eq!(progress_for(120.0, 0.0), 0.0);
        assert_eq!(raw_progress(0.0, 0.0), 0.0);
    }
}
