use pullup_core::Vec2;

use crate::arena::RecognizerPhase;

/// One pan callback: cumulative translation and instantaneous velocity, both
/// in the coordinate space of the popup's superview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: RecognizerPhase,
    pub translation: Vec2,
    pub velocity: Vec2,
}

impl PanEvent {
    pub fn began(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: RecognizerPhase::Began,
            translation,
            velocity,
        }
    }

    pub fn changed(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: RecognizerPhase::Changed,
            translation,
            velocity,
        }
    }

    pub fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: RecognizerPhase::Ended,
            translation,
            velocity,
        }
    }

    pub fn cancelled(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: RecognizerPhase::Cancelled,
            translation,
            velocity,
        }
    }
}
