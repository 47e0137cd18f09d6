use pullup_core::{TransitionRole, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionDecision {
    Complete,
    Reverse,
}

/// Per-content tuning for when a released drag completes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionSettings {
    /// Release speed (points/second) above which intent overrides distance.
    pub flick_magnitude: f32,
    /// Fraction the transition must exceed to complete without a flick.
    pub threshold: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            flick_magnitude: 1200.0,
            threshold: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionInputs {
    pub role: TransitionRole,
    /// Whether a dismiss drag is armed; only then do downward flicks count.
    pub dismissing: bool,
    pub velocity: Vec2,
    pub fraction: f32,
    pub settings: CompletionSettings,
}

/// Decide where a released transition goes. Flicks take priority over the
/// fraction threshold.
pub fn decide_completion(inputs: &CompletionInputs) -> CompletionDecision {
    let flick = inputs.velocity.magnitude() > inputs.settings.flick_magnitude;
    let flick_up = flick && inputs.velocity.y < 0.0;
    let flick_down = flick && inputs.velocity.y > 0.0;
    let presenting = inputs.role.is_presenting();

    if (presenting && flick_up) || (inputs.dismissing && flick_down) {
        CompletionDecision::Complete
    } else if (presenting && flick_down) || (inputs.dismissing && flick_up) {
        CompletionDecision::Reverse
    } else if inputs.fraction > inputs.settings.threshold {
        CompletionDecision::Complete
    } else {
        CompletionDecision::Reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(role: TransitionRole, dismissing: bool, vy: f32, fraction: f32) -> CompletionInputs {
        CompletionInputs {
            role,
            dismissing,
            velocity: Vec2::new(0.0, vy),
            fraction,
            settings: CompletionSettings {
                flick_magnitude: 1000.0,
                threshold: 0.5,
            },
        }
    }

    #[test]
    fn forward_flick_completes_regardless_of_fraction() {
        let i = inputs(TransitionRole::Presenting, false, -2000.0, 0.1);
        assert_eq!(decide_completion(&i), CompletionDecision::Complete);

        let i = inputs(TransitionRole::Dismissing, true, 2000.0, 0.0);
        assert_eq!(decide_completion(&i), CompletionDecision::Complete);
    }

    #[test]
    fn backward_flick_reverses_regardless_of_fraction() {
        let i = inputs(TransitionRole::Presenting, false, 2000.0, 0.95);
        assert_eq!(decide_completion(&i), CompletionDecision::Reverse);

        let i = inputs(TransitionRole::Dismissing, true, -2000.0, 0.95);
        assert_eq!(decide_completion(&i), CompletionDecision::Reverse);
    }

    #[test]
    fn slow_release_falls_back_to_threshold() {
        let i = inputs(TransitionRole::Presenting, false, -100.0, 0.6);
        assert_eq!(decide_completion(&i), CompletionDecision::Complete);

        let i = inputs(TransitionRole::Presenting, false, -100.0, 0.4);
        assert_eq!(decide_completion(&i), CompletionDecision::Reverse);
    }

    #[test]
    fn threshold_itself_reverses() {
        let i = inputs(TransitionRole::Dismissing, true, 0.0, 0.5);
        assert_eq!(decide_completion(&i), CompletionDecision::Reverse);
    }

    #[test]
    fn unarmed_dismiss_ignores_flicks() {
        let i = inputs(TransitionRole::Dismissing, false, 3000.0, 0.2);
        assert_eq!(decide_completion(&i), CompletionDecision::Reverse);

        let i = inputs(TransitionRole::Dismissing, false, -3000.0, 0.7);
        assert_eq!(decide_completion(&i), CompletionDecision::Complete);
    }

    #[test]
    fn magnitude_includes_horizontal_component() {
        let mut i = inputs(TransitionRole::Presenting, false, -800.0, 0.0);
        i.velocity.x = 800.0;
        assert_eq!(decide_completion(&i), CompletionDecision::Complete);
    }

    #[test]
    fn decision_is_reproducible() {
        let i = inputs(TransitionRole::Presenting, false, -999.0, 0.51);
        let first = decide_completion(&i);
        for _ in 0..8 {
            assert_eq!(decide_completion(&i), first);
        }
    }
}
