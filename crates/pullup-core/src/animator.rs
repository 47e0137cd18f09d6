//! # Interruptible animators
//!
//! The transition controller never animates views itself. It scrubs an
//! animator owned by the presentation controller through
//! [`InterruptibleAnimator`], then either lets it run to the end or reverses
//! it back to the start.
//!
//! [`FractionAnimator`] is a small implementation driven by a [`Clock`]; the
//! platform layer can use it directly or wrap its own animation system.

use std::rc::Rc;

use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::animation::{AnimationSpec, Clock, Easing, Interpolate, SystemClock};

/// Where an animator came to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatingPosition {
    Start,
    End,
    Current,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    /// Created, never scrubbed or run.
    Inactive,
    /// Paused at an explicit fraction.
    Scrubbing,
    Running,
    Finished(AnimatingPosition),
}

pub type AnimationBlock = Box<dyn FnOnce()>;
pub type CompletionBlock = Box<dyn FnOnce(AnimatingPosition)>;

/// Animator whose progress can be set directly and later resumed.
///
/// Animation blocks describe the target state; they run when the animator is
/// continued. Completion blocks run once it comes to rest and must not reach
/// back into the animator.
pub trait InterruptibleAnimator {
    fn state(&self) -> AnimatorState;
    fn fraction_complete(&self) -> f32;
    fn set_fraction_complete(&mut self, fraction: f32);
    fn is_reversed(&self) -> bool;
    fn set_reversed(&mut self, reversed: bool);
    fn add_animations(&mut self, animation: AnimationBlock);
    fn add_completion(&mut self, completion: CompletionBlock);
    /// Resume toward the end (or the start when reversed). The remaining
    /// duration is the spec's duration times `duration_factor`, scaled by the
    /// distance left to travel; a zero result finishes immediately.
    fn continue_animation(&mut self, timing: Option<AnimationSpec>, duration_factor: f32);
}

struct Run {
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    delay: Duration,
    easing: Easing,
}

pub struct FractionAnimator {
    spec: AnimationSpec,
    clock: Rc<dyn Clock>,
    fraction: f32,
    reversed: bool,
    state: AnimatorState,
    run: Option<Run>,
    animations: SmallVec<[AnimationBlock; 4]>,
    completions: SmallVec<[CompletionBlock; 2]>,
}

impl FractionAnimator {
    pub fn new(spec: AnimationSpec) -> Self {
        Self::with_clock(spec, Rc::new(SystemClock))
    }

    pub fn with_clock(spec: AnimationSpec, clock: Rc<dyn Clock>) -> Self {
        Self {
            spec,
            clock,
            fraction: 0.0,
            reversed: false,
            state: AnimatorState::Inactive,
            run: None,
            animations: SmallVec::new(),
            completions: SmallVec::new(),
        }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Advance a running animation; returns true while still running.
    pub fn tick(&mut self) -> bool {
        let Some(run) = &self.run else {
            return false;
        };
        let elapsed = self.clock.now().saturating_duration_since(run.start);
        if elapsed < run.delay {
            return true;
        }
        let t = elapsed - run.delay;
        if t >= run.duration {
            self.finish();
            return false;
        }
        let eased = run.easing.interpolate(t.as_secs_f32() / run.duration.as_secs_f32());
        self.fraction = run.from.interpolate(&run.to, eased);
        true
    }

    fn resting_position(&self) -> AnimatingPosition {
        if self.reversed {
            AnimatingPosition::Start
        } else {
            AnimatingPosition::End
        }
    }

    fn finish(&mut self) {
        self.run = None;
        let position = self.resting_position();
        self.fraction = match position {
            AnimatingPosition::Start => 0.0,
            _ => 1.0,
        };
        self.state = AnimatorState::Finished(position);
        log::debug!("animator finished at {position:?}");
        for completion in std::mem::take(&mut self.completions) {
            completion(position);
        }
    }
}

impl InterruptibleAnimator for FractionAnimator {
    fn state(&self) -> AnimatorState {
        self.state
    }

    fn fraction_complete(&self) -> f32 {
        self.fraction
    }

    fn set_fraction_complete(&mut self, fraction: f32) {
        if matches!(self.state, AnimatorState::Finished(_)) {
            return;
        }
        // Scrubbing interrupts a running animation.
        self.run = None;
        self.fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.state = AnimatorState::Scrubbing;
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }

    fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    fn add_animations(&mut self, animation: AnimationBlock) {
        self.animations.push(animation);
    }

    fn add_completion(&mut self, completion: CompletionBlock) {
        self.completions.push(completion);
    }

    fn continue_animation(&mut self, timing: Option<AnimationSpec>, duration_factor: f32) {
        if matches!(self.state, AnimatorState::Finished(_)) {
            return;
        }
        for animation in std::mem::take(&mut self.animations) {
            animation();
        }

        let spec = timing.unwrap_or(self.spec);
        let to = if self.reversed { 0.0 } else { 1.0 };
        let remaining = (to - self.fraction).abs();
        let duration = spec.scaled(duration_factor * remaining).duration;

        if duration.is_zero() {
            self.finish();
            return;
        }
        self.run = Some(Run {
            start: self.clock.now(),
            from: self.fraction,
            to,
            duration,
            delay: spec.delay,
            easing: spec.easing,
        });
        self.state = AnimatorState::Running;
    }
}
