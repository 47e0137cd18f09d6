//! # Pullup core
//!
//! Shared vocabulary for the slide-up popup transition:
//!
//! - `Vec2`, `Size`, `Rect`, `EdgeInsets`: points and sizes in logical points,
//!   y growing downward.
//! - `pan_direction`: classifies a pan velocity into `Up`/`Down`/`Left`/`Right`.
//! - `PresentationState`, `TransitionRole`, `StatusBarStyle`,
//!   `PresentationStyle`: the state the popup host owns.
//! - `InterruptibleAnimator`: the contract the transition controller scrubs,
//!   with `FractionAnimator` as a clock-driven implementation.
//! - `TransitionError`: missing-context conditions.
//!
//! ```rust
//! use pullup_core::*;
//!
//! let mut animator = FractionAnimator::new(AnimationSpec::default());
//! animator.set_fraction_complete(0.4);
//! animator.set_reversed(true);
//! animator.continue_animation(None, 0.0);
//! assert_eq!(animator.state(), AnimatorState::Finished(AnimatingPosition::Start));
//! assert_eq!(pan_direction(Vec2::new(0.0, -250.0)), Some(PanDirection::Up));
//! ```

pub mod animation;
pub mod animator;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod state;

pub use animation::*;
pub use animator::*;
pub use direction::*;
pub use error::*;
pub use geometry::*;
pub use state::*;
