//! # Interactive popup transitions
//!
//! Turns pan gestures on a slide-up popup into an interactive present or
//! dismiss. The pieces, leaf to root:
//!
//! - [`travel`]: normalizes raw translation into `0..=1` progress.
//! - [`completion`]: decides whether a released drag completes or reverses.
//! - [`admission`]: decides whether a pan may start at all.
//! - [`controller`]: the gesture state machine tying them to the host.
//!
//! Everything the controller touches outside itself (popup host, container,
//! presentation controller, animator, observer) is a trait in [`host`], so the
//! platform layer supplies the real views.
//!
//! ```rust,ignore
//! let mut arena = GestureArena::new();
//! let mut bar = InteractiveTransitionController::attach(
//!     &host,
//!     &mut arena,
//!     TransitionRole::Presenting,
//!     TransitionConfig::default(),
//! );
//!
//! if bar.should_begin(velocity) {
//!     bar.handle_pan(&PanEvent::began(Vec2::ZERO, velocity));
//!     bar.start_interactive_transition(&TransitionContext {
//!         role: TransitionRole::Presenting,
//!     });
//! }
//! ```

pub mod admission;
pub mod arena;
pub mod completion;
pub mod config;
pub mod controller;
pub mod gesture;
pub mod host;
pub mod travel;

pub use admission::*;
pub use arena::*;
pub use completion::*;
pub use config::*;
pub use controller::*;
pub use gesture::*;
pub use host::*;
pub use travel::*;

pub use pullup_core;
