//! Contracts the transition controller consumes.
//!
//! The popup host owns the container, the presentation controller and the
//! transition controllers. Collaborators are shared through `Rc<RefCell<_>>`
//! so animator blocks can reach them after the gesture callback returns.

use std::cell::RefCell;
use std::rc::Rc;

use pullup_core::{
    AnimationSpec, InterruptibleAnimator, PresentationState, Rect, StatusBarStyle, TransitionRole,
    Vec2,
};

use crate::arena::RecognizerId;
use crate::completion::CompletionSettings;
use crate::travel::TravelMetrics;

pub type Shared<T> = Rc<RefCell<T>>;

/// Handed to the presentation controller when an interactive transition starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionContext {
    pub role: TransitionRole,
}

/// Reported to the observer on every drag update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractiveUpdate {
    pub role: TransitionRole,
    pub state: PresentationState,
    pub progress: f32,
    /// Absolute y of the dragged content edge.
    pub location: f32,
}

/// Content that can scroll underneath the popup drag.
pub trait ScrollSurface {
    fn content_offset(&self) -> Vec2;
    fn set_content_offset(&mut self, offset: Vec2);
}

/// The container view controller hosting the popup bar and content.
pub trait PopupContainer {
    fn travel_metrics(&self) -> TravelMetrics;
    fn content_frame(&self) -> Rect;
    fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings::default()
    }
    /// `Some` when the popup content is itself a scroll view.
    fn content_scroll_view(&self) -> Option<Shared<dyn ScrollSurface>>;
    fn set_close_button_alpha(&mut self, alpha: f32);
    /// Return the close button to its resting (chevron) look.
    fn set_close_button_stationary(&mut self);
    /// Re-query the status bar style; `None` means the change rides along
    /// with an animator that is about to run.
    fn set_needs_status_bar_appearance_update(&mut self, animation: Option<AnimationSpec>);
}

pub trait PresentationController {
    fn interruptible_animator(
        &mut self,
        context: &TransitionContext,
    ) -> Option<Shared<dyn InterruptibleAnimator>>;
    fn set_popup_bar_alpha(&mut self, alpha: f32);
    /// Finish a released dismissal on its own timeline.
    fn continue_dismissal(&mut self, timing: Option<AnimationSpec>, duration_factor: f32);
}

/// Host callbacks. Every method has an empty default.
pub trait PopupObserver {
    fn present_interactive(&self) {}
    fn dismiss_interactive(&self) {}
    fn state_changed(&self, _state: PresentationState, _previous: PresentationState) {}
    fn will_open(&self) {}
    fn will_close(&self) {}
    fn interactive_presentation(&self, _update: &InteractiveUpdate) {}
    /// Veto a pan before it starts. `None` leaves the decision to the filter.
    fn pan_gesture_should_begin(&self, _state: PresentationState) -> Option<bool> {
        None
    }
}

/// The popup controller that owns this transition.
pub trait PopupHost {
    fn presentation_state(&self) -> PresentationState;
    fn set_presentation_state(&mut self, state: PresentationState);
    fn popup_preferred_status_bar_style(&self) -> StatusBarStyle;
    fn container_preferred_status_bar_style(&self) -> StatusBarStyle;
    fn set_popup_status_bar_style(&mut self, style: StatusBarStyle);
    fn container(&self) -> Option<Shared<dyn PopupContainer>>;
    fn presentation_controller(&self) -> Option<Shared<dyn PresentationController>>;
    fn observer(&self) -> Option<Rc<dyn PopupObserver>>;
    fn pan_recognizer_attached(&mut self, _role: TransitionRole, _id: RecognizerId) {}
}
