//! Which pans may start, and which other recognizers may run beside them.

use pullup_core::{PanDirection, PresentationState, TransitionRole};

use crate::arena::{GestureArena, RecognizerId, ViewTraits};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdmissionInput {
    pub state: PresentationState,
    pub direction: Option<PanDirection>,
    pub role: TransitionRole,
    pub content_scrollable: bool,
    /// Answer of the host's pan policy callback; `None` when it has no opinion.
    pub policy: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Dragging a closed popup further down.
    ClosedMovingDown,
    /// Dragging an open popup further up.
    OpenMovingUp,
    Horizontal,
    RefusedByPolicy,
    PresentRequiresUp,
    DismissRequiresDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Accept,
    Reject(RejectReason),
}

impl Admission {
    pub fn is_accepted(self) -> bool {
        self == Admission::Accept
    }
}

pub fn admit_pan(input: &AdmissionInput) -> Admission {
    use PanDirection::*;

    let direction = input.direction;
    if input.state == PresentationState::Closed && direction == Some(Down) {
        return Admission::Reject(RejectReason::ClosedMovingDown);
    }
    if input.state == PresentationState::Open && direction == Some(Up) {
        return Admission::Reject(RejectReason::OpenMovingUp);
    }
    if direction.is_some_and(PanDirection::is_horizontal) {
        return Admission::Reject(RejectReason::Horizontal);
    }
    if input.policy == Some(false) {
        return Admission::Reject(RejectReason::RefusedByPolicy);
    }
    match input.role {
        TransitionRole::Presenting if direction != Some(Up) => {
            Admission::Reject(RejectReason::PresentRequiresUp)
        }
        TransitionRole::Dismissing if !input.content_scrollable && direction != Some(Down) => {
            Admission::Reject(RejectReason::DismissRequiresDown)
        }
        _ => Admission::Accept,
    }
}

/// The popup pan never blocks another recognizer, but overlay-shadow
/// recognizers are failed outright so the pan wins.
pub fn recognize_simultaneously(arena: &mut GestureArena, other: RecognizerId) -> bool {
    if arena
        .traits(other)
        .is_some_and(|t| t.contains(ViewTraits::OVERLAY_SHADOW))
    {
        log::debug!("failing overlay shadow recognizer {other:?}");
        arena.fail(other);
    }
    true
}
