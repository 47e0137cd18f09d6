//! # Interactive transition controller
//!
//! One controller is attached per draggable surface: the popup bar gets a
//! presenting controller, the popup content a dismissing one. The platform
//! forwards pan callbacks to [`InteractiveTransitionController::handle_pan`]
//! in order (`Began`, any number of `Changed`, then `Ended` or `Cancelled`).
//!
//! A cycle looks like this:
//!
//! - `Began` asks the host to start an interactive present (or dismiss). The
//!   host responds by calling
//!   [`start_interactive_transition`](InteractiveTransitionController::start_interactive_transition),
//!   which binds the presentation controller's animator.
//! - `Changed` turns translation into progress, scrubs the animator and
//!   reports the drag to the observer.
//! - `Ended`/`Cancelled` decide between completing and reversing, then hand
//!   the animator back to run on its own.
//!
//! Dismissing a scrollable popup only arms once the list is scrolled back to
//! the offset it had when the popup opened; from then on the list is pinned
//! there so it does not scroll along with the drag.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use pullup_core::{
    InterruptibleAnimator, PanDirection, PresentationState, Result, TransitionError,
    TransitionRole, Vec2, pan_direction,
};

use crate::admission::{AdmissionInput, admit_pan, recognize_simultaneously};
use crate::arena::{GestureArena, RecognizerId, RecognizerPhase, ViewTraits};
use crate::completion::{CompletionDecision, CompletionInputs, decide_completion};
use crate::config::TransitionConfig;
use crate::gesture::PanEvent;
use crate::host::{
    InteractiveUpdate, PopupContainer, PopupHost, PopupObserver, PresentationController,
    ScrollSurface, Shared, TransitionContext,
};
use crate::travel::{available_travel, raw_progress};

/// Progress of the percent-driven transition the controller reports to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Interactive,
    Finished,
    Cancelled,
}

/// Per-instance gesture state, fully built at attach time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRecord {
    pub role: TransitionRole,
    /// Armed once a dismiss drag is recognized; cleared at the end of every cycle.
    pub dismissing: bool,
    pub progress: f32,
    pub location: f32,
    /// Subtracted from raw translation after dismissal arms mid-drag.
    pub translation_origin: Vec2,
    pub phase: TransitionPhase,
    tracking: bool,
}

impl TransitionRecord {
    fn new(role: TransitionRole) -> Self {
        Self {
            role,
            dismissing: false,
            progress: 0.0,
            location: 0.0,
            translation_origin: Vec2::ZERO,
            phase: TransitionPhase::Idle,
            tracking: false,
        }
    }

    fn end_cycle(&mut self) {
        self.dismissing = false;
        self.tracking = false;
        self.translation_origin = Vec2::ZERO;
    }
}

/// What a pan callback did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanOutcome {
    Ignored,
    Began,
    Updated { progress: f32 },
    Completed,
    Reversed,
}

/// Collaborators resolved once per pan callback.
struct EventContext<H> {
    host: Rc<RefCell<H>>,
    container: Shared<dyn PopupContainer>,
    scroll: Option<Shared<dyn ScrollSurface>>,
    observer: Option<Rc<dyn PopupObserver>>,
    state: PresentationState,
}

impl<H> EventContext<H> {
    fn notify(&self, f: impl FnOnce(&dyn PopupObserver)) {
        if let Some(observer) = &self.observer {
            f(observer.as_ref());
        }
    }
}

pub struct InteractiveTransitionController<H: PopupHost> {
    host: Weak<RefCell<H>>,
    recognizer: RecognizerId,
    animator: Option<Shared<dyn InterruptibleAnimator>>,
    record: TransitionRecord,
    reference_offset: Vec2,
    config: TransitionConfig,
}

impl<H: PopupHost + 'static> InteractiveTransitionController<H> {
    /// Register a pan recognizer for `role` and bind it to `host`.
    pub fn attach(
        host: &Rc<RefCell<H>>,
        arena: &mut GestureArena,
        role: TransitionRole,
        config: TransitionConfig,
    ) -> Self {
        let traits = match role {
            TransitionRole::Presenting => ViewTraits::POPUP_BAR,
            TransitionRole::Dismissing => ViewTraits::POPUP_CONTENT,
        };
        let recognizer = arena.register(traits);
        host.borrow_mut().pan_recognizer_attached(role, recognizer);
        log::debug!("attached {role:?} pan recognizer {recognizer:?}");

        Self {
            host: Rc::downgrade(host),
            recognizer,
            animator: None,
            record: TransitionRecord::new(role),
            reference_offset: Vec2::ZERO,
            config,
        }
    }

    /// Unregister the pan recognizer. The controller is gone afterwards.
    pub fn detach(self, arena: &mut GestureArena) {
        arena.remove(self.recognizer);
        log::debug!("detached {:?} pan recognizer", self.record.role);
    }

    pub fn role(&self) -> TransitionRole {
        self.record.role
    }

    pub fn recognizer(&self) -> RecognizerId {
        self.recognizer
    }

    pub fn record(&self) -> &TransitionRecord {
        &self.record
    }

    pub fn is_dismissing(&self) -> bool {
        self.record.dismissing
    }

    pub fn progress(&self) -> f32 {
        self.record.progress
    }

    pub fn transition_phase(&self) -> TransitionPhase {
        self.record.phase
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn has_animator(&self) -> bool {
        self.animator.is_some()
    }

    /// Scroll offset captured when the popup finished opening.
    pub fn set_reference_content_offset(&mut self, offset: Vec2) {
        self.reference_offset = offset;
    }

    pub fn reference_content_offset(&self) -> Vec2 {
        self.reference_offset
    }

    /// Released transitions always finish at the animator's own pace.
    pub fn completion_speed(&self) -> f32 {
        1.0
    }

    /// Bind the presentation controller's animator for this transition.
    pub fn start_interactive_transition(&mut self, context: &TransitionContext) {
        match self.bind_animator(context) {
            Ok(()) => {
                self.record.phase = TransitionPhase::Interactive;
                log::debug!("{:?} interactive transition started", context.role);
            }
            Err(err) => log::debug!("interactive transition not started: {err}"),
        }
    }

    fn bind_animator(&mut self, context: &TransitionContext) -> Result<()> {
        let host = self.host.upgrade().ok_or(TransitionError::HostReleased)?;
        let presentation = host
            .borrow()
            .presentation_controller()
            .ok_or(TransitionError::PresentationUnavailable)?;
        let animator = presentation
            .borrow_mut()
            .interruptible_animator(context)
            .ok_or(TransitionError::AnimatorUnbound)?;
        self.animator = Some(animator);
        Ok(())
    }

    /// Whether a pan with `velocity` may start recognizing.
    pub fn should_begin(&self, velocity: Vec2) -> bool {
        let Some(host) = self.host.upgrade() else {
            return false;
        };
        let state = host.borrow().presentation_state();
        let observer = host.borrow().observer();
        let policy = observer.and_then(|o| o.pan_gesture_should_begin(state));
        let container = host.borrow().container();
        let content_scrollable = match container {
            Some(container) => {
                let scroll = container.borrow().content_scroll_view();
                scroll.is_some()
            }
            None => false,
        };

        let admission = admit_pan(&AdmissionInput {
            state,
            direction: pan_direction(velocity),
            role: self.record.role,
            content_scrollable,
            policy,
        });
        if !admission.is_accepted() {
            log::debug!("{:?} pan not admitted: {admission:?}", self.record.role);
        }
        admission.is_accepted()
    }

    pub fn should_recognize_simultaneously(
        &self,
        arena: &mut GestureArena,
        other: RecognizerId,
    ) -> bool {
        recognize_simultaneously(arena, other)
    }

    pub fn handle_pan(&mut self, event: &PanEvent) -> PanOutcome {
        match self.process(event) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("pan {:?} skipped: {err}", event.phase);
                if is_release(event.phase) {
                    self.record.end_cycle();
                }
                PanOutcome::Ignored
            }
        }
    }

    fn process(&mut self, event: &PanEvent) -> Result<PanOutcome> {
        if matches!(event.phase, RecognizerPhase::Possible | RecognizerPhase::Failed) {
            return Ok(PanOutcome::Ignored);
        }
        let cx = self.resolve()?;
        self.arm_from_scroll(&cx, event);

        match event.phase {
            RecognizerPhase::Began => Ok(self.began(&cx, event)),
            RecognizerPhase::Changed => Ok(self.changed(&cx, event)),
            RecognizerPhase::Ended | RecognizerPhase::Cancelled => {
                let outcome = self.release(&cx, event);
                self.record.end_cycle();
                outcome
            }
            RecognizerPhase::Possible | RecognizerPhase::Failed => Ok(PanOutcome::Ignored),
        }
    }

    fn resolve(&self) -> Result<EventContext<H>> {
        let host = self.host.upgrade().ok_or(TransitionError::HostReleased)?;
        let container = host
            .borrow()
            .container()
            .ok_or(TransitionError::ContainerUnavailable)?;
        let scroll = container.borrow().content_scroll_view();
        let observer = host.borrow().observer();
        let state = host.borrow().presentation_state();
        Ok(EventContext {
            host,
            container,
            scroll,
            observer,
            state,
        })
    }

    fn translation(&self, event: &PanEvent) -> Vec2 {
        event.translation - self.record.translation_origin
    }

    /// Arm dismissal as soon as scrollable content is back at its reference offset.
    fn arm_from_scroll(&mut self, cx: &EventContext<H>, event: &PanEvent) {
        if self.record.role.is_presenting() || self.record.dismissing {
            return;
        }
        let Some(scroll) = &cx.scroll else {
            return;
        };
        let offset = scroll.borrow().content_offset();
        if offset.y <= self.reference_offset.y {
            self.record.dismissing = true;
            self.record.translation_origin = event.translation;
            log::debug!("dismiss armed at scroll offset {}", offset.y);
            cx.notify(|o| o.dismiss_interactive());
        }
    }

    fn began(&mut self, cx: &EventContext<H>, event: &PanEvent) -> PanOutcome {
        self.record.progress = 0.0;
        self.record.location = 0.0;
        self.record.tracking = true;
        if !self.record.dismissing {
            self.record.translation_origin = Vec2::ZERO;
        }

        match self.record.role {
            TransitionRole::Presenting => cx.notify(|o| o.present_interactive()),
            TransitionRole::Dismissing => {
                if !self.record.dismissing && cx.scroll.is_none() {
                    self.record.dismissing = true;
                    cx.notify(|o| o.dismiss_interactive());
                }
            }
        }

        let min_y = cx.container.borrow().content_frame().min_y();
        self.record.location = min_y + self.translation(event).y;
        log::debug!(
            "{:?} pan began in {:?}, dismissing={}",
            self.record.role,
            cx.state,
            self.record.dismissing
        );
        PanOutcome::Began
    }

    fn changed(&mut self, cx: &EventContext<H>, event: &PanEvent) -> PanOutcome {
        if !self.record.tracking {
            log::warn!("pan changed without a preceding began; ignoring");
            return PanOutcome::Ignored;
        }

        if self.record.dismissing
            && let Some(scroll) = &cx.scroll
        {
            scroll.borrow_mut().set_content_offset(self.reference_offset);
        }

        let metrics = cx.container.borrow().travel_metrics();
        let travel = available_travel(&metrics, cx.state);
        let translation = self.translation(event);
        let raw = raw_progress(translation.y, travel);

        if self.record.role.is_presenting() {
            let presentation = cx.host.borrow().presentation_controller();
            if let Some(presentation) = presentation {
                presentation
                    .borrow_mut()
                    .set_popup_bar_alpha(self.config.bar_alpha(raw));
            }
            cx.container
                .borrow_mut()
                .set_close_button_alpha(self.config.close_button_alpha(raw));
        }

        let progress = raw.clamp(0.0, 1.0);
        self.record.progress = progress;
        if let Some(animator) = &self.animator {
            animator.borrow_mut().set_fraction_complete(progress);
        }

        let update = InteractiveUpdate {
            role: self.record.role,
            state: cx.state,
            progress,
            location: self.record.location + translation.y,
        };
        cx.notify(|o| o.interactive_presentation(&update));

        let style = match pan_direction(event.velocity) {
            Some(PanDirection::Up) => Some(cx.host.borrow().popup_preferred_status_bar_style()),
            Some(PanDirection::Down) => {
                Some(cx.host.borrow().container_preferred_status_bar_style())
            }
            _ => None,
        };
        if let Some(style) = style {
            cx.host.borrow_mut().set_popup_status_bar_style(style);
        }
        cx.container
            .borrow_mut()
            .set_needs_status_bar_appearance_update(Some(self.config.status_bar_animation));

        PanOutcome::Updated { progress }
    }

    fn release(&mut self, cx: &EventContext<H>, event: &PanEvent) -> Result<PanOutcome> {
        let animator = self.animator.clone().ok_or(TransitionError::AnimatorUnbound)?;
        let presentation = cx
            .host
            .borrow()
            .presentation_controller()
            .ok_or(TransitionError::PresentationUnavailable)?;

        let settings = cx.container.borrow().completion_settings();
        let fraction = animator.borrow().fraction_complete();
        let decision = decide_completion(&CompletionInputs {
            role: self.record.role,
            dismissing: self.record.dismissing,
            velocity: event.velocity,
            fraction,
            settings,
        });
        log::debug!(
            "{:?} pan released at {fraction:.3} with velocity {:?}: {decision:?}",
            self.record.role,
            event.velocity
        );

        Ok(match decision {
            CompletionDecision::Complete => {
                self.complete(cx, &animator, &presentation);
                PanOutcome::Completed
            }
            CompletionDecision::Reverse => {
                self.reverse(cx, &animator, &presentation);
                PanOutcome::Reversed
            }
        })
    }

    fn complete(
        &mut self,
        cx: &EventContext<H>,
        animator: &Shared<dyn InterruptibleAnimator>,
        presentation: &Shared<dyn PresentationController>,
    ) {
        let container = cx.container.clone();
        match self.record.role {
            TransitionRole::Presenting => {
                let style = cx.host.borrow().popup_preferred_status_bar_style();
                cx.host.borrow_mut().set_popup_status_bar_style(style);
                animator.borrow_mut().add_animations(Box::new(move || {
                    let mut container = container.borrow_mut();
                    container.set_needs_status_bar_appearance_update(None);
                    container.set_close_button_alpha(1.0);
                }));
                animator.borrow_mut().continue_animation(None, 0.0);

                presentation.borrow_mut().set_popup_bar_alpha(0.0);
                self.transition_state(cx, PresentationState::Opening, PresentationState::Closed);
                cx.notify(|o| o.will_open());
            }
            TransitionRole::Dismissing => {
                let style = cx.host.borrow().container_preferred_status_bar_style();
                cx.host.borrow_mut().set_popup_status_bar_style(style);
                animator.borrow_mut().add_animations(Box::new(move || {
                    container
                        .borrow_mut()
                        .set_needs_status_bar_appearance_update(None);
                }));

                self.transition_state(cx, PresentationState::Closing, PresentationState::Open);
                cx.notify(|o| o.will_close());
                presentation
                    .borrow_mut()
                    .continue_dismissal(None, self.config.dismiss_duration_factor);
            }
        }
        self.record.phase = TransitionPhase::Finished;
    }

    fn reverse(
        &mut self,
        cx: &EventContext<H>,
        animator: &Shared<dyn InterruptibleAnimator>,
        presentation: &Shared<dyn PresentationController>,
    ) {
        self.record.phase = TransitionPhase::Cancelled;
        animator.borrow_mut().set_reversed(true);

        let container = cx.container.clone();
        match self.record.role {
            TransitionRole::Presenting => {
                let style = cx.host.borrow().container_preferred_status_bar_style();
                cx.host.borrow_mut().set_popup_status_bar_style(style);
                let presentation = presentation.clone();
                animator.borrow_mut().add_animations(Box::new(move || {
                    container
                        .borrow_mut()
                        .set_needs_status_bar_appearance_update(None);
                    presentation.borrow_mut().set_popup_bar_alpha(1.0);
                }));
                animator.borrow_mut().continue_animation(None, 0.0);
            }
            TransitionRole::Dismissing => {
                let style = cx.host.borrow().popup_preferred_status_bar_style();
                cx.host.borrow_mut().set_popup_status_bar_style(style);
                if !self.record.dismissing {
                    return;
                }
                animator.borrow_mut().add_animations(Box::new(move || {
                    let mut container = container.borrow_mut();
                    container.set_needs_status_bar_appearance_update(None);
                    container.set_close_button_stationary();
                }));
                if let Some(scroll) = &cx.scroll {
                    let scroll = Rc::downgrade(scroll);
                    let offset = self.reference_offset;
                    animator.borrow_mut().add_completion(Box::new(move |_| {
                        if let Some(scroll) = scroll.upgrade() {
                            scroll.borrow_mut().set_content_offset(offset);
                        }
                    }));
                }
                animator.borrow_mut().continue_animation(None, 0.0);
            }
        }
    }

    fn transition_state(
        &self,
        cx: &EventContext<H>,
        state: PresentationState,
        previous: PresentationState,
    ) {
        cx.host.borrow_mut().set_presentation_state(state);
        log::debug!("popup state {previous:?} -> {state:?}");
        cx.notify(|o| o.state_changed(state, previous));
    }
}

fn is_release(phase: RecognizerPhase) -> bool {
    matches!(phase, RecognizerPhase::Ended | RecognizerPhase::Cancelled)
}
