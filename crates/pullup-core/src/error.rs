use thiserror::Error;

/// Context a gesture event needed but could not find.
///
/// None of these are fatal: the event simply does not apply and the gesture
/// handler drops it after logging.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("popup host has been released")]
    HostReleased,
    #[error("no container view controller is active")]
    ContainerUnavailable,
    #[error("no presentation controller is active")]
    PresentationUnavailable,
    #[error("no interruptible animator is bound")]
    AnimatorUnbound,
}

pub type Result<T, E = TransitionError> = std::result::Result<T, E>;
