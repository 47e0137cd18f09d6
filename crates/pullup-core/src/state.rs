/// Where the popup content currently is. Owned by the popup host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PresentationState {
    /// Open and closing popups measure drag travel downward.
    pub fn is_dismiss_oriented(self) -> bool {
        matches!(self, PresentationState::Open | PresentationState::Closing)
    }
}

/// Which half of the transition a controller instance drives.
///
/// Fixed at attach time: the popup bar gets a presenting controller and the
/// popup content a dismissing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionRole {
    Presenting,
    Dismissing,
}

impl TransitionRole {
    pub fn is_presenting(self) -> bool {
        self == TransitionRole::Presenting
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusBarStyle {
    #[default]
    Default,
    LightContent,
    DarkContent,
}

/// How the popup content is laid out once open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationStyle {
    #[default]
    Deck,
    FullScreen,
    /// Content declares its own height instead of filling the container.
    Custom,
}
