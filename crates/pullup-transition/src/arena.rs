//! Registry of the gesture recognizers that may compete with the popup pan.

use bitflags::bitflags;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct RecognizerId;
}

bitflags! {
    /// Capabilities of the view a recognizer is attached to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ViewTraits: u8 {
        const POPUP_BAR = 1 << 0;
        const POPUP_CONTENT = 1 << 1;
        const SCROLLABLE = 1 << 2;
        /// Decorative shadow drawn over the popup; its recognizers never
        /// contest the popup pan.
        const OVERLAY_SHADOW = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecognizerPhase {
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

#[derive(Clone, Copy, Debug)]
struct Recognizer {
    traits: ViewTraits,
    phase: RecognizerPhase,
}

#[derive(Default)]
pub struct GestureArena {
    recognizers: SlotMap<RecognizerId, Recognizer>,
}

impl GestureArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, traits: ViewTraits) -> RecognizerId {
        self.recognizers.insert(Recognizer {
            traits,
            phase: RecognizerPhase::Possible,
        })
    }

    pub fn remove(&mut self, id: RecognizerId) -> bool {
        self.recognizers.remove(id).is_some()
    }

    pub fn contains(&self, id: RecognizerId) -> bool {
        self.recognizers.contains_key(id)
    }

    pub fn traits(&self, id: RecognizerId) -> Option<ViewTraits> {
        self.recognizers.get(id).map(|r| r.traits)
    }

    pub fn phase(&self, id: RecognizerId) -> Option<RecognizerPhase> {
        self.recognizers.get(id).map(|r| r.phase)
    }

    pub fn set_phase(&mut self, id: RecognizerId, phase: RecognizerPhase) {
        if let Some(r) = self.recognizers.get_mut(id) {
            r.phase = phase;
        }
    }

    pub fn fail(&mut self, id: RecognizerId) {
        self.set_phase(id, RecognizerPhase::Failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_recognizers_start_possible() {
        let mut arena = GestureArena::new();
        let id = arena.register(ViewTraits::POPUP_BAR);
        assert_eq!(arena.phase(id), Some(RecognizerPhase::Possible));
        assert_eq!(arena.traits(id), Some(ViewTraits::POPUP_BAR));
    }

    #[test]
    fn removed_ids_go_stale() {
        let mut arena = GestureArena::new();
        let id = arena.register(ViewTraits::empty());
        assert!(arena.remove(id));
        assert!(!arena.contains(id));
        arena.fail(id);
        assert_eq!(arena.phase(id), None);
        assert_eq!(arena.traits(id), None);
    }
}
