use crate::protocol::HandSizes;
use crate::protocol::PlayerId;
use std::collections::HashSet;

/// Which opponents currently stand declared on their last card.
///
/// Only players holding exactly one card may be present. A hand-size
/// snapshot showing two or more cards removes the player, and the end of
/// each turn or game clears everything.
#[derive(Debug, Default, Clone)]
pub struct Declarations {
    declared: HashSet<PlayerId>,
}

impl Declarations {
    pub fn is_declared(&self, id: &PlayerId) -> bool {
        self.declared.contains(id)
    }
    pub fn len(&self) -> usize {
        self.declared.len()
    }
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// The player announced their last card alongside a play.
    pub fn declare(&mut self, id: PlayerId) {
        log::debug!("[tracker] {} declared", id);
        self.declared.insert(id);
    }

    /// The player drew, by choice or by penalty.
    pub fn forget(&mut self, id: &PlayerId) {
        if self.declared.remove(id) {
            log::debug!("[tracker] {} no longer declared", id);
        }
    }

    /// Applies a turn's hand-size snapshot and returns the one opponent, if
    /// any, to point out for a missing declaration.
    ///
    /// Entries for every player showing two or more cards are dropped. The
    /// scan for a target walks the snapshot in order and stops at `me`.
    /// Without an identity nobody can be told apart from ourselves, so
    /// nothing is scanned.
    pub fn observe(&mut self, me: Option<&PlayerId>, sizes: &HandSizes) -> Option<PlayerId> {
        sizes
            .iter()
            .filter(|(_, n)| *n >= 2)
            .for_each(|(id, _)| self.forget(id));
        let me = me?;
        sizes
            .iter()
            .take_while(|(id, _)| *id != me)
            .find(|(id, n)| *n == 1 && !self.is_declared(id))
            .map(|(id, _)| id.clone())
    }

    /// Rebuilds the table after a shuffle wild redistributed every hand.
    /// Anyone left on one card had no chance to declare and counts as declared.
    pub fn reshuffle(&mut self, sizes: &HandSizes) {
        self.clear();
        sizes
            .iter()
            .filter(|(_, n)| *n == 1)
            .for_each(|(id, _)| self.declare(id.clone()));
    }

    pub fn clear(&mut self) {
        self.declared.clear();
    }
}
