//! Semantic player actions and their hotkeys.

use super::state::{NodeId, RepeatableId, UpgradeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Wind,
    Condense,
    BuyUpgrade(UpgradeId),
    BuyRepeatable(RepeatableId),
    Reset(NodeId),
    /// Convert main points into space points, then reset the space node.
    SpaceReset,
}

// ── Hotkeys ─────────────────────────────────────────────────────
pub const HOTKEYS: &[(char, Action, &str)] = &[
    ('w', Action::Wind, "Wind the power generator"),
    ('c', Action::Condense, "Condense time"),
    ('s', Action::SpaceReset, "Reset for space points"),
];

impl Action {
    pub fn from_hotkey(key: char) -> Option<Action> {
        HOTKEYS
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, action, _)| *action)
    }
}
