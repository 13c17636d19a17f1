use indexmap::IndexSet;

use crate::SpellSlot;

/// One foreshadowing category: a fixed warning phrase plus the spell slots
/// that trigger it. Deliberately coarse — the player learns *that* a heal or
/// a summon is coming next turn, never which exact spell.
#[derive(Debug, Clone, Copy)]
pub struct HintCategory {
    pub phrase: &'static str,
    pub slots: &'static [SpellSlot],
}

/// Map upcoming spell slots to warning phrases. Each category whose
/// membership intersects `slots` contributes its phrase exactly once, in
/// first-seen order; the result is the space-joined concatenation. An empty
/// slot list yields an empty string.
pub fn classify(table: &[HintCategory], slots: &[SpellSlot]) -> String {
    let mut phrases: IndexSet<&'static str> = IndexSet::new();
    for slot in slots {
        for category in table {
            if category.slots.contains(slot) {
                phrases.insert(category.phrase);
            }
        }
    }
    phrases.into_iter().collect::<Vec<_>>().join(" ")
}
