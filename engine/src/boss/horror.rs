//! HorrorFromTheDepths: bounce spells and curses, no self-heals. The low and
//! high slots share the same tidal-wave bounce, which is why the hint table
//! calls them out as a separate "recoil" category.

use crate::hint::HintCategory;
use crate::SpellSlot;

use super::Boss;

pub(super) const HINTS: &[HintCategory] = &[
    HintCategory {
        phrase: "The Horror is channeling dark energies.",
        slots: &[
            SpellSlot::Three,
            SpellSlot::Four,
            SpellSlot::Five,
            SpellSlot::Nine,
            SpellSlot::Ten,
            SpellSlot::Eleven,
        ],
    },
    HintCategory {
        phrase: "The Horror is summoning beasts from the depths.",
        slots: &[SpellSlot::Six, SpellSlot::Seven, SpellSlot::Eight],
    },
    HintCategory {
        phrase: "The Horror recoils as it prepares to unleash a massive tidal wave.",
        slots: &[SpellSlot::Two, SpellSlot::Twelve],
    },
];

pub(super) fn cast(boss: &mut Boss, slot: SpellSlot) -> String {
    let n = boss.player_count;
    match slot {
        SpellSlot::Two | SpellSlot::Twelve => {
            "BOSS SPELL> Return all nonland, non-boss permanents to their owner's hands."
                .to_string()
        }
        SpellSlot::Three | SpellSlot::Eleven => "BOSS SPELL> For each player, create a blue \
             enchantment token named Curse of Sinking with \"Whenever you gain life, mill that \
             many cards.\""
            .to_string(),
        SpellSlot::Four | SpellSlot::Ten => format!(
            "BOSS SPELL> Return {} nonland, nontoken permanents to their owner's hands.",
            n
        ),
        SpellSlot::Five | SpellSlot::Nine => "BOSS SPELL> For each player, create a blue \
             enchantment token named Curse of Rising Tides with \"Whenever you draw one or more \
             cards, mill that many cards.\""
            .to_string(),
        SpellSlot::Six => format!(
            "BOSS SPELL> Create {} 1/1 blue tentacle creature tokens with decayed, haste, and \
             \"This creature gets +1/+1 for each instant or sorcery in defending player's \
             graveyard.\" One token attacks each player this combat.",
            n
        ),
        SpellSlot::Seven => format!(
            "BOSS SPELL> Create {} 1/1 blue jellyfish creature tokens with first strike, \
             decayed, haste, and \"When this creature deals combat damage to a player, that \
             player chooses an untapped creature they control, taps it, and puts a stun counter \
             on it.\" Two tokens attack each player this combat.",
            n * 2
        ),
        SpellSlot::Eight => format!(
            "BOSS SPELL> Create {} 1/1 blue spawn creature tokens with decayed, haste, and \
             \"This creature gets +1/+0 for each card in defending player's hand.\" One token \
             attacks each player this combat.",
            n
        ),
    }
}
