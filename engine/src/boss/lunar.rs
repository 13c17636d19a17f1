//! LunarChanneler: soldier swarms, player-attached enchantments, and a
//! Twelve that summons a reflection of Emrakul. No mechanical self-heals
//! (the Pumpkin Totem heal lives in table flavor, not in the health math).

use crate::hint::HintCategory;
use crate::SpellSlot;

use super::Boss;

pub(super) const HINTS: &[HintCategory] = &[
    HintCategory {
        phrase: "Lunar Channeler begins chanting at the moon.",
        slots: &[
            SpellSlot::Three,
            SpellSlot::Six,
            SpellSlot::Seven,
            SpellSlot::Eight,
        ],
    },
    HintCategory {
        phrase: "Lunar Channeler is conjuring entities.",
        slots: &[
            SpellSlot::Four,
            SpellSlot::Five,
            SpellSlot::Nine,
            SpellSlot::Ten,
            SpellSlot::Eleven,
        ],
    },
    HintCategory {
        phrase: "An unsettling energy emanates from the moon...",
        slots: &[SpellSlot::Twelve],
    },
    HintCategory {
        phrase: "The ground begins to open at Lunar Channeler's feet.",
        slots: &[SpellSlot::Two],
    },
];

pub(super) fn cast(boss: &mut Boss, slot: SpellSlot) -> String {
    let n = boss.player_count;
    match slot {
        SpellSlot::Two => format!(
            "BOSS SPELL> Create {} X/X Spirit Zombie Cleric tokens with haste, decayed, menace, \
             and \"When this creature attacks, tap target creature defending player controls at \
             random,\" where X is the total number of cards in all graveyards. One token attacks \
             each player this combat.",
            n
        ),
        SpellSlot::Three => "BOSS SPELL> Lunar Channeler creates Moon's Presence, an \
             enchantment aura with \"Enchant player. Lunar Light Soldier creatures the boss \
             controls gain +1/+1 for each Aura attached to players.\" Randomly attach it to a \
             player."
            .to_string(),
        SpellSlot::Four => format!(
            "BOSS SPELL> Create {} Lunar Light Soldier tokens with haste and decayed. Three \
             tokens attack each player this combat.",
            n * 3
        ),
        SpellSlot::Five => format!(
            "BOSS SPELL> Create {} 1/1 Lunar Light Soldier tokens with decayed and haste.",
            n * 2
        ),
        SpellSlot::Six => "BOSS SPELL> Lunar Channeler creates Curse of the Full Moon, an \
             enchantment with \"Enchant player. Enchanted player's creatures get -X/0 where X \
             is the number of cards in enchanted player's hand.\" Randomly attach it to a \
             player."
            .to_string(),
        SpellSlot::Seven => "BOSS SPELL> Make a Pumpkin Totem artifact enchantment token with \
             \"Enchant player. At your end step the boss heals 5.\" Randomly attach it to a \
             player."
            .to_string(),
        SpellSlot::Eight => "BOSS SPELL> Lunar Channeler creates Moon's Watcher, an enchantment \
             with \"Enchant player. Whenever enchanted player attacks with one or more \
             creatures, this enchantment becomes a 0/1 indestructible white Lunar Statue that \
             blocks the creature with the highest power among attacking creatures.\" Randomly \
             attach it to a player."
            .to_string(),
        SpellSlot::Nine => format!(
            "BOSS SPELL> Create {} white Lunar Light Soldier tokens with haste and decayed.",
            n * 2
        ),
        SpellSlot::Ten => format!(
            "BOSS SPELL> Create {} white and blue Moon's Disciple tokens, X/X Spirits with \
             decayed, haste, and flying, where X is the number of turns the boss has taken \
             (including this one).",
            n
        ),
        SpellSlot::Eleven => format!(
            "BOSS SPELL> Create {} white Lunar Light Soldier tokens with haste and decayed. \
             Three tokens attack each player this combat.",
            n * 3
        ),
        SpellSlot::Twelve => format!(
            "BOSS SPELL> Create {} 5/5 Reflection of Emrakul, Freed from the Moon, an Eldrazi \
             creature with haste, decayed, trample, flying, and annihilator 1.",
            n
        ),
    }
}
