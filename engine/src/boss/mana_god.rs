//! TheManaGod: zombie hordes and two self-heals (`Ten`, `Twelve`).

use crate::hint::HintCategory;
use crate::SpellSlot;

use super::Boss;

pub(super) const HINTS: &[HintCategory] = &[
    HintCategory {
        phrase: "The boss is channeling energy!",
        slots: &[
            SpellSlot::Two,
            SpellSlot::Three,
            SpellSlot::Five,
            SpellSlot::Nine,
            SpellSlot::Eleven,
        ],
    },
    HintCategory {
        phrase: "The boss is amassing armies!",
        slots: &[
            SpellSlot::Four,
            SpellSlot::Six,
            SpellSlot::Seven,
            SpellSlot::Eight,
            SpellSlot::Ten,
        ],
    },
    HintCategory {
        phrase: "The boss is about to heal!",
        slots: &[SpellSlot::Twelve],
    },
];

pub(super) fn cast(boss: &mut Boss, slot: SpellSlot) -> String {
    let n = boss.player_count;
    match slot {
        SpellSlot::Two => "BOSS SPELL> Each player chooses three: sacrifice all creatures you \
             control, sacrifice all enchantments you control, sacrifice all artifacts you \
             control, exile your graveyard. Boss permanents cannot be sacrificed this way."
            .to_string(),
        SpellSlot::Three => "BOSS SPELL> For each player, create a colorless Boss enchantment \
             token named Curse of Confusion under their control with \"At the beginning of your \
             end step, choose one: sacrifice a permanent, discard a card, or mill 5.\""
            .to_string(),
        SpellSlot::Four => format!(
            "BOSS SPELL> Create {} 1/1 red goblin zombie creature tokens with first strike, \
             decayed, and haste. Four tokens attack each player this combat.",
            n * 4
        ),
        SpellSlot::Five => format!(
            "BOSS SPELL> Players discard {} cards divided between players.",
            n * 2
        ),
        SpellSlot::Six => format!(
            "BOSS SPELL> Create {} 2/2 black vampire zombie creature tokens with menace, \
             decayed, and haste. Two tokens attack each player this combat.",
            n * 2
        ),
        SpellSlot::Seven => format!(
            "BOSS SPELL> Create {} 5/5 green beast zombie creature tokens with trample, \
             decayed, and haste. One token attacks each player this combat.",
            n
        ),
        SpellSlot::Eight => format!(
            "BOSS SPELL> Create {} 2/2 blue drake zombie creature tokens with flying, decayed, \
             and haste. Two tokens attack each player this combat.",
            n * 2
        ),
        SpellSlot::Nine => format!(
            "BOSS SPELL> Players sacrifice {} nonland, non-token permanents divided between \
             players.",
            n
        ),
        SpellSlot::Ten => {
            boss.health += n * 4;
            format!(
                "BOSS SPELL> Create {count} 1/1 white cleric zombie creature tokens with \
                 lifelink, decayed, and haste. Four tokens attack each player this combat. \
                 Boss heals {count} from the clerics! {name}'s health is now {health}!",
                count = n * 4,
                name = boss.name,
                health = boss.health
            )
        }
        SpellSlot::Eleven => "BOSS SPELL> For each player, create a colorless artifact token \
             named Altar of Bleeding under their control with \"At the beginning of your end \
             step, you lose 3 life unless you pay 2.\""
            .to_string(),
        SpellSlot::Twelve => {
            boss.health += n * 20;
            format!(
                "BOSS SPELL> {name} heals {amount}! {name}'s health is now {health}!",
                name = boss.name,
                amount = n * 20,
                health = boss.health
            )
        }
    }
}
