use engine::hint::{classify, HintCategory};
use engine::{Boss, BossKind, SpellSlot};

const TABLE: &[HintCategory] = &[
    HintCategory {
        phrase: "The beast stirs.",
        slots: &[SpellSlot::Two, SpellSlot::Three],
    },
    HintCategory {
        phrase: "The beast growls.",
        slots: &[SpellSlot::Three, SpellSlot::Four],
    },
];

#[test]
fn empty_slots_give_empty_hint() {
    assert_eq!(classify(TABLE, &[]), "");
}

#[test]
fn phrases_are_deduplicated() {
    let slots = [SpellSlot::Two, SpellSlot::Two, SpellSlot::Three];
    assert_eq!(classify(TABLE, &slots), "The beast stirs. The beast growls.");
}

#[test]
fn phrases_come_out_in_first_seen_order() {
    let slots = [SpellSlot::Four, SpellSlot::Two];
    assert_eq!(classify(TABLE, &slots), "The beast growls. The beast stirs.");
}

#[test]
fn one_slot_may_trigger_several_categories() {
    assert_eq!(
        classify(TABLE, &[SpellSlot::Three]),
        "The beast stirs. The beast growls."
    );
}

#[test]
fn classify_is_idempotent() {
    let slots = [SpellSlot::Four, SpellSlot::Three, SpellSlot::Two];
    assert_eq!(classify(TABLE, &slots), classify(TABLE, &slots));
}

#[test]
fn mana_god_heal_warning_comes_from_twelve() {
    let boss = Boss::new(BossKind::TheManaGod, "Mana God", 4);
    assert_eq!(
        boss.attack_hint(&[SpellSlot::Twelve]),
        "The boss is about to heal!"
    );
    assert_eq!(
        boss.attack_hint(&[SpellSlot::Four, SpellSlot::Twelve, SpellSlot::Six]),
        "The boss is amassing armies! The boss is about to heal!"
    );
}

#[test]
fn horror_flags_the_tidal_wave_slots() {
    let boss = Boss::new(BossKind::HorrorFromTheDepths, "Horror", 4);
    let hint = boss.attack_hint(&[SpellSlot::Two, SpellSlot::Six]);
    assert_eq!(
        hint,
        "The Horror recoils as it prepares to unleash a massive tidal wave. \
         The Horror is summoning beasts from the depths."
    );
}

#[test]
fn lunar_covers_every_slot_with_a_warning() {
    let boss = Boss::new(BossKind::LunarChanneler, "Channeler", 4);
    for slot in SpellSlot::ALL {
        assert!(!boss.attack_hint(&[slot]).is_empty(), "{:?}", slot);
    }
}
