use engine::{Boss, BossKind, SpellSlot};

#[test]
fn initial_health_scales_with_party_size() {
    assert_eq!(Boss::new(BossKind::TheManaGod, "Mana God", 4).health, 1000);
    assert_eq!(
        Boss::new(BossKind::HorrorFromTheDepths, "Horror", 4).health,
        1000
    );
    // LunarChanneler runs on the reduced base: (250 - 200) * players.
    assert_eq!(Boss::new(BossKind::LunarChanneler, "Luna", 4).health, 200);
    assert_eq!(Boss::new(BossKind::TheManaGod, "Mana God", 1).health, 250);
}

#[test]
fn mana_god_ten_heals_and_reports_new_total() {
    let mut boss = Boss::new(BossKind::TheManaGod, "Mana God", 4);
    let text = boss.cast(SpellSlot::Ten);
    assert_eq!(boss.health, 1016);
    assert!(text.contains("Boss heals 16 from the clerics!"));
    assert!(text.contains("Mana God's health is now 1016!"));
}

#[test]
fn mana_god_twelve_heals_and_reports_new_total() {
    let mut boss = Boss::new(BossKind::TheManaGod, "Mana God", 4);
    boss.health = 100;
    let text = boss.cast(SpellSlot::Twelve);
    assert_eq!(boss.health, 180);
    assert!(text.contains("Mana God heals 80!"));
    assert!(text.contains("Mana God's health is now 180!"));
}

#[test]
fn only_the_mana_god_actually_heals() {
    for kind in [BossKind::HorrorFromTheDepths, BossKind::LunarChanneler] {
        let mut boss = Boss::new(kind, "Boss", 4);
        let before = boss.health;
        for slot in SpellSlot::ALL {
            boss.cast(slot);
        }
        assert_eq!(boss.health, before, "{:?}", kind);
    }
}

#[test]
fn token_counts_scale_with_player_count() {
    let mut three = Boss::new(BossKind::TheManaGod, "Mana God", 3);
    assert!(three.cast(SpellSlot::Four).contains("Create 12 1/1 red goblin"));
    let mut five = Boss::new(BossKind::TheManaGod, "Mana God", 5);
    assert!(five.cast(SpellSlot::Four).contains("Create 20 1/1 red goblin"));
}

#[test]
fn turn_attacks_resolve_in_slot_order_with_blank_lines() {
    let mut boss = Boss::new(BossKind::HorrorFromTheDepths, "Horror", 2);
    let first = boss.cast(SpellSlot::Six);
    let second = boss.cast(SpellSlot::Two);
    let combined = boss.resolve_turn_attacks(&[SpellSlot::Six, SpellSlot::Two]);
    assert_eq!(combined, format!("{}\n\n{}", first, second));
}

#[test]
fn resolving_no_attacks_yields_no_text() {
    let mut boss = Boss::new(BossKind::LunarChanneler, "Luna", 2);
    assert_eq!(boss.resolve_turn_attacks(&[]), "");
}
