use std::f32::consts::PI;

use resource_rush::compute::*;
use resource_rush::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn arena() -> Arena {
    Arena::new(1000.0, 700.0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn player_at(x: f32, y: f32) -> Player {
    let mut p = Player::spawn(PlayerId::One, &arena());
    p.body.x = x;
    p.body.y = y;
    p
}

// ── Player movement ───────────────────────────────────────────────────────────

#[test]
fn spawn_positions_mirror_around_centre() {
    let one = Player::spawn(PlayerId::One, &arena());
    let two = Player::spawn(PlayerId::Two, &arena());
    assert_eq!(one.body.center(), (550.0, 350.0));
    assert_eq!(two.body.center(), (450.0, 350.0));
    assert_eq!(one.lives, 3);
    assert_eq!(one.speed, 5.0);
}

#[test]
fn axis_move_uses_full_speed() {
    let mut p = player_at(100.0, 100.0);
    update_player(&mut p, Intent::new(1, 0), &arena());
    assert_eq!(p.body.x, 105.0);
    assert_eq!(p.body.y, 100.0);
}

#[test]
fn diagonal_move_keeps_axis_speed() {
    let mut p = player_at(100.0, 100.0);
    p.speed = 7.0;
    update_player(&mut p, Intent::new(1, 1), &arena());
    let dx = p.body.x - 100.0;
    let dy = p.body.y - 100.0;
    assert!(((dx * dx + dy * dy).sqrt() - 7.0).abs() < 1e-4);
}

#[test]
fn idle_intent_does_not_move() {
    let mut p = player_at(100.0, 100.0);
    update_player(&mut p, Intent::IDLE, &arena());
    assert_eq!((p.body.x, p.body.y), (100.0, 100.0));
}

#[test]
fn player_is_clamped_not_bounced() {
    let mut p = player_at(2.0, 700.0 - 75.0 - 1.0);
    update_player(&mut p, Intent::new(-1, 1), &arena());
    assert_eq!(p.body.x, 0.0);
    assert_eq!(p.body.bottom(), 700.0);
}

// ── Damage & invulnerability ──────────────────────────────────────────────────

#[test]
fn take_damage_costs_a_life_and_arms_shield() {
    let mut p = player_at(0.0, 0.0);
    assert!(take_damage(&mut p));
    assert_eq!(p.lives, 2);
    assert!(p.is_invulnerable());
    assert_eq!(p.invulnerable_ticks, 120);
}

#[test]
fn damage_during_window_is_a_no_op() {
    let mut p = player_at(0.0, 0.0);
    take_damage(&mut p);
    for _ in 0..30 {
        update_player(&mut p, Intent::IDLE, &arena());
    }
    assert!(!take_damage(&mut p));
    assert_eq!(p.lives, 2);
    // The window is neither reset nor extended
    assert_eq!(p.invulnerable_ticks, 90);
}

#[test]
fn invulnerability_lasts_exactly_120_ticks() {
    let mut p = player_at(0.0, 0.0);
    take_damage(&mut p);
    for _ in 0..119 {
        update_player(&mut p, Intent::IDLE, &arena());
    }
    assert!(p.is_invulnerable());
    update_player(&mut p, Intent::IDLE, &arena());
    assert!(!p.is_invulnerable());
    assert!(take_damage(&mut p));
    assert_eq!(p.lives, 1);
}

#[test]
fn lives_never_go_below_zero() {
    let mut p = player_at(0.0, 0.0);
    p.lives = 0;
    assert!(take_damage(&mut p));
    assert_eq!(p.lives, 0);
}

#[test]
fn dimmed_only_while_invulnerable() {
    let mut p = player_at(0.0, 0.0);
    assert!(!is_dimmed(&p));
    take_damage(&mut p);
    assert!(is_dimmed(&p));
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn speed_power_up_caps_at_eight() {
    let mut p = player_at(0.0, 0.0);
    for _ in 0..10 {
        apply_power_up(&mut p, PowerUpKind::Speed);
    }
    assert_eq!(p.speed, 8.0);
}

#[test]
fn shield_power_up_adds_a_life() {
    let mut p = player_at(0.0, 0.0);
    apply_power_up(&mut p, PowerUpKind::Shield);
    assert_eq!(p.lives, 4);
}

#[test]
fn power_up_bob_moves_vertically_only() {
    let mut pu = PowerUp::new(PowerUpKind::Shield, 300.0, 300.0);
    let start = pu.body;
    for _ in 0..8 {
        update_power_up(&mut pu);
    }
    assert_eq!(pu.phase, 8);
    assert_eq!(pu.body.x, start.x);
    assert_ne!(pu.body.y, start.y);
    assert_eq!(pu.duration, 300);
}

// ── Resources ─────────────────────────────────────────────────────────────────

#[test]
fn resource_bob_accumulates_rounded_offsets() {
    let mut r = Resource::new(ResourceKind::Gold, 500.0, 300.0);
    let y0 = r.body.y;
    let mut expected = y0;
    for phase in 1..=20u32 {
        update_resource(&mut r);
        expected += (2.0 * (phase as f32 * 0.1).sin()).round();
    }
    assert_eq!(r.phase, 20);
    assert_eq!(r.body.y, expected);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

fn enemy_at(x: f32, y: f32, direction: f32) -> Enemy {
    let mut e = Enemy::new(0.0, 0.0, 2.0, direction, 100);
    e.body.x = x;
    e.body.y = y;
    e
}

#[test]
fn enemy_moves_along_heading() {
    let mut e = enemy_at(100.0, 100.0, 0.0);
    update_enemy(&mut e, &arena(), &mut seeded_rng());
    assert!((e.body.x - 102.0).abs() < 1e-4);
    assert!((e.body.y - 100.0).abs() < 1e-4);
    assert_eq!(e.tick_counter, 1);
}

#[test]
fn enemy_reflects_off_right_edge() {
    // box ends at 976 + 25 = 1001 after moving 2 px right
    let mut e = enemy_at(974.0, 300.0, 0.0);
    update_enemy(&mut e, &arena(), &mut seeded_rng());
    assert!((e.direction - PI).abs() < 1e-6);
    assert_eq!(e.body.right(), 1000.0);
}

#[test]
fn enemy_reflects_off_top_edge() {
    let heading = -PI / 2.0;
    let mut e = enemy_at(300.0, 1.0, heading);
    update_enemy(&mut e, &arena(), &mut seeded_rng());
    assert!((e.direction - PI / 2.0).abs() < 1e-6);
    assert_eq!(e.body.y, 0.0);
}

#[test]
fn enemy_corner_hit_flips_both_axes() {
    let heading = PI / 4.0; // down-right
    let mut e = enemy_at(974.5, 674.5, heading);
    update_enemy(&mut e, &arena(), &mut seeded_rng());
    assert!((e.direction - (-(PI - heading))).abs() < 1e-6);
    assert_eq!(e.body.right(), 1000.0);
    assert_eq!(e.body.bottom(), 700.0);
}

#[test]
fn enemy_redraws_heading_when_countdown_elapses() {
    let mut e = enemy_at(400.0, 300.0, 0.0);
    e.wander_ticks = 1;
    e.speed = 1.5;
    update_enemy(&mut e, &arena(), &mut seeded_rng());
    assert_eq!(e.tick_counter, 0);
    assert!((60..180).contains(&e.wander_ticks));
    assert!((0.0..std::f32::consts::TAU).contains(&e.direction));
    // moved one step along the new heading
    let dx = e.body.x - 400.0;
    let dy = e.body.y - 300.0;
    assert!(((dx * dx + dy * dy).sqrt() - 1.5).abs() < 1e-3);
}

#[test]
fn enemy_keeps_heading_before_countdown() {
    let mut rng = seeded_rng();
    let mut e = enemy_at(400.0, 300.0, 1.0);
    for _ in 0..99 {
        update_enemy(&mut e, &arena(), &mut rng);
    }
    assert_eq!(e.direction, 1.0);
    assert_eq!(e.wander_ticks, 100);
    assert_eq!(e.tick_counter, 99);
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[test]
fn tick_entity_dispatches_by_kind() {
    let mut rng = seeded_rng();
    let mut entities = vec![
        Entity::Resource(Resource::new(ResourceKind::Basic, 200.0, 200.0)),
        Entity::Enemy(enemy_at(400.0, 300.0, 0.0)),
        Entity::PowerUp(PowerUp::new(PowerUpKind::Speed, 600.0, 200.0)),
    ];
    for e in &mut entities {
        tick_entity(e, &arena(), &mut rng);
    }
    match &entities[0] {
        Entity::Resource(r) => assert_eq!(r.phase, 1),
        other => panic!("unexpected {:?}", other),
    }
    match &entities[1] {
        Entity::Enemy(e) => assert_eq!(e.tick_counter, 1),
        other => panic!("unexpected {:?}", other),
    }
    match &entities[2] {
        Entity::PowerUp(p) => assert_eq!(p.phase, 1),
        other => panic!("unexpected {:?}", other),
    }
}
