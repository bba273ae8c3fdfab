use std::collections::HashMap;

use resource_rush::entities::*;
use resource_rush::spawn::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn resources_spawn_inside_the_margin() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let r = spawn_resource(&arena, &mut rng);
        let (cx, cy) = r.body.center();
        assert!((50.0..=950.0).contains(&cx));
        assert!((50.0..=650.0).contains(&cy));
        assert_eq!(r.phase, 0);
    }
}

#[test]
fn resource_kinds_follow_their_weights() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    let mut counts: HashMap<ResourceKind, u32> = HashMap::new();
    for _ in 0..10_000 {
        *counts.entry(spawn_resource(&arena, &mut rng).kind).or_default() += 1;
    }
    let share = |k: ResourceKind| f64::from(counts[&k]) / 10_000.0;
    assert!((share(ResourceKind::Gold) - 0.1).abs() < 0.02);
    assert!((share(ResourceKind::Crystal) - 0.2).abs() < 0.02);
    assert!((share(ResourceKind::Energy) - 0.3).abs() < 0.02);
    assert!((share(ResourceKind::Basic) - 0.4).abs() < 0.02);
}

#[test]
fn enemies_spawn_just_outside_an_edge() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let e = spawn_enemy(&arena, &mut rng);
        let (cx, cy) = e.body.center();
        let on_vertical_edge = cx == -25.0 || cx == 1025.0;
        let on_horizontal_edge = cy == -25.0 || cy == 725.0;
        assert!(on_vertical_edge || on_horizontal_edge);
        assert!((1.0..3.0).contains(&e.speed));
        assert!((60..180).contains(&e.wander_ticks));
        assert_eq!(e.tick_counter, 0);
    }
}

#[test]
fn power_ups_pick_both_kinds() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    let kinds: Vec<PowerUpKind> = (0..100)
        .map(|_| spawn_power_up(&arena, &mut rng).kind)
        .collect();
    assert!(kinds.contains(&PowerUpKind::Speed));
    assert!(kinds.contains(&PowerUpKind::Shield));
}

#[test]
fn full_pools_never_spawn() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        assert!(roll_resource(10, &arena, &mut rng).is_none());
        assert!(roll_enemy(3, 1, &arena, &mut rng).is_none());
        assert!(roll_power_up(2, &arena, &mut rng).is_none());
    }
}

#[test]
fn spawn_rates_are_roughly_right() {
    let arena = Arena::default();
    let mut rng = seeded_rng();
    let trials = 100_000;
    let resources = (0..trials)
        .filter(|_| roll_resource(0, &arena, &mut rng).is_some())
        .count();
    let enemies = (0..trials)
        .filter(|_| roll_enemy(0, 1, &arena, &mut rng).is_some())
        .count();
    let power_ups = (0..trials)
        .filter(|_| roll_power_up(0, &arena, &mut rng).is_some())
        .count();
    assert!((1_700..2_300).contains(&resources));
    assert!((800..1_200).contains(&enemies));
    assert!((380..620).contains(&power_ups));
}

#[test]
fn enemy_cap_grows_with_level() {
    assert_eq!(enemy_cap(1), 3);
    assert_eq!(enemy_cap(4), 6);
}

#[test]
fn initial_population_counts() {
    let pop = initial_population(&Arena::default(), &mut seeded_rng());
    assert_eq!(pop.iter().filter(|e| e.is_resource()).count(), 15);
    assert_eq!(pop.iter().filter(|e| e.is_enemy()).count(), 3);
    assert_eq!(pop.len(), 18);
}

#[test]
fn level_threshold_is_strict() {
    assert!(!should_level_up(50, 1));
    assert!(should_level_up(51, 1));
    assert!(!should_level_up(100, 2));
    assert!(should_level_up(101, 2));
}

#[test]
fn level_up_brings_two_enemies() {
    let reinforcements = level_up_reinforcements(&Arena::default(), &mut seeded_rng());
    assert_eq!(reinforcements.len(), 2);
}

#[test]
fn same_seed_same_spawns() {
    let arena = Arena::default();
    let a = initial_population(&arena, &mut StdRng::seed_from_u64(9));
    let b = initial_population(&arena, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}
