/// Spawn policy: stateless functions deciding when and where new entities appear.
///
/// Every draw goes through the injected RNG, in a fixed order, so a seeded
/// generator reproduces the same session.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::compute::{random_direction, random_wander_ticks};
use crate::config::{
    ENEMY_BASE_CAP, ENEMY_EDGE_OFFSET, ENEMY_MAX_SPEED, ENEMY_MIN_SPEED, ENEMY_SPAWN_CHANCE,
    INITIAL_ENEMIES, INITIAL_RESOURCES, LEVEL_UP_ENEMIES, POINTS_PER_LEVEL, POWER_UP_CAP,
    POWER_UP_SPAWN_CHANCE, RESOURCE_CAP, RESOURCE_SPAWN_CHANCE, SPAWN_MARGIN,
};
use crate::entities::{Arena, Enemy, Entity, PowerUp, PowerUpKind, Resource, ResourceKind};

/// Relative odds for gold, crystal, energy and basic (matches `ResourceKind::ALL`).
const RESOURCE_WEIGHTS: [u32; 4] = [10, 20, 30, 40];

// ── Placement ─────────────────────────────────────────────────────────────────

/// A uniform integer point at least `SPAWN_MARGIN` away from every edge.
fn interior_point(arena: &Arena, rng: &mut impl Rng) -> (f32, f32) {
    let margin = SPAWN_MARGIN as i32;
    let x = rng.gen_range(margin..=arena.width as i32 - margin);
    let y = rng.gen_range(margin..=arena.height as i32 - margin);
    (x as f32, y as f32)
}

/// A uniform point on one of the four edges, pushed just outside the arena.
fn edge_point(arena: &Arena, rng: &mut impl Rng) -> (f32, f32) {
    let w = arena.width as i32;
    let h = arena.height as i32;
    match rng.gen_range(0..4) {
        0 => (rng.gen_range(0..=w) as f32, -ENEMY_EDGE_OFFSET),
        1 => (rng.gen_range(0..=w) as f32, arena.height + ENEMY_EDGE_OFFSET),
        2 => (-ENEMY_EDGE_OFFSET, rng.gen_range(0..=h) as f32),
        _ => (arena.width + ENEMY_EDGE_OFFSET, rng.gen_range(0..=h) as f32),
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

pub fn spawn_resource(arena: &Arena, rng: &mut impl Rng) -> Resource {
    let (x, y) = interior_point(arena, rng);
    let kind = WeightedIndex::new(RESOURCE_WEIGHTS)
        .map_or(ResourceKind::Basic, |weights| ResourceKind::ALL[weights.sample(rng)]);
    Resource::new(kind, x, y)
}

pub fn spawn_enemy(arena: &Arena, rng: &mut impl Rng) -> Enemy {
    let (x, y) = edge_point(arena, rng);
    let speed = rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    let direction = random_direction(rng);
    let wander_ticks = random_wander_ticks(rng);
    Enemy::new(x, y, speed, direction, wander_ticks)
}

pub fn spawn_power_up(arena: &Arena, rng: &mut impl Rng) -> PowerUp {
    let (x, y) = interior_point(arena, rng);
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::Speed
    } else {
        PowerUpKind::Shield
    };
    PowerUp::new(kind, x, y)
}

// ── Per-frame gates ───────────────────────────────────────────────────────────
//
// The chance roll only happens once the count gate has passed, so a full pool
// consumes no randomness.

pub fn roll_resource(live: usize, arena: &Arena, rng: &mut impl Rng) -> Option<Resource> {
    if live < RESOURCE_CAP && rng.gen_bool(RESOURCE_SPAWN_CHANCE) {
        Some(spawn_resource(arena, rng))
    } else {
        None
    }
}

/// The enemy cap grows with the level.
pub fn enemy_cap(level: u32) -> usize {
    ENEMY_BASE_CAP + level as usize
}

pub fn roll_enemy(live: usize, level: u32, arena: &Arena, rng: &mut impl Rng) -> Option<Enemy> {
    if live < enemy_cap(level) && rng.gen_bool(ENEMY_SPAWN_CHANCE) {
        Some(spawn_enemy(arena, rng))
    } else {
        None
    }
}

pub fn roll_power_up(live: usize, arena: &Arena, rng: &mut impl Rng) -> Option<PowerUp> {
    if live < POWER_UP_CAP && rng.gen_bool(POWER_UP_SPAWN_CHANCE) {
        Some(spawn_power_up(arena, rng))
    } else {
        None
    }
}

// ── Session setup & progression ───────────────────────────────────────────────

/// The population a session starts (and restarts) with: resources first, then enemies.
pub fn initial_population(arena: &Arena, rng: &mut impl Rng) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(INITIAL_RESOURCES + INITIAL_ENEMIES);
    for _ in 0..INITIAL_RESOURCES {
        entities.push(Entity::Resource(spawn_resource(arena, rng)));
    }
    for _ in 0..INITIAL_ENEMIES {
        entities.push(Entity::Enemy(spawn_enemy(arena, rng)));
    }
    entities
}

pub fn should_level_up(score: u32, level: u32) -> bool {
    score > level * POINTS_PER_LEVEL
}

/// Enemies added on level-up, bypassing the chance roll.
pub fn level_up_reinforcements(arena: &Arena, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..LEVEL_UP_ENEMIES).map(|_| spawn_enemy(arena, rng)).collect()
}
