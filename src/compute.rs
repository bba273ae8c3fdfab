/// Per-tick entity rules.
///
/// Each function advances a single entity by exactly one tick.  The only side
/// effect besides the entity itself is the injected RNG, which enemies draw from
/// when they change heading.

use std::f32::consts::{FRAC_1_SQRT_2, PI, TAU};

use rand::Rng;

use crate::config::{
    ENEMY_MAX_WANDER_TICKS, ENEMY_MIN_WANDER_TICKS, FLICKER_HALF_CYCLE, PLAYER_MAX_SPEED,
};
use crate::entities::{Arena, Enemy, Entity, Intent, Player, PowerUp, PowerUpKind, Resource};

// ── Player ────────────────────────────────────────────────────────────────────

/// Move the player along `intent` and count down invulnerability.
///
/// Diagonal input is scaled by 1/√2 so diagonal speed equals axis speed.
/// The box is clamped to the arena afterwards; players never bounce.
pub fn update_player(player: &mut Player, intent: Intent, arena: &Arena) {
    let mut dx = f32::from(intent.dx) * player.speed;
    let mut dy = f32::from(intent.dy) * player.speed;
    if dx != 0.0 && dy != 0.0 {
        dx *= FRAC_1_SQRT_2;
        dy *= FRAC_1_SQRT_2;
    }

    player.body.x += dx;
    player.body.y += dy;
    player.body.clamp_to(arena);

    player.invulnerable_ticks = player.invulnerable_ticks.saturating_sub(1);
}

/// Returns `true` if a life was taken.  A no-op while invulnerable.
pub fn take_damage(player: &mut Player) -> bool {
    if player.is_invulnerable() {
        return false;
    }
    player.lives = player.lives.saturating_sub(1);
    player.arm_invulnerability();
    true
}

/// Flicker hint for renderers: off for 5 ticks out of every 10 while invulnerable.
pub fn is_dimmed(player: &Player) -> bool {
    player.is_invulnerable() && player.invulnerable_ticks % (FLICKER_HALF_CYCLE * 2) < FLICKER_HALF_CYCLE
}

pub fn apply_power_up(player: &mut Player, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => player.speed = (player.speed + 1.0).min(PLAYER_MAX_SPEED),
        PowerUpKind::Shield => player.lives += 1,
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

fn bob_offset(phase: u32, amplitude: f32, rate: f32) -> f32 {
    (amplitude * (phase as f32 * rate).sin()).round()
}

pub fn update_resource(resource: &mut Resource) {
    resource.phase += 1;
    resource.body.y += bob_offset(resource.phase, 2.0, 0.1);
}

pub fn update_power_up(power_up: &mut PowerUp) {
    power_up.phase += 1;
    power_up.body.y += bob_offset(power_up.phase, 3.0, 0.2);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

pub fn random_wander_ticks(rng: &mut impl Rng) -> u32 {
    rng.gen_range(ENEMY_MIN_WANDER_TICKS..ENEMY_MAX_WANDER_TICKS)
}

pub fn random_direction(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..TAU)
}

/// Random walk with boundary reflection.
///
/// Horizontal and vertical reflections are independent, so a corner hit flips
/// both.  The box is clamped flush to the edge rather than displaced back.
pub fn update_enemy(enemy: &mut Enemy, arena: &Arena, rng: &mut impl Rng) {
    enemy.tick_counter += 1;
    if enemy.tick_counter >= enemy.wander_ticks {
        enemy.direction = random_direction(rng);
        enemy.wander_ticks = random_wander_ticks(rng);
        enemy.tick_counter = 0;
    }

    enemy.body.x += enemy.direction.cos() * enemy.speed;
    enemy.body.y += enemy.direction.sin() * enemy.speed;

    let body = enemy.body;
    if body.x < 0.0 || body.right() > arena.width {
        enemy.direction = PI - enemy.direction;
    }
    if body.y < 0.0 || body.bottom() > arena.height {
        enemy.direction = -enemy.direction;
    }
    enemy.body.clamp_to(arena);
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Advance any arena entity by one tick.
pub fn tick_entity(entity: &mut Entity, arena: &Arena, rng: &mut impl Rng) {
    match entity {
        Entity::Resource(r) => update_resource(r),
        Entity::Enemy(e) => update_enemy(e, arena, rng),
        Entity::PowerUp(p) => update_power_up(p),
    }
}
