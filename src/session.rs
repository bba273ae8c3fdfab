/// The game session: owns every entity and runs the per-frame pipeline.
///
/// Randomness is injected on every call that needs it (`new`, `update`,
/// `reset`) so a seeded RNG reproduces a whole session.

use log::{debug, info};
use rand::Rng;

use crate::compute::{apply_power_up, is_dimmed, take_damage, tick_entity, update_player};
use crate::entities::{
    Arena, Entity, FrameEvent, GameStatus, Intent, Player, PlayerId, Sprite, SpriteKind,
};
use crate::spawn::{
    initial_population, level_up_reinforcements, roll_enemy, roll_power_up, roll_resource,
    should_level_up,
};

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    /// Indexed by `PlayerId::index`.
    pub players: [Player; 2],
    /// Resources, enemies and power-ups in spawn order.
    pub entities: Vec<Entity>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub arena: Arena,
    pub frame: u64,
}

impl GameSession {
    /// A fresh session with the initial population already spawned.
    pub fn new(arena: Arena, rng: &mut impl Rng) -> Self {
        GameSession {
            players: fresh_players(&arena),
            entities: initial_population(&arena, rng),
            score: 0,
            level: 1,
            status: GameStatus::Playing,
            arena,
            frame: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn resource_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_resource()).count()
    }

    pub fn enemy_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_enemy()).count()
    }

    pub fn power_up_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_power_up()).count()
    }

    /// Advance the simulation by one tick.
    ///
    /// `intents` is indexed like `players`.  Does nothing once the game is over.
    pub fn update(&mut self, intents: [Intent; 2], rng: &mut impl Rng) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        if self.is_game_over() {
            return events;
        }
        self.frame += 1;

        // ── 1. Advance every entity ───────────────────────────────────────────
        for (player, intent) in self.players.iter_mut().zip(intents) {
            update_player(player, intent, &self.arena);
        }
        for entity in &mut self.entities {
            tick_entity(entity, &self.arena, rng);
        }

        // ── 2–4. Collisions ───────────────────────────────────────────────────
        self.resolve_collisions(&mut events);
        if self.is_game_over() {
            return events;
        }

        // ── 5. Spawning ───────────────────────────────────────────────────────
        if let Some(resource) = roll_resource(self.resource_count(), &self.arena, rng) {
            debug!("spawned {:?} resource", resource.kind);
            self.entities.push(Entity::Resource(resource));
        }
        if let Some(enemy) = roll_enemy(self.enemy_count(), self.level, &self.arena, rng) {
            debug!("spawned enemy at ({:.0}, {:.0})", enemy.body.x, enemy.body.y);
            self.entities.push(Entity::Enemy(enemy));
        }
        if let Some(power_up) = roll_power_up(self.power_up_count(), &self.arena, rng) {
            debug!("spawned {:?} power-up", power_up.kind);
            self.entities.push(Entity::PowerUp(power_up));
        }

        // ── 6. Level progression ──────────────────────────────────────────────
        if should_level_up(self.score, self.level) {
            self.level += 1;
            let reinforcements = level_up_reinforcements(&self.arena, rng);
            self.entities.extend(reinforcements.into_iter().map(Entity::Enemy));
            info!("level up: now level {} (score {})", self.level, self.score);
            events.push(FrameEvent::LevelUp { level: self.level });
        }

        events
    }

    /// Players are processed one after another against shared pools, so when
    /// both overlap the same collectible, Player One takes it.  Claimed entities
    /// go on a removal list that is applied once every player has been checked.
    fn resolve_collisions(&mut self, events: &mut Vec<FrameEvent>) {
        let mut removed = vec![false; self.entities.len()];

        for player in &mut self.players {
            for (i, entity) in self.entities.iter().enumerate() {
                if removed[i] || !player.body.overlaps(entity.body()) {
                    continue;
                }
                if let Entity::Resource(resource) = entity {
                    let value = resource.kind.value();
                    self.score += value;
                    player.resources_collected += value;
                    removed[i] = true;
                    events.push(FrameEvent::ResourceCollected {
                        player: player.id,
                        kind: resource.kind,
                    });
                }
            }
        }

        for player in &mut self.players {
            for (i, entity) in self.entities.iter().enumerate() {
                if removed[i] || !player.body.overlaps(entity.body()) {
                    continue;
                }
                if let Entity::PowerUp(power_up) = entity {
                    apply_power_up(player, power_up.kind);
                    removed[i] = true;
                    events.push(FrameEvent::PowerUpCollected {
                        player: player.id,
                        kind: power_up.kind,
                    });
                }
            }
        }

        let mut index = 0;
        self.entities.retain(|_| {
            let keep = !removed[index];
            index += 1;
            keep
        });

        // Every player is checked, even once someone has run out of lives.
        let mut anyone_out = false;
        for player in &mut self.players {
            let touching_enemy = self
                .entities
                .iter()
                .any(|e| e.is_enemy() && player.body.overlaps(e.body()));
            if !touching_enemy || !take_damage(player) {
                continue;
            }
            debug!("{:?} hit, {} lives left", player.id, player.lives);
            events.push(FrameEvent::PlayerHit {
                player: player.id,
                lives_left: player.lives,
            });
            anyone_out |= player.lives == 0;
        }

        if anyone_out {
            self.status = GameStatus::GameOver;
            info!(
                "game over: score {}, level {}, frame {}",
                self.score, self.level, self.frame
            );
            events.push(FrameEvent::GameOver);
        }
    }

    /// Start over.  Only honoured while the game is over; returns whether it happened.
    pub fn reset(&mut self, rng: &mut impl Rng) -> bool {
        if !self.is_game_over() {
            return false;
        }
        *self = GameSession::new(self.arena, rng);
        info!("session reset");
        true
    }

    /// Record new arena dimensions after a display-mode change.  Entities are
    /// left where they are; movement clamps them back in on their next update.
    pub fn resize_arena(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        info!(
            "arena resized to {:.0}x{:.0}",
            self.arena.width, self.arena.height
        );
    }

    /// Everything a renderer needs, players last so they draw on top.
    pub fn sprites(&self) -> Vec<Sprite> {
        let world = self.entities.iter().map(|entity| {
            let kind = match entity {
                Entity::Resource(r) => SpriteKind::Resource(r.kind),
                Entity::Enemy(_) => SpriteKind::Enemy,
                Entity::PowerUp(p) => SpriteKind::PowerUp(p.kind),
            };
            Sprite {
                kind,
                body: *entity.body(),
                dimmed: false,
            }
        });
        let players = self.players.iter().map(|p| Sprite {
            kind: SpriteKind::Player(p.id),
            body: p.body,
            dimmed: is_dimmed(p),
        });
        world.chain(players).collect()
    }
}

fn fresh_players(arena: &Arena) -> [Player; 2] {
    PlayerId::ALL.map(|id| Player::spawn(id, arena))
}
