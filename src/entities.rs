/// Game entity types: plain data plus the small constructors that give
/// each kind its fixed size.  Per-tick behaviour lives in `compute`.

use crate::config::{
    ARENA_HEIGHT, ARENA_WIDTH, ENEMY_SIZE, INVULNERABLE_TICKS, MIN_ARENA_SIDE, PLAYER_SIZE,
    PLAYER_SPAWN_OFFSET, PLAYER_START_LIVES, PLAYER_START_SPEED, POWER_UP_DURATION,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// The playfield.  Width and height never drop below `MIN_ARENA_SIDE`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Arena {
            width: width.max(MIN_ARENA_SIDE),
            height: height.max(MIN_ARENA_SIDE),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// Shared base data: an axis-aligned box whose `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn centered_at(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Body {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict rectangle intersection; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Pull the box back inside the arena.
    pub fn clamp_to(&mut self, arena: &Arena) {
        if self.x < 0.0 {
            self.x = 0.0;
        }
        if self.right() > arena.width {
            self.x = arena.width - self.width;
        }
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.bottom() > arena.height {
            self.y = arena.height - self.height;
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Which seat a player occupies: decides the control scheme and spawn side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Arrow keys, spawns right of centre.
    One,
    /// WASD, spawns left of centre.
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    fn spawn_offset(self) -> f32 {
        match self {
            PlayerId::One => PLAYER_SPAWN_OFFSET,
            PlayerId::Two => -PLAYER_SPAWN_OFFSET,
        }
    }
}

/// Per-frame directional input.  Each axis is -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub dx: i8,
    pub dy: i8,
}

impl Intent {
    pub const IDLE: Intent = Intent { dx: 0, dy: 0 };

    pub fn new(dx: i8, dy: i8) -> Self {
        Intent {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub body: Body,
    pub speed: f32,
    pub lives: u32,
    /// Ticks left in the invulnerability window; zero means vulnerable.
    pub invulnerable_ticks: u32,
    pub resources_collected: u32,
}

impl Player {
    /// A fresh player at its fixed spawn point for the given arena.
    pub fn spawn(id: PlayerId, arena: &Arena) -> Self {
        Player {
            id,
            body: Body::centered_at(
                arena.width / 2.0 + id.spawn_offset(),
                arena.height / 2.0,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            speed: PLAYER_START_SPEED,
            lives: PLAYER_START_LIVES,
            invulnerable_ticks: 0,
            resources_collected: 0,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    pub fn arm_invulnerability(&mut self) {
        self.invulnerable_ticks = INVULNERABLE_TICKS;
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Gold,
    Crystal,
    Energy,
    Basic,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Gold,
        ResourceKind::Crystal,
        ResourceKind::Energy,
        ResourceKind::Basic,
    ];

    /// Score awarded on collection.
    pub fn value(self) -> u32 {
        match self {
            ResourceKind::Gold => 3,
            ResourceKind::Crystal => 2,
            ResourceKind::Energy => 1,
            ResourceKind::Basic => 1,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            ResourceKind::Gold => 15.0,
            ResourceKind::Crystal => 12.0,
            ResourceKind::Energy => 10.0,
            ResourceKind::Basic => 8.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub body: Body,
    pub phase: u32,
}

impl Resource {
    pub fn new(kind: ResourceKind, cx: f32, cy: f32) -> Self {
        let side = kind.radius() * 2.0;
        Resource {
            kind,
            body: Body::centered_at(cx, cy, side, side),
            phase: 0,
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub speed: f32,
    /// Heading in radians.
    pub direction: f32,
    /// Ticks between re-directions, redrawn each time it elapses.
    pub wander_ticks: u32,
    pub tick_counter: u32,
}

impl Enemy {
    pub fn new(cx: f32, cy: f32, speed: f32, direction: f32, wander_ticks: u32) -> Self {
        Enemy {
            body: Body::centered_at(cx, cy, ENEMY_SIZE, ENEMY_SIZE),
            speed,
            direction,
            wander_ticks,
            tick_counter: 0,
        }
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// +1 speed, capped.
    Speed,
    /// +1 life.
    Shield,
}

impl PowerUpKind {
    pub fn radius(self) -> f32 {
        match self {
            PowerUpKind::Speed => 20.0,
            PowerUpKind::Shield => 18.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub body: Body,
    pub duration: u32,
    pub phase: u32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, cx: f32, cy: f32) -> Self {
        let side = kind.radius() * 2.0;
        PowerUp {
            kind,
            body: Body::centered_at(cx, cy, side, side),
            duration: POWER_UP_DURATION,
            phase: 0,
        }
    }
}

// ── Arena entities ────────────────────────────────────────────────────────────

/// Every non-player entity, stored together in spawn order.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Resource(Resource),
    Enemy(Enemy),
    PowerUp(PowerUp),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Resource(r) => &r.body,
            Entity::Enemy(e) => &e.body,
            Entity::PowerUp(p) => &p.body,
        }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Entity::Resource(_))
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, Entity::Enemy(_))
    }

    pub fn is_power_up(&self) -> bool {
        matches!(self, Entity::PowerUp(_))
    }
}

// ── Session-level data ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Something noteworthy that happened during one `GameSession::update`.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    ResourceCollected { player: PlayerId, kind: ResourceKind },
    PowerUpCollected { player: PlayerId, kind: PowerUpKind },
    PlayerHit { player: PlayerId, lives_left: u32 },
    LevelUp { level: u32 },
    GameOver,
}

/// Render-facing tag: enough for a front end to pick an appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player(PlayerId),
    Resource(ResourceKind),
    Enemy,
    PowerUp(PowerUpKind),
}

/// One drawable entity as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub body: Body,
    /// Rendering hint only: draw at reduced opacity this frame.
    pub dimmed: bool,
}
