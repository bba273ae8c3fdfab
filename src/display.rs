/// Rendering layer.  Every terminal write the game makes goes through here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game logic is performed; this module only translates the
/// session's sprites into terminal commands, scaling logical arena pixels to
/// terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use resource_rush::config::GRID_SPACING;
use resource_rush::display_mode::DisplayMode;
use resource_rush::entities::{
    Arena, Body, PlayerId, PowerUpKind, ResourceKind, Sprite, SpriteKind,
};
use resource_rush::session::GameSession;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_GRID: Color = Color::DarkGreen;
const C_HUD: Color = Color::White;
const C_PLAYER_ONE: Color = Color::Blue;
const C_PLAYER_TWO: Color = Color::Green;
const C_DIMMED: Color = Color::DarkGrey;
const C_ENEMY: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Rows used by the HUD and the top border.
const TOP_ROWS: u16 = 2;
/// Rows used by the bottom border and the controls hint.
const BOTTOM_ROWS: u16 = 2;

fn player_label(id: PlayerId) -> &'static str {
    match id {
        PlayerId::One => "Yoseph",
        PlayerId::Two => "Luka",
    }
}

// ── Arena → terminal mapping ──────────────────────────────────────────────────

/// The rectangle of terminal cells the arena is drawn into.
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
    arena: Arena,
}

impl Viewport {
    fn new(term_cols: u16, term_rows: u16, arena: Arena) -> Self {
        Viewport {
            left: 1,
            top: TOP_ROWS,
            cols: term_cols.saturating_sub(2).max(1),
            rows: term_rows.saturating_sub(TOP_ROWS + BOTTOM_ROWS).max(1),
            arena,
        }
    }

    fn col(&self, x: f32) -> u16 {
        let scaled = (x / self.arena.width * f32::from(self.cols)).floor();
        self.left + (scaled.max(0.0) as u16).min(self.cols - 1)
    }

    fn row(&self, y: f32) -> u16 {
        let scaled = (y / self.arena.height * f32::from(self.rows)).floor();
        self.top + (scaled.max(0.0) as u16).min(self.rows - 1)
    }

    /// Inclusive cell span covered by a body.
    fn span(&self, body: &Body) -> (u16, u16, u16, u16) {
        (
            self.col(body.x),
            self.row(body.y),
            self.col(body.right() - 0.01),
            self.row(body.bottom() - 0.01),
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    mode: DisplayMode,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height, session.arena);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_grid(out, &view)?;
    for sprite in session.sprites() {
        draw_sprite(out, &view, &sprite)?;
    }
    draw_hud(out, session, width)?;
    draw_controls_hint(out, mode, height)?;

    if session.is_game_over() {
        draw_game_over(out, session, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & background ───────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    let bottom = height.saturating_sub(BOTTOM_ROWS);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, TOP_ROWS - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in TOP_ROWS..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// Faint dots where the 50px background grid lines cross.
fn draw_grid<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_GRID))?;
    let mut y = 0.0;
    while y < view.arena.height {
        let mut x = 0.0;
        while x < view.arena.width {
            out.queue(cursor::MoveTo(view.col(x), view.row(y)))?;
            out.queue(Print("·"))?;
            x += GRID_SPACING;
        }
        y += GRID_SPACING;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn resource_look(kind: ResourceKind) -> (&'static str, Color) {
    match kind {
        ResourceKind::Gold => ("◆", Color::Yellow),
        ResourceKind::Crystal => ("◆", Color::Magenta),
        ResourceKind::Energy => ("✦", Color::DarkYellow),
        ResourceKind::Basic => ("•", Color::Green),
    }
}

fn power_up_look(kind: PowerUpKind) -> (&'static str, Color) {
    match kind {
        PowerUpKind::Speed => ("»", Color::DarkYellow),
        PowerUpKind::Shield => ("+", Color::Cyan),
    }
}

fn draw_sprite<W: Write>(out: &mut W, view: &Viewport, sprite: &Sprite) -> std::io::Result<()> {
    match sprite.kind {
        SpriteKind::Player(id) => {
            let color = match (sprite.dimmed, id) {
                (true, _) => C_DIMMED,
                (false, PlayerId::One) => C_PLAYER_ONE,
                (false, PlayerId::Two) => C_PLAYER_TWO,
            };
            let fill = if sprite.dimmed { "▒" } else { "█" };
            let (c0, r0, c1, r1) = view.span(&sprite.body);
            out.queue(style::SetForegroundColor(color))?;
            for row in r0..=r1 {
                out.queue(cursor::MoveTo(c0, row))?;
                out.queue(Print(fill.repeat(usize::from(c1 - c0 + 1))))?;
            }
            // Seat number in the middle of the avatar
            let (cx, cy) = sprite.body.center();
            out.queue(cursor::MoveTo(view.col(cx), view.row(cy)))?;
            out.queue(style::SetForegroundColor(Color::White))?;
            out.queue(Print(match id {
                PlayerId::One => "1",
                PlayerId::Two => "2",
            }))?;
        }
        SpriteKind::Resource(kind) => draw_glyph(out, view, &sprite.body, resource_look(kind))?,
        SpriteKind::PowerUp(kind) => draw_glyph(out, view, &sprite.body, power_up_look(kind))?,
        SpriteKind::Enemy => draw_glyph(out, view, &sprite.body, ("▲", C_ENEMY))?,
    }
    Ok(())
}

/// Small entities are a single glyph at their centre.
fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    body: &Body,
    (glyph, color): (&str, Color),
) -> std::io::Result<()> {
    let (cx, cy) = body.center();
    out.queue(cursor::MoveTo(view.col(cx), view.row(cy)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &GameSession, width: u16) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;

    // Player Two on the left, matching its spawn side
    let two = session.player(PlayerId::Two);
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!(
        "{}: {:>4}  Lives: {}",
        player_label(PlayerId::Two),
        two.resources_collected,
        two.lives
    )))?;

    let level_str = format!("Level {}", session.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(Print(&level_str))?;

    let one = session.player(PlayerId::One);
    let right_str = format!(
        "{}: {:>4}  Lives: {}",
        player_label(PlayerId::One),
        one.resources_collected,
        one.lives
    );
    let rx = width.saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    mode: DisplayMode,
    height: u16,
) -> std::io::Result<()> {
    let mode_str = match mode {
        DisplayMode::Windowed => "Windowed",
        DisplayMode::Fullscreen => "Fullscreen",
    };
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!(
        "Yoseph: Arrows   Luka: WASD   F11/F: {}   Q: Quit",
        mode_str
    )))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &GameSession,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let lines: Vec<(String, Color)> = vec![
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║     GAME  OVER     ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", session.score), Color::Yellow),
        (
            format!(
                "{} resources: {}",
                player_label(PlayerId::One),
                session.player(PlayerId::One).resources_collected
            ),
            Color::White,
        ),
        (
            format!(
                "{} resources: {}",
                player_label(PlayerId::Two),
                session.player(PlayerId::Two).resources_collected
            ),
            Color::White,
        ),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}
