use macroquad::prelude::*;

use crate::boar::Boar;
use crate::config::GameConfig;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Body hitbox: two-thirds of the visual size, centered on the entity
/// position. Deliberately smaller than the sprite so collisions don't feel
/// over-generous.
pub fn body_hitbox(pos: Vec2, width: f32, height: f32) -> Rect {
    Rect::new(
        pos.x - width / 3.0,
        pos.y - height / 3.0,
        width * 2.0 / 3.0,
        height * 2.0 / 3.0,
    )
}

/// Strict AABB overlap: touching edges do not count.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Resolves the player's swing against the boar for one tick. At most one
/// hit lands per attack: the attack's `has_hit` flag gates further damage
/// even if the overlap persists across ticks.
pub fn resolve_attack(player: &mut Player, boar: &mut Boar, cfg: &GameConfig) {
    if !boar.active {
        return;
    }
    if player.attack_has_hit() != Some(false) {
        return;
    }
    let Some(swing) = player.attack_hitbox() else {
        return;
    };

    let body = boar.body_hitbox(&cfg.boar);
    if rects_overlap(swing, body) {
        player.mark_attack_hit();
        boar.take_hit(cfg.player.attack_damage, &cfg.boar);
    }
}
