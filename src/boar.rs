use macroquad::prelude::*;

use crate::animation::AnimationClock;
use crate::combat::{self, Facing};
use crate::config::BoarConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoarState {
    Idle,
    Walk,
    Hit { ticks: u32 },
}

impl BoarState {
    pub fn frame_count(self) -> u32 {
        match self {
            Self::Idle => 4,
            Self::Walk => 6,
            Self::Hit { .. } => 4,
        }
    }

    pub fn sheet_key(self) -> &'static str {
        match self {
            Self::Idle => "boar.idle",
            Self::Walk => "boar.walk",
            Self::Hit { .. } => "boar.hit",
        }
    }
}

pub struct Boar {
    pub pos: Vec2,
    pub facing: Facing,
    pub state: BoarState,
    pub clock: AnimationClock,
    pub health: i32,
    pub active: bool,
    pub aggressive: bool,
    pub knockback_speed: f32,
    pub knockback_facing: Facing,
}

impl Boar {
    pub fn new(pos: Vec2, cfg: &BoarConfig) -> Self {
        Self {
            pos,
            facing: Facing::Left,
            state: BoarState::Idle,
            clock: AnimationClock::new(),
            health: cfg.max_health,
            active: true,
            aggressive: false,
            knockback_speed: 0.0,
            knockback_facing: Facing::Left,
        }
    }

    fn enter(&mut self, state: BoarState) {
        self.state = state;
        self.clock.reset();
    }

    /// One tick of behavior. The hit stagger pre-empts everything: while it
    /// runs, the distance-based aggro evaluation is skipped entirely, and
    /// chase resumes only once both the stagger timer and the knockback
    /// motion have finished.
    pub fn update(&mut self, player_x: f32, cfg: &BoarConfig, world_width: f32) {
        if !self.active {
            return;
        }

        if let BoarState::Hit { ticks } = self.state {
            self.step_knockback(cfg);
            let ticks = ticks + 1;
            if ticks >= cfg.hit_duration && self.knockback_speed == 0.0 {
                self.enter(BoarState::Idle);
            } else {
                self.state = BoarState::Hit { ticks };
            }
            self.pos.x = self.pos.x.clamp(0.0, world_width);
            return;
        }

        // Aggro is re-derived from raw distance every tick, not edge-triggered.
        let distance = (player_x - self.pos.x).abs();
        if distance < cfg.detection_range {
            self.aggressive = true;
            self.facing = if player_x < self.pos.x {
                Facing::Left
            } else {
                Facing::Right
            };
            if distance > cfg.attack_range {
                self.pos.x += self.facing.sign() * cfg.speed;
                if self.state != BoarState::Walk {
                    self.enter(BoarState::Walk);
                }
            } else if self.state != BoarState::Idle {
                // In striking range: stand ground.
                self.enter(BoarState::Idle);
            }
        } else {
            self.aggressive = false;
            if self.state != BoarState::Idle {
                self.enter(BoarState::Idle);
            }
        }

        self.pos.x = self.pos.x.clamp(0.0, world_width);
    }

    /// Geometric knockback decay, snapped to zero once below 0.5.
    fn step_knockback(&mut self, cfg: &BoarConfig) {
        if self.knockback_speed <= 0.0 {
            return;
        }
        self.pos.x += self.knockback_facing.sign() * self.knockback_speed;
        self.knockback_speed *= cfg.knockback_decay;
        if self.knockback_speed < 0.5 {
            self.knockback_speed = 0.0;
        }
    }

    /// The stagger animation runs at double rate.
    pub fn advance_animation(&mut self, cfg: &BoarConfig) {
        if !self.active {
            return;
        }
        let delay = match self.state {
            BoarState::Hit { .. } => cfg.frame_delay / 2,
            _ => cfg.frame_delay,
        };
        self.clock.advance(self.state.frame_count(), delay);
    }

    /// Applies damage and enters the stagger unconditionally, shoving the
    /// boar away opposite to where it was facing when struck.
    pub fn take_hit(&mut self, amount: i32, cfg: &BoarConfig) {
        if !self.active {
            return;
        }
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.active = false;
            return;
        }
        self.knockback_facing = self.facing.opposite();
        self.knockback_speed = cfg.knockback_speed;
        self.enter(BoarState::Hit { ticks: 0 });
    }

    pub fn body_hitbox(&self, cfg: &BoarConfig) -> Rect {
        combat::body_hitbox(self.pos, cfg.width, cfg.height)
    }
}
