use macroquad::prelude::*;

use crate::animation::AnimationClock;
use crate::combat::Facing;
use crate::config::PlayerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    Attack1,
    Attack2,
}

/// Animation state with per-state data. Attacking and jumping are distinct
/// variants, so they cannot be true at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walk,
    Run,
    Jump { elapsed_frames: u32 },
    Attack { kind: AttackKind, elapsed_frames: u32, has_hit: bool },
}

impl PlayerState {
    pub fn frame_count(self) -> u32 {
        match self {
            Self::Idle => 7,
            Self::Walk => 8,
            Self::Run => 8,
            Self::Jump { .. } => 5,
            Self::Attack { .. } => 6,
        }
    }

    pub fn sheet_key(self) -> &'static str {
        match self {
            Self::Idle => "player.idle",
            Self::Walk => "player.walk",
            Self::Run => "player.run",
            Self::Jump { .. } => "player.jump",
            Self::Attack { kind: AttackKind::Attack1, .. } => "player.attack1",
            Self::Attack { kind: AttackKind::Attack2, .. } => "player.attack2",
        }
    }

    pub fn is_attacking(self) -> bool {
        matches!(self, Self::Attack { .. })
    }

    pub fn is_jumping(self) -> bool {
        matches!(self, Self::Jump { .. })
    }
}

pub struct Player {
    pub pos: Vec2,
    pub facing: Facing,
    pub state: PlayerState,
    pub clock: AnimationClock,
    pub velocity_y: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            facing: Facing::Right,
            state: PlayerState::Idle,
            clock: AnimationClock::new(),
            velocity_y: 0.0,
        }
    }

    fn enter(&mut self, state: PlayerState) {
        self.state = state;
        self.clock.reset();
    }

    fn start_jump(&mut self, cfg: &PlayerConfig) {
        if self.state.is_jumping() {
            return;
        }
        self.enter(PlayerState::Jump { elapsed_frames: 0 });
        self.velocity_y = -cfg.jump_speed;
    }

    fn start_attack(&mut self, kind: AttackKind) {
        self.enter(PlayerState::Attack {
            kind,
            elapsed_frames: 0,
            has_hit: false,
        });
    }

    /// One tick of input handling and physics, in the fixed order: jump
    /// trigger, horizontal movement (suppressed while attacking), attack
    /// triggers, jump integration, world clamp.
    pub fn update(&mut self, controls: &crate::input::Controls, cfg: &PlayerConfig, world_width: f32) {
        if controls.jump && !self.state.is_jumping() && !self.state.is_attacking() {
            self.start_jump(cfg);
        }

        if !self.state.is_attacking() {
            let mut moving = false;
            let running = controls.run && (controls.left || controls.right);
            let speed = if running { cfg.run_speed } else { cfg.walk_speed };

            if controls.left {
                self.pos.x -= speed;
                self.facing = Facing::Left;
                moving = true;
            }
            if controls.right {
                self.pos.x += speed;
                self.facing = Facing::Right;
                moving = true;
            }

            // Movement never overrides the jump state mid-air.
            if !self.state.is_jumping() {
                let next = if moving {
                    if running { PlayerState::Run } else { PlayerState::Walk }
                } else {
                    PlayerState::Idle
                };
                if next != self.state {
                    self.enter(next);
                }
            }
        }

        if !self.state.is_attacking() && !self.state.is_jumping() {
            if controls.attack1 {
                self.start_attack(AttackKind::Attack1);
            } else if controls.attack2 {
                self.start_attack(AttackKind::Attack2);
            }
        }

        if self.state.is_jumping() {
            self.velocity_y += cfg.gravity;
            self.pos.y += self.velocity_y;
            if self.pos.y >= cfg.ground_y {
                self.pos.y = cfg.ground_y;
                self.velocity_y = 0.0;
            }
        }

        self.pos.x = self.pos.x.clamp(0.0, world_width);
    }

    /// Advances the animation clock and runs the frame-counted exit
    /// transitions: attacks end after one full pass through their frames,
    /// jumps end only once the animation has played out AND the player has
    /// landed.
    pub fn advance_animation(&mut self, cfg: &PlayerConfig) {
        let advanced = self.clock.advance(self.state.frame_count(), cfg.frame_delay);
        if !advanced {
            return;
        }

        let frame_count = self.state.frame_count();
        match self.state {
            PlayerState::Attack { kind, elapsed_frames, has_hit } => {
                let elapsed_frames = elapsed_frames + 1;
                if elapsed_frames >= frame_count {
                    self.enter(PlayerState::Idle);
                } else {
                    self.state = PlayerState::Attack { kind, elapsed_frames, has_hit };
                }
            }
            PlayerState::Jump { elapsed_frames } => {
                let elapsed_frames = elapsed_frames + 1;
                if elapsed_frames >= frame_count && self.pos.y >= cfg.ground_y {
                    self.enter(PlayerState::Idle);
                } else {
                    self.state = PlayerState::Jump { elapsed_frames };
                }
            }
            _ => {}
        }
    }

    /// Frame-graded sword hitbox: active only on animation frames 2..=4,
    /// with width and forward reach varying per frame to track the swing
    /// arc. `None` outside the active window.
    pub fn attack_hitbox(&self) -> Option<Rect> {
        if !self.state.is_attacking() {
            return None;
        }
        let (width, offset) = match self.clock.frame {
            2 => (40.0, 40.0),
            3 => (60.0, 50.0),
            4 => (50.0, 45.0),
            _ => return None,
        };
        let x = match self.facing {
            Facing::Right => self.pos.x + offset,
            Facing::Left => self.pos.x - offset - width,
        };
        Some(Rect::new(x, self.pos.y - 40.0, width, 80.0))
    }

    pub fn attack_has_hit(&self) -> Option<bool> {
        match self.state {
            PlayerState::Attack { has_hit, .. } => Some(has_hit),
            _ => None,
        }
    }

    pub fn mark_attack_hit(&mut self) {
        if let PlayerState::Attack { has_hit, .. } = &mut self.state {
            *has_hit = true;
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::Controls;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn player(cfg: &GameConfig) -> Player {
        Player::new(vec2(400.0, cfg.player.ground_y))
    }

    fn tick(p: &mut Player, controls: Controls, cfg: &GameConfig) {
        p.update(&controls, &cfg.player, cfg.world.width);
        p.advance_animation(&cfg.player);
    }

    #[test]
    fn walk_run_idle_transitions() {
        let cfg = cfg();
        let mut p = player(&cfg);

        tick(&mut p, Controls { right: true, ..Default::default() }, &cfg);
        assert_eq!(p.state, PlayerState::Walk);
        assert_eq!(p.pos.x, 403.0);
        assert_eq!(p.facing, Facing::Right);

        tick(&mut p, Controls { right: true, run: true, ..Default::default() }, &cfg);
        assert_eq!(p.state, PlayerState::Run);
        assert_eq!(p.pos.x, 409.0);

        tick(&mut p, Controls::default(), &cfg);
        assert_eq!(p.state, PlayerState::Idle);
    }

    #[test]
    fn frame_index_stays_in_bounds() {
        let cfg = cfg();
        let mut p = player(&cfg);
        let inputs = [
            Controls { right: true, ..Default::default() },
            Controls { jump: true, ..Default::default() },
            Controls { attack1: true, ..Default::default() },
            Controls { left: true, run: true, ..Default::default() },
            Controls::default(),
        ];
        for i in 0..600 {
            tick(&mut p, inputs[i % inputs.len()], &cfg);
            assert!(p.clock.frame < p.state.frame_count());
        }
    }

    #[test]
    fn jump_trigger_is_idempotent_while_airborne() {
        let cfg = cfg();
        let mut p = player(&cfg);

        tick(&mut p, Controls { jump: true, ..Default::default() }, &cfg);
        assert!(p.state.is_jumping());
        let v = p.velocity_y;

        // Holding jump must not re-apply the launch impulse.
        tick(&mut p, Controls { jump: true, ..Default::default() }, &cfg);
        assert!(p.state.is_jumping());
        assert_eq!(p.velocity_y, v + cfg.player.gravity);
    }

    #[test]
    fn jump_parabola_returns_to_ground() {
        let cfg = cfg();
        let mut p = player(&cfg);
        let apex_limit = cfg.player.ground_y
            - cfg.player.jump_speed * cfg.player.jump_speed / (2.0 * cfg.player.gravity);

        tick(&mut p, Controls { jump: true, ..Default::default() }, &cfg);
        let mut min_y = p.pos.y;
        for _ in 0..200 {
            tick(&mut p, Controls::default(), &cfg);
            min_y = min_y.min(p.pos.y);
        }
        assert!(min_y >= apex_limit);
        assert!(min_y < cfg.player.ground_y);
        assert_eq!(p.pos.y, cfg.player.ground_y);
        assert_eq!(p.state, PlayerState::Idle);
    }

    #[test]
    fn jump_exit_requires_landing_and_full_animation() {
        let cfg = cfg();
        let mut p = player(&cfg);

        tick(&mut p, Controls { jump: true, ..Default::default() }, &cfg);
        // 5 jump frames at delay 8 = 40 ticks of animation; the parabola at
        // jump_speed 8 / gravity 0.5 lands after 32 ticks, so the player
        // touches down first and must stay in Jump until the animation
        // finishes.
        for _ in 0..35 {
            tick(&mut p, Controls::default(), &cfg);
        }
        assert!(p.pos.y >= cfg.player.ground_y);
        assert!(p.state.is_jumping());
        for _ in 0..8 {
            tick(&mut p, Controls::default(), &cfg);
        }
        assert_eq!(p.state, PlayerState::Idle);
    }

    #[test]
    fn jump_exit_requires_full_animation_and_landing() {
        // Raise the launch speed so the airtime (47 ticks) outlasts the
        // 5-frame animation (40 ticks): the opposite ordering from the
        // default tuning.
        let mut cfg = cfg();
        cfg.player.jump_speed = 12.0;
        let mut p = player(&cfg);

        tick(&mut p, Controls { jump: true, ..Default::default() }, &cfg);
        for _ in 0..41 {
            tick(&mut p, Controls::default(), &cfg);
        }
        // Animation has played out, but the player is still in the air.
        assert!(p.pos.y < cfg.player.ground_y);
        assert!(p.state.is_jumping());

        for _ in 0..10 {
            tick(&mut p, Controls::default(), &cfg);
        }
        assert_eq!(p.pos.y, cfg.player.ground_y);
        assert_eq!(p.state, PlayerState::Idle);
    }

    #[test]
    fn second_attack_uses_its_own_sheet() {
        let cfg = cfg();
        let mut p = player(&cfg);

        tick(&mut p, Controls { attack2: true, ..Default::default() }, &cfg);
        assert!(matches!(
            p.state,
            PlayerState::Attack { kind: AttackKind::Attack2, .. }
        ));
        assert_eq!(p.state.sheet_key(), "player.attack2");
        assert_eq!(p.state.frame_count(), 6);

        for _ in 0..(6 * cfg.player.frame_delay - 1) {
            tick(&mut p, Controls::default(), &cfg);
        }
        assert_eq!(p.state, PlayerState::Idle);
    }

    #[test]
    fn attack_runs_to_completion() {
        let cfg = cfg();
        let mut p = player(&cfg);

        tick(&mut p, Controls { attack1: true, ..Default::default() }, &cfg);
        assert!(p.state.is_attacking());
        assert_eq!(p.attack_has_hit(), Some(false));

        // Movement input is ignored for the duration of the swing. The
        // swing is 6 frames at delay 8: 48 ticks from start to exit.
        let x = p.pos.x;
        for _ in 0..(6 * cfg.player.frame_delay - 2) {
            tick(&mut p, Controls { right: true, run: true, ..Default::default() }, &cfg);
        }
        assert!(p.state.is_attacking());
        assert_eq!(p.pos.x, x);

        tick(&mut p, Controls::default(), &cfg);
        assert_eq!(p.state, PlayerState::Idle);
        assert_eq!(p.clock.frame, 0);
    }

    #[test]
    fn attack_hitbox_mirrors_facing() {
        let cfg = cfg();
        let mut p = player(&cfg);
        tick(&mut p, Controls { left: true, ..Default::default() }, &cfg);
        tick(&mut p, Controls { attack1: true, ..Default::default() }, &cfg);
        while p.clock.frame != 3 {
            tick(&mut p, Controls::default(), &cfg);
        }
        let hb = p.attack_hitbox().unwrap();
        assert_eq!(hb.x, p.pos.x - 50.0 - 60.0);
        assert_eq!(hb.y, p.pos.y - 40.0);
        assert_eq!(hb.h, 80.0);
    }

    #[test]
    fn position_clamped_to_world() {
        let cfg = cfg();
        let mut p = Player::new(vec2(2.0, cfg.player.ground_y));
        for _ in 0..5 {
            tick(&mut p, Controls { left: true, run: true, ..Default::default() }, &cfg);
        }
        assert_eq!(p.pos.x, 0.0);
    }
}
