use macroquad::prelude::*;

use crate::animation::frame_source;
use crate::assets::SpriteLibrary;
use crate::boar::Boar;
use crate::camera::Camera;
use crate::combat::{self, Facing};
use crate::config::GameConfig;
use crate::input::Controls;
use crate::player::Player;

/// Owns every mutable piece of the session and runs the fixed tick order:
/// player state/physics, boar state/physics, animation advance, combat
/// resolution, camera follow. Drawing is a separate read-only pass.
pub struct GameSession {
    pub config: GameConfig,
    pub player: Player,
    pub boar: Boar,
    pub camera: Camera,
    pub running: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let player = Player::new(vec2(400.0, config.player.ground_y));
        let boar = Boar::new(vec2(700.0, config.player.ground_y), &config.boar);
        Self {
            config,
            player,
            boar,
            camera: Camera::new(),
            running: true,
        }
    }

    pub fn tick(&mut self, controls: &Controls) {
        if !self.running {
            return;
        }

        let world_width = self.config.world.width;
        self.player.update(controls, &self.config.player, world_width);
        self.boar.update(self.player.pos.x, &self.config.boar, world_width);

        self.player.advance_animation(&self.config.player);
        self.boar.advance_animation(&self.config.boar);

        // Combat reads this tick's post-advance frame index.
        combat::resolve_attack(&mut self.player, &mut self.boar, &self.config);

        self.camera.follow(self.player.pos.x, &self.config.world);
    }

    pub fn draw(&self, assets: &SpriteLibrary) {
        self.draw_background(assets);
        self.draw_player(assets);
        self.draw_boar(assets);
    }

    /// Tiled background scrolling at a fraction of the camera speed.
    fn draw_background(&self, assets: &SpriteLibrary) {
        let Some(sheet) = assets.get("background") else {
            return;
        };
        let world = &self.config.world;
        let draw_h = world.viewport_height;
        let draw_w = draw_h * sheet.width() / sheet.height().max(1.0);
        let offset = self.camera.x * world.parallax_factor;

        let tiles = (world.width / draw_w).ceil() as i32 + 1;
        for i in 0..tiles {
            let x = i as f32 * draw_w - offset % draw_w;
            if x < -draw_w || x > world.viewport_width {
                continue;
            }
            draw_texture_ex(
                sheet,
                x,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(draw_w, draw_h)),
                    ..Default::default()
                },
            );
        }
    }

    fn draw_player(&self, assets: &SpriteLibrary) {
        let Some(sheet) = assets.get(self.player.state.sheet_key()) else {
            return;
        };
        let cfg = &self.config.player;
        let screen_x = self.player.pos.x - self.camera.x;
        draw_texture_ex(
            sheet,
            screen_x - cfg.width / 2.0,
            self.player.pos.y - cfg.height / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(cfg.width, cfg.height)),
                source: Some(frame_source(
                    sheet,
                    self.player.clock.frame,
                    self.player.state.frame_count(),
                )),
                // knight sheets face right
                flip_x: self.player.facing == Facing::Left,
                ..Default::default()
            },
        );
    }

    fn draw_boar(&self, assets: &SpriteLibrary) {
        if !self.boar.active {
            return;
        }
        let Some(sheet) = assets.get(self.boar.state.sheet_key()) else {
            return;
        };
        let cfg = &self.config.boar;
        let screen_x = self.boar.pos.x - self.camera.x;
        if screen_x < -cfg.width || screen_x > self.config.world.viewport_width {
            return;
        }
        draw_texture_ex(
            sheet,
            screen_x - cfg.width / 2.0,
            self.boar.pos.y - cfg.height / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(cfg.width, cfg.height)),
                source: Some(frame_source(
                    sheet,
                    self.boar.clock.frame,
                    self.boar.state.frame_count(),
                )),
                // boar sheets face left
                flip_x: self.boar.facing == Facing::Right,
                ..Default::default()
            },
        );

        if self.boar.aggressive {
            self.draw_boar_health(screen_x);
        }
    }

    fn draw_boar_health(&self, screen_x: f32) {
        let cfg = &self.config.boar;
        let bar_w = 80.0;
        let bar_h = 8.0;
        let x = screen_x - bar_w / 2.0;
        let y = self.boar.pos.y - cfg.height / 2.0 - 20.0;
        let fill = self.boar.health as f32 / cfg.max_health.max(1) as f32;

        draw_rectangle(x, y, bar_w, bar_h, Color::new(0.0, 0.0, 0.0, 0.5));
        draw_rectangle(x, y, bar_w * fill, bar_h, Color::new(1.0, 0.0, 0.0, 0.7));
    }
}
