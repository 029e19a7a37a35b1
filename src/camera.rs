use crate::config::WorldConfig;

/// Side-scrolling camera with a centered dead zone: the view only scrolls
/// once the player crosses out of the band, then clamps to the world edges.
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self { x: 0.0 }
    }

    pub fn follow(&mut self, player_x: f32, cfg: &WorldConfig) {
        let screen_center = cfg.viewport_width / 2.0;
        let dead_zone_left = screen_center - cfg.dead_zone_width / 2.0;
        let dead_zone_right = screen_center + cfg.dead_zone_width / 2.0;

        let player_screen_x = player_x - self.x;
        if player_screen_x < dead_zone_left {
            self.x = player_x - dead_zone_left;
        } else if player_screen_x > dead_zone_right {
            self.x = player_x - dead_zone_right;
        }

        self.x = self.x.clamp(0.0, (cfg.width - cfg.viewport_width).max(0.0));
    }
}
