use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;

mod animation;
mod assets;
mod boar;
mod camera;
mod combat;
mod config;
mod game;
mod input;
mod player;

use assets::SpriteLibrary;
use config::GameConfig;
use game::GameSession;
use input::Controls;

const CONFIG_PATH: &str = "src/assets/config.yaml";
const MANIFEST_PATH: &str = "src/assets/sprites.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "tuskfall".to_owned(),
        window_width: 800,
        window_height: 600,
        sample_count: 1,
        platform: Platform {
            linux_wm_class: "tuskfall",
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sprites = SpriteLibrary::load_from(MANIFEST_PATH)
        .await
        .unwrap_or_else(|err| {
            eprintln!("sprite manifest load failed: {err}");
            SpriteLibrary::empty()
        });

    let mut session = GameSession::new(config);

    while session.running {
        let controls = Controls::poll();
        session.tick(&controls);

        clear_background(BLACK);
        session.draw(&sprites);

        next_frame().await;
    }
}
