use macroquad::prelude::*;

/// Level-triggered control snapshot taken once at the top of every tick.
/// Edge-triggered actions (jump start, attack start) are derived by the
/// entity update code from these plus current state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack1: bool,
    pub attack2: bool,
    pub run: bool,
}

impl Controls {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
            attack1: is_key_down(KeyCode::Z),
            attack2: is_key_down(KeyCode::X),
            run: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        }
    }
}
