use macroquad::prelude::*;

/// Per-entity frame-advance timer. The frame index wraps within the current
/// state's frame count; state transitions call `reset`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationClock {
    pub frame: u32,
    counter: u32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the tick counter; every `delay` ticks the frame index steps
    /// forward, wrapping at `frame_count`. Returns true on the ticks where
    /// the frame actually advanced, which is the signal elapsed-frame
    /// counters (attack/jump completion) key off.
    pub fn advance(&mut self, frame_count: u32, delay: u32) -> bool {
        self.counter += 1;
        if self.counter < delay.max(1) {
            return false;
        }
        self.counter = 0;
        self.frame = (self.frame + 1) % frame_count.max(1);
        true
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.counter = 0;
    }
}

/// Source rectangle for the current frame of a horizontal strip sheet.
pub fn frame_source(sheet: &Texture2D, frame: u32, frame_count: u32) -> Rect {
    let frame_w = sheet.width() / frame_count.max(1) as f32;
    Rect::new(frame as f32 * frame_w, 0.0, frame_w, sheet.height())
}
