// view.rs - Screen <-> universe mapping and the auto-pan camera

use std::ops::RangeInclusive;
use std::time::Duration;

use torus_life::wrap;

pub const CELL_SIZE: f32 = 8.0;

/// Pixels per millisecond.
pub const PAN_SPEED: f32 = 0.02;
/// Longer frames (e.g. window in background) are capped to avoid a jump.
const MAX_PAN_DT_MS: f32 = 100.0;

/// Maps a point in viewport pixels to the wrapped grid cell under it.
pub fn screen_to_cell(
    sx: f32,
    sy: f32,
    pan_x: f32,
    pan_y: f32,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let wx = sx + pan_x;
    let wy = sy + pan_y;
    (
        wrap((wx / CELL_SIZE) as i32, width),
        wrap((wy / CELL_SIZE) as i32, height),
    )
}

/// Copies of the universe needed to cover `[pan, pan + extent]` on one axis.
pub fn tile_range(pan: f32, extent: f32, universe: f32) -> RangeInclusive<i32> {
    (pan / universe).floor() as i32..=((pan + extent) / universe).floor() as i32
}

/// Camera that drifts right forever and zig-zags vertically between the
/// top and bottom of the universe.
#[derive(Debug, Clone)]
pub struct AutoPan {
    pub x: f32,
    pub y: f32,
    pub stopped: bool,
    dir_y: f32,
    universe_w: f32,
    universe_h: f32,
}

impl AutoPan {
    pub fn new(grid_width: i32, grid_height: i32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            stopped: false,
            dir_y: 1.0,
            universe_w: grid_width as f32 * CELL_SIZE,
            universe_h: grid_height as f32 * CELL_SIZE,
        }
    }

    pub fn universe_size(&self) -> (f32, f32) {
        (self.universe_w, self.universe_h)
    }

    pub fn toggle(&mut self) {
        self.stopped = !self.stopped;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.stopped {
            return;
        }
        let dt_ms = (dt.as_secs_f32() * 1000.0).min(MAX_PAN_DT_MS);
        if dt_ms <= 0.0 {
            return;
        }
        let step = PAN_SPEED * dt_ms;

        self.x += step;
        if self.x >= self.universe_w {
            self.x -= self.universe_w;
        }

        self.y += self.dir_y * step;
        if self.y >= self.universe_h {
            self.y = self.universe_h;
            self.dir_y = -1.0;
        }
        if self.y <= 0.0 {
            self.y = 0.0;
            self.dir_y = 1.0;
        }
    }
}
