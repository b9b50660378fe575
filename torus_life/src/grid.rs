// grid.rs - Toroidal Game of Life engine
//
// Two equally sized buffers: `cells` is the current generation, `scratch` is
// only ever written by `step()` and then swapped in.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{LifeError, Result};

pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;

/// Canonical non-negative modulo: always in `[0, size)` for positive `size`.
///
/// Same value as `((v % size) + size) % size`, without the intermediate
/// overflow near `i32::MAX`.
#[inline]
pub fn wrap(v: i32, size: i32) -> i32 {
    v.rem_euclid(size)
}

/// Standard Life rule: survival on 2 or 3, birth on 3.
#[inline]
fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

fn alloc_buffer(cells: usize) -> Result<Vec<bool>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| LifeError::AllocationFailed { cells })?;
    buf.resize(cells, false);
    Ok(buf)
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

// Equality is over the current generation only; `scratch` holds stale data.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// Fails with [`LifeError::InvalidDimensions`] if either side is not
    /// positive, and with [`LifeError::AllocationFailed`] if the two buffers
    /// cannot be reserved. No partial grid is ever returned.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(LifeError::AllocationFailed { cells: usize::MAX })?;

        let cells = alloc_buffer(len)?;
        let scratch = alloc_buffer(len)?;

        debug!(width, height, "created grid");

        Ok(Self {
            width,
            height,
            cells,
            scratch,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let wx = wrap(x, self.width) as usize;
        let wy = wrap(y, self.height) as usize;
        wy * self.width as usize + wx
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
    }

    /// Counts live cells among the 8 surrounding positions, each wrapped
    /// independently on both axes.
    ///
    /// On a grid with a side of 1 or 2 the same cell is reached through more
    /// than one offset and is counted once per offset. A 1x1 grid with its
    /// only cell alive reports 8.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        let cx = wrap(x, self.width);
        let cy = wrap(y, self.height);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.cells[self.index(cx + dx, cy + dy)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation.
    ///
    /// Every cell is computed from `cells` into `scratch`, then the two
    /// buffers trade places. Nothing in `cells` changes until the whole
    /// generation is done.
    pub fn step(&mut self) {
        let width = self.width as usize;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y as usize * width + x as usize;
                let n = self.count_neighbors(x, y);
                let alive = self.cells[idx];
                self.scratch[idx] = next_state(alive, n);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        trace!(population = self.population(), "stepped grid");
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.scratch.fill(false);
    }

    /// Fills the grid with roughly 30% live cells (3 of 10 buckets).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_range(0..10) < 3;
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// FNV-1a over the current buffer in row-major order, one 0/1 value per
    /// cell. Only used as an equality fingerprint; collisions are possible.
    pub fn hash(&self) -> u32 {
        self.cells.iter().fold(FNV_OFFSET_BASIS, |h, &c| {
            (h ^ c as u32).wrapping_mul(FNV_PRIME)
        })
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }
}
