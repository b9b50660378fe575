// simulation.rs - Paced run/pause driver with automatic reseeding
//
// Each tick: step, then reseed if the board died out or hit a state already
// in the recent-hash history.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::LifeConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::HashHistory;
use crate::patterns::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// New state, recorded in the history.
    Advanced,
    /// Every cell died; the grid was reseeded.
    Extinct,
    /// The new state was seen recently; the grid was reseeded.
    LoopDetected,
}

#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    history: HashHistory,
    rng: StdRng,
    paused: bool,
    generation: u64,
    interval: Duration,
    default_interval: Duration,
    min_interval: Duration,
    max_interval: Duration,
    adjust: Duration,
    since_last_step: Duration,
}

impl Simulation {
    /// Builds a paused simulation with an entropy-seeded random source.
    pub fn new(config: &LifeConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`Simulation::new`] but reproducible.
    pub fn with_seed(config: &LifeConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &LifeConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let (min_interval, max_interval) = config.interval_bounds();
        let interval = config.step_interval();

        Ok(Self {
            grid,
            history: HashHistory::new(config.history_capacity),
            rng,
            paused: true,
            generation: 0,
            interval,
            default_interval: interval,
            min_interval,
            max_interval,
            adjust: Duration::from_millis(config.step_adjust_ms),
            since_last_step: Duration::ZERO,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn interval_bounds(&self) -> (Duration, Duration) {
        (self.min_interval, self.max_interval)
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.since_last_step = Duration::ZERO;
    }

    /// Steps once and applies the reseeding policy. Ignores pause state.
    pub fn tick(&mut self) -> TickOutcome {
        self.grid.step();
        self.generation += 1;

        if self.grid.is_empty() {
            info!(generation = self.generation, "population died out, reseeding");
            self.reseed();
            return TickOutcome::Extinct;
        }

        let hash = self.grid.hash();
        if self.history.contains(hash) {
            info!(
                generation = self.generation,
                history = self.history.len(),
                hash,
                "loop detected, reseeding"
            );
            self.reseed();
            return TickOutcome::LoopDetected;
        }

        self.history.push(hash);
        TickOutcome::Advanced
    }

    /// Accumulates `elapsed` and ticks once when a full interval has passed.
    /// Never ticks while paused, and never runs more than one step per call.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        if self.paused {
            return None;
        }
        self.since_last_step += elapsed;
        if self.since_last_step < self.interval {
            return None;
        }
        self.since_last_step = Duration::ZERO;
        Some(self.tick())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_history();
    }

    /// Reseeds and starts running.
    pub fn randomize(&mut self) {
        self.reseed();
        self.set_paused(false);
    }

    fn reseed(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.history.clear();
        self.generation = 0;
    }

    pub fn paint(&mut self, x: i32, y: i32, alive: bool) {
        self.grid.set(x, y, alive);
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.grid.toggle(x, y);
    }

    /// Clears the board and places `pattern` centred on it.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        let (w, h) = pattern.bounds();
        let (gw, gh) = (self.grid.width(), self.grid.height());
        self.grid.clear();
        pattern.place(&mut self.grid, (gw - w) / 2, (gh - h) / 2);
        self.reset_history();
    }

    pub fn faster(&mut self) {
        self.interval = self
            .interval
            .saturating_sub(self.adjust)
            .max(self.min_interval);
    }

    pub fn slower(&mut self) {
        self.interval = (self.interval + self.adjust).min(self.max_interval);
    }

    pub fn reset_speed(&mut self) {
        self.interval = self.default_interval;
    }

    /// Sets the interval directly, clamped into the configured range.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(self.min_interval, self.max_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn small() -> LifeConfig {
        LifeConfig {
            width: 12,
            height: 12,
            ..LifeConfig::default()
        }
    }

    #[test]
    fn starts_paused_and_empty() {
        let sim = Simulation::with_seed(&small(), 1).unwrap();
        assert!(sim.is_paused());
        assert!(sim.grid().is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = LifeConfig {
            height: 0,
            ..LifeConfig::default()
        };
        assert!(Simulation::with_seed(&config, 1).is_err());
    }

    #[test]
    fn extinction_reseeds() {
        let mut sim = Simulation::with_seed(&small(), 5).unwrap();
        sim.paint(3, 3, true);
        assert_eq!(sim.tick(), TickOutcome::Extinct);
        assert!(!sim.grid().is_empty());
        assert!(sim.history().is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn still_life_is_caught_as_loop() {
        let mut sim = Simulation::with_seed(&small(), 5).unwrap();
        sim.load_pattern(patterns::find("Block").unwrap());
        assert_eq!(sim.tick(), TickOutcome::Advanced);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.tick(), TickOutcome::LoopDetected);
        assert!(sim.history().is_empty());
    }

    #[test]
    fn blinker_is_caught_on_third_step() {
        let mut sim = Simulation::with_seed(&small(), 5).unwrap();
        sim.load_pattern(patterns::find("Blinker").unwrap());
        assert_eq!(sim.tick(), TickOutcome::Advanced);
        assert_eq!(sim.tick(), TickOutcome::Advanced);
        assert_eq!(sim.tick(), TickOutcome::LoopDetected);
    }

    #[test]
    fn advance_waits_for_interval() {
        let mut sim = Simulation::with_seed(&small(), 9).unwrap();
        sim.load_pattern(patterns::find("Glider").unwrap());
        assert_eq!(sim.advance(Duration::from_millis(500)), None);

        sim.set_paused(false);
        assert_eq!(sim.advance(Duration::from_millis(60)), None);
        assert_eq!(
            sim.advance(Duration::from_millis(40)),
            Some(TickOutcome::Advanced)
        );
        assert_eq!(sim.generation(), 1);
        // A long frame still runs only one step.
        assert!(sim.advance(Duration::from_secs(5)).is_some());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn speed_is_clamped() {
        let mut sim = Simulation::with_seed(&small(), 1).unwrap();
        for _ in 0..50 {
            sim.faster();
        }
        assert_eq!(sim.interval(), Duration::from_millis(20));
        for _ in 0..50 {
            sim.slower();
        }
        assert_eq!(sim.interval(), Duration::from_millis(500));
        sim.reset_speed();
        assert_eq!(sim.interval(), Duration::from_millis(100));
        sim.set_interval(Duration::from_millis(1));
        assert_eq!(sim.interval(), Duration::from_millis(20));
    }

    #[test]
    fn randomize_unpauses_and_clear_empties() {
        let mut sim = Simulation::with_seed(&small(), 2).unwrap();
        sim.randomize();
        assert!(!sim.is_paused());
        assert!(!sim.grid().is_empty());
        sim.clear();
        assert!(sim.grid().is_empty());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn edits_wrap_and_leave_history_alone() {
        let mut sim = Simulation::with_seed(&small(), 3).unwrap();
        sim.load_pattern(patterns::find("Glider").unwrap());
        sim.tick();
        sim.toggle_cell(-1, -1);
        assert!(sim.grid().get(11, 11));
        sim.paint(12, 12, false);
        assert!(!sim.grid().get(0, 0));
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn load_pattern_centres_on_board() {
        let mut sim = Simulation::with_seed(&small(), 4).unwrap();
        sim.paint(0, 0, true);
        sim.load_pattern(patterns::find("Block").unwrap());
        let cells: Vec<_> = sim.grid().live_cells().collect();
        assert_eq!(cells, vec![(5, 5), (6, 5), (5, 6), (6, 6)]);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn same_seed_same_reseed() {
        let mut a = Simulation::with_seed(&small(), 77).unwrap();
        let mut b = Simulation::with_seed(&small(), 77).unwrap();
        a.randomize();
        b.randomize();
        assert_eq!(a.grid().hash(), b.grid().hash());
    }
}
