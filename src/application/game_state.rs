use rand::{SeedableRng, rngs::StdRng};

use super::{InputEvent, Key};
use crate::config::EngineConfig;
use crate::domain::{Cell, CellGeometry, ClickState, Grid, Rule, cell_label, rule_by_name};
use crate::error::{LessonError, Result};

/// Chance of a cell being alive after randomize
const RANDOM_FILL: f64 = 0.3;

/// GameState orchestrates the Game of Life window.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub geometry: CellGeometry,
    pub rule: Box<dyn Rule>,
    pub click: ClickState,
    pub is_running: bool,
    pub is_paused: bool,
    /// One update requested while paused
    pub step_requested: bool,
    pub generation: u64,
    rng: StdRng,
}

impl GameState {
    /// Create game state sized to the configured canvas
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let rule = rule_by_name(&config.rule)
            .ok_or_else(|| LessonError::InvalidArgument(format!("unknown rule `{}`", config.rule)))?;
        let geometry = config.geometry();

        Ok(Self {
            grid: Grid::new(geometry.rows(), geometry.cols()),
            geometry,
            rule,
            click: ClickState::new(),
            is_running: true,
            is_paused: config.start_paused,
            step_requested: false,
            generation: 0,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replace the random source (deterministic tests)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_paused(mut self) -> Self {
        self.is_paused = !self.is_paused;
        log::debug!("{}", if self.is_paused { "paused" } else { "running" });
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        log::debug!("grid cleared");
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut self.rng, RANDOM_FILL);
        self.generation = 0;
        log::debug!("grid randomized, {} alive", self.grid.population());
        self
    }

    /// Toggle the cell under a pixel; clicks off the grid change nothing
    pub fn click(mut self, x: i32, y: i32) -> Self {
        match self.geometry.pixel_to_cell(x, y) {
            Some((row, col)) => {
                self.click.record(x, y);
                self.grid.toggle(row, col);
            }
            None => log::warn!("click at ({}, {}) is outside the grid", x, y),
        }
        self
    }

    /// Apply one input event
    pub fn handle(self, event: InputEvent) -> Self {
        if event.is_quit() {
            return Self { is_running: false, ..self };
        }
        match event {
            InputEvent::MouseDown { x, y } => self.click(x, y),
            InputEvent::KeyDown(Key::Space) => self.toggle_paused(),
            InputEvent::KeyDown(Key::C) => self.clear(),
            InputEvent::KeyDown(Key::R) => self.randomize(),
            InputEvent::KeyDown(Key::N) if self.is_paused => Self { step_requested: true, ..self },
            _ => self,
        }
    }

    /// Apply every event drained this frame
    pub fn handle_all(self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        events.into_iter().fold(self, Self::handle)
    }

    /// Advance one generation when running or a step was requested
    pub fn tick(mut self) -> Self {
        if self.is_paused && !self.step_requested {
            return self;
        }
        self.grid = self.grid.evolve_auto(self.rule.as_ref());
        self.generation += 1;
        self.step_requested = false;
        self
    }

    /// Status line shown in the corner
    pub fn status_label(&self) -> String {
        let mode = if self.is_paused { "Paused" } else { "Running" };
        let base = format!("{} | {} | Gen {}", self.rule.name(), mode, self.generation);
        match self.click.cell(&self.geometry) {
            Some((row, col)) => {
                let cell = self.grid.get(row, col).unwrap_or(Cell::Dead);
                format!("{} | {} {}", base, cell_label(row, col), cell.label())
            }
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&EngineConfig::default()).unwrap().with_seed(42)
    }

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseDown { x, y }
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let s = state();
        assert!(s.is_paused && s.is_running);
        assert_eq!(s.grid.dimensions(), (15, 20));
        assert_eq!(s.grid.population(), 0);
    }

    #[test]
    fn test_click_toggles_cell_under_cursor() {
        let s = state().handle(click(85, 45));
        assert_eq!(s.grid.get(1, 2), Some(Cell::Alive));
        let s = s.handle(click(81, 79));
        assert_eq!(s.grid.get(1, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_click_outside_grid_changes_nothing() {
        let s = state().handle(click(10, 10));
        let before = s.grid.clone();
        let s = s.handle_all([click(-1, 5), click(800, 5), click(5, 600)]);
        assert_eq!(s.grid, before);
        assert_eq!(s.click.pixel(), Some((10, 10)));
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let s = state().handle_all([click(45, 45), click(85, 45), click(125, 45)]);
        let before = s.grid.clone();
        let s = s.tick();
        assert_eq!(s.grid, before);
        assert_eq!(s.generation, 0);
    }

    #[test]
    fn test_running_tick_evolves_blinker() {
        let s = state()
            .handle_all([click(45, 45), click(85, 45), click(125, 45)])
            .handle(InputEvent::KeyDown(Key::Space))
            .tick();
        assert_eq!(s.generation, 1);
        let alive: Vec<_> = s.grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_step_while_paused_advances_once() {
        let s = state().handle(click(45, 45)).handle(InputEvent::KeyDown(Key::N)).tick();
        assert_eq!(s.generation, 1);
        assert_eq!(s.grid.population(), 0);
        let s = s.tick();
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let s = state().randomize();
        assert!(s.grid.population() > 0);
        let s = s.handle(InputEvent::KeyDown(Key::N)).tick();
        assert_eq!(s.generation, 1);
        let s = s.handle(InputEvent::KeyDown(Key::C));
        assert_eq!(s.grid.population(), 0);
        assert_eq!(s.generation, 0);
    }

    #[test]
    fn test_configured_rule_drives_updates() {
        let config = EngineConfig {
            rule: "seeds".to_owned(),
            ..EngineConfig::default()
        };
        let s = GameState::new(&config)
            .unwrap()
            .handle_all([click(45, 45), click(85, 45), InputEvent::KeyDown(Key::N)])
            .tick();
        assert_eq!(s.rule.name(), "Seeds");
        let alive: Vec<_> = s.grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 1), (0, 2), (2, 1), (2, 2)]);
        assert!(s.status_label().starts_with("Seeds | Paused | Gen 1"));
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let config = EngineConfig {
            rule: "brian".to_owned(),
            ..EngineConfig::default()
        };
        assert!(matches!(GameState::new(&config), Err(LessonError::InvalidArgument(_))));
    }

    #[test]
    fn test_quit_and_escape_stop_running() {
        assert!(!state().handle(InputEvent::Quit).is_running);
        assert!(!state().handle(InputEvent::KeyDown(Key::Escape)).is_running);
    }

    #[test]
    fn test_status_label() {
        let s = state();
        assert_eq!(s.status_label(), "Conway | Paused | Gen 0");
        let s = s.handle(click(45, 85));
        assert_eq!(s.status_label(), "Conway | Paused | Gen 0 | [col=1, row=2] Alive");
    }
}
