use super::Cell;

/// Trait for cellular automaton rules
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3 | 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Seeds (B2/S)
/// Every live cell dies each generation
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule) as Box<dyn Rule>,
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
    ]
}

/// Look up a rule by name, case-insensitive
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name))
}
