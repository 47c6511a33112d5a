mod cell;
mod click;
mod color;
mod geometry;
mod grid;
mod motion;
mod rules;

pub use cell::Cell;
pub use click::{ClickState, cell_label, pixel_label};
pub use color::{ColorCycle, Rgba};
pub use color::{AMBER, GRID_LINE, HIGHLIGHT, RED, SALMON, SLATE, WHITE, YELLOW};
pub use geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, CellGeometry, LineEdges};
pub use grid::{Grid, PARALLEL_THRESHOLD};
pub use motion::BouncingRect;
pub use rules::{ConwayRule, HighLifeRule, Rule, SeedsRule, all_rules, rule_by_name};
