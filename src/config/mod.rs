mod args;
mod engine;

pub use args::{Params, color_from_params, color_or, infer_value, parse_args, parse_env_args};
pub use engine::EngineConfig;
