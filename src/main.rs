use macroquad::prelude::*;
use grid_lessons::{
    EngineConfig, FrameClock, GameState,
    config,
    domain::{LineEdges, WHITE},
    error::Result,
    input,
    rendering::{self, TextRenderer},
};

fn engine_config() -> Result<EngineConfig> {
    config::parse_env_args().and_then(|params| EngineConfig::from_params(&params))
}

fn window_conf() -> Conf {
    // Argument errors are reported from main once logging is up
    let config = engine_config().unwrap_or_default();
    rendering::window_conf(&config.title, config.width, config.height)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = engine_config()?;
    log::info!(
        "{} {}x{} cell={} rule={} delay={:?}",
        config.title,
        config.width,
        config.height,
        config.cell_size,
        config.rule,
        config.frame_delay
    );

    input::capture_quit();
    let text = TextRenderer::load(20).await;
    let mut state = GameState::new(&config)?;
    log::info!("rule {}: {}", state.rule.name(), state.rule.description());
    let mut clock = FrameClock::new(config.frame_delay);

    loop {
        // 1. Events
        state = state.handle_all(input::poll_events());
        if !state.is_running {
            break;
        }

        // 2. Update
        state = state.tick();

        // 3. Draw: cells first so grid lines stay visible on top
        rendering::clear(config.background);
        rendering::draw_alive_cells(&state.grid, &state.geometry, config.alive);
        rendering::draw_grid_lines(&state.geometry, LineEdges::Inclusive, config.grid_lines);
        text.draw_top_right(&state.status_label(), config.width, WHITE);

        next_frame().await;
        clock.pace();
    }

    log::info!("stopped after {} frames, generation {}", clock.frame(), state.generation);
    Ok(())
}
