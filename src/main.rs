use rand::Rng;
use sdl2::image::InitFlag;
use std::thread;
use std::time::Duration;

use woodpecker_dash::config::DEFAULT_CONFIG_PATH;
use woodpecker_dash::game::FrameEvents;
use woodpecker_dash::render::{render_frame, render_game_over};
use woodpecker_dash::{GameAction, GameConfig, GameError, GameState};

mod assets;
mod canvas_target;
mod input_system;
mod text;

use assets::SpriteAtlas;
use canvas_target::CanvasTarget;
use input_system::InputSystem;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Log the interesting parts of a frame
fn log_frame_events(events: &FrameEvents, state: &GameState) {
    if events.is_quiet() {
        return;
    }
    if events.obstacles_passed > 0 {
        log::info!("Pillar cleared, score {}", state.score);
    }
    if let Some(collision) = events.collision {
        log::info!(
            "{:?} at frame {}, lives {}",
            collision,
            state.frame,
            state.player.lives
        );
    }
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;

    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context = sdl2::image::init(InitFlag::PNG).map_err(GameError::Sdl)?;

    // Bilinear filtering for every texture created from here on
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "linear");

    let screen_width = config.screen_width as u32;
    let screen_height = config.screen_height as u32;

    let window = video_subsystem
        .window(&config.window_title, screen_width, screen_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Window(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Window(e.to_string()))?;
    canvas
        .set_logical_size(screen_width, screen_height)
        .map_err(|e| GameError::Window(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let atlas = SpriteAtlas::load(&texture_creator, &config.assets, config.sprite_width)?;

    let mut event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;
    let input = InputSystem::new();

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let frame_delay = Duration::from_millis(config.frame_delay_ms);
    let game_over_hold = Duration::from_millis(config.game_over_hold_ms);
    let mut state = GameState::new(config, atlas.sizes(), seed);
    log::info!("Window {}x{}, seed {}", screen_width, screen_height, state.seed());

    println!("Controls:");
    println!("SPACE - Jump");
    println!("Close window - Quit");

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Jump => state.queue_jump(),
            }
        }

        let events = state.step();
        log_frame_events(&events, &state);

        let mut target = CanvasTarget::new(
            &mut canvas,
            &atlas,
            state.config.screen_width,
            state.config.screen_height,
        );
        render_frame(&mut target, &state).map_err(GameError::Render)?;
        target.present();

        if state.is_game_over() {
            log::info!("Game over! Final score: {}", state.score);
            render_game_over(&mut target, state.score, &state.config).map_err(GameError::Render)?;
            target.present();
            thread::sleep(game_over_hold);
            break;
        }

        // Fixed pacing, no delta-time: the simulation runs per frame
        thread::sleep(frame_delay);
    }

    Ok(())
}
