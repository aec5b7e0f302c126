use anyhow::{Context, Result};
use log::{info, trace};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetManager;
use engine::game_loop::TickClock;
use engine::input::InputManager;
use game::characters::ActorCatalog;
use game::config::GameConfig;
use game::session::{GameSession, Outcome};
use game::sprites::ActorSprites;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Flat World...");

    let config = GameConfig::from_env();
    let catalog = ActorCatalog::standard().context("building animation catalog")?;

    let mut assets = AssetManager::new(&config.asset_root);
    let sprites = ActorSprites::load(&mut assets, &catalog)
        .with_context(|| format!("loading assets from {}", config.asset_root.display()))?;

    let mut session = GameSession::new(&config, &catalog);
    let mut input = InputManager::default();
    let mut clock = TickClock::new(config.tick_rate);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let (width, height) = config.screen_size;
    let window = WindowBuilder::new()
        .with_title(config.window_title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut reported = Outcome::InProgress;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
                if input.quit_requested() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    clock.resume();
                } else {
                    clock.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let draws = session.draw_list(&sprites);
                trace!("Drawing {} sprites", draws.len());
            }
            Event::AboutToWait => {
                let ticks = clock.begin_frame();
                for _ in 0..ticks {
                    let outcome = session.tick(&input.snapshot());
                    input.end_tick();

                    if outcome != reported {
                        info!("Outcome: {:?}", outcome);
                        reported = outcome;
                    }
                }

                if ticks > 0 {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::wait_duration(clock.until_next_tick()));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
