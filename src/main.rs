use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod config;
mod core;
mod demos;
mod engine;

use crate::config::{AppConfig, Args};
use crate::core::color::BACKGROUND;
use crate::demos::{AnimationHost, DemoKind};
use crate::engine::game_loop::GameLoop;
use crate::engine::input::{Action, Control, InputConfig};
use crate::engine::renderer::{Renderer, ShapeBatch};
use clap::Parser;

/// Refresh the window title every this many frames
const TITLE_REFRESH_FRAMES: u64 = 15;

fn log_controls(input: &InputConfig) {
    let describe = |action: Action| -> String {
        let keys: Vec<String> = input
            .keys_for(action)
            .iter()
            .map(|key| format!("{:?}", key))
            .collect();
        keys.join("/")
    };

    info!("Controls:");
    info!(
        "  tabs 1-5, next {}, previous {}",
        describe(Action::NextTab),
        describe(Action::PreviousTab)
    );
    info!(
        "  primary control {} / {}",
        describe(Action::Increase(Control::Primary)),
        describe(Action::Decrease(Control::Primary))
    );
    info!(
        "  secondary control {} / {}",
        describe(Action::Increase(Control::Secondary)),
        describe(Action::Decrease(Control::Secondary))
    );
    info!(
        "  reset {}, pause {}, quit {}",
        describe(Action::Reset),
        describe(Action::TogglePause),
        describe(Action::Quit)
    );
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = AppConfig::from_args(Args::parse())?;

    info!("Starting Kinetic Canvas...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Kinetic Canvas")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut host = AnimationHost::new(renderer.bounds(), &config);
    let mut game_loop = GameLoop::new();
    let input = InputConfig::with_defaults();
    let mut batch = ShapeBatch::new();

    log_controls(&input);

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size, window.scale_factor());
                host.resize(renderer.bounds());
            }
            Event::WindowEvent {
                event: WindowEvent::Occluded(occluded),
                ..
            } => {
                // Hidden windows neither simulate nor bank time
                if occluded {
                    game_loop.stop();
                } else {
                    game_loop.start();
                }
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state: ElementState::Pressed,
                                repeat,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                let Some(action) = input.action_for(key) else {
                    return;
                };
                // Held keys only repeat slider nudges
                if repeat && !matches!(action, Action::Increase(_) | Action::Decrease(_)) {
                    return;
                }
                debug!("Action {:?}", action);

                match action {
                    Action::SelectTab(index) => {
                        if let Some(kind) = DemoKind::from_index(index) {
                            host.switch_to(kind);
                        }
                    }
                    Action::NextTab => host.next(),
                    Action::PreviousTab => host.previous(),
                    Action::Increase(control) => host.adjust(control, 1),
                    Action::Decrease(control) => host.adjust(control, -1),
                    Action::Reset => host.reset(),
                    Action::TogglePause => host.toggle_pause(),
                    Action::Quit => elwt.exit(),
                }
                window.set_title(&format!("Kinetic Canvas | {}", host.describe()));
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let updates = game_loop.begin_frame();
                for _ in 0..updates {
                    host.tick(game_loop.fixed_timestep());
                }

                batch.clear();
                host.draw(&mut batch);
                if let Err(e) = renderer.render(&batch, BACKGROUND) {
                    log::error!("Render failed: {}", e);
                    elwt.exit();
                }

                if game_loop.frame_count() % TITLE_REFRESH_FRAMES == 0 {
                    window.set_title(&format!(
                        "Kinetic Canvas | {} | {:.0} fps",
                        host.describe(),
                        game_loop.fps()
                    ));
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Ran {} frames and {} updates",
                    game_loop.frame_count(),
                    game_loop.update_count()
                );
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
