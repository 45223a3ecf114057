use std::rc::Rc;

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, error, info, trace};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::SpriteSheetHandle;
use engine::frame_clock::FrameClock;
use engine::input::KeyboardInput;
use engine::render::Renderable;
use game::actor::{Actor, BASE_ACTOR};
use game::scene::{TileGrid, INDOOR_SCENE, LIVING_ROOM};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Tile Walker...");

    // Build and place the scene before anything can collide with it
    let mut scene = TileGrid::from_text(
        SpriteSheetHandle::named("tileset-indoors"),
        INDOOR_SCENE,
        LIVING_ROOM,
    )
    .context("failed to build the living room scene")?;
    scene.offset(Vec2::new(
        WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0,
    ));
    let scene = Rc::new(scene);

    let mut player = Actor::new(SpriteSheetHandle::named("char"), scene.center(), BASE_ACTOR)?
        .with_standard_animations()?;
    player.bind(Rc::clone(&scene))?;
    player.set_animation("walk_down")?;
    info!("Player spawned at {}", player.position());

    let mut keyboard = KeyboardInput::default();
    let mut clock = FrameClock::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tile Walker")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

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
                keyboard.process_keyboard_event(&event);
                if keyboard.quit_requested() {
                    elwt.exit();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                keyboard.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = clock.begin_frame();
                let input = keyboard.snapshot();

                for _ in 0..steps {
                    if let Err(err) = player.update(clock.timestep(), &input) {
                        error!("Player update failed: {err}");
                        elwt.exit();
                        return;
                    }
                }

                // Drawing belongs to the render collaborator; hand it the geometry
                let tiles = scene.render_geometries();
                let sprite = player.render_geometry();
                trace!(
                    "Frame {}: {} tiles from {:?}, player dest {:?} from {:?}",
                    clock.frame_count(),
                    tiles.len(),
                    scene.sheet(),
                    sprite.dest,
                    player.sheet()
                );

                if clock.frame_count() % 120 == 0 {
                    debug!(
                        "Player at {} facing {} playing {} (frame {}), {} steps run",
                        player.position(),
                        player.facing(),
                        player.animation(),
                        player.animation_frame_index(),
                        clock.step_count()
                    );
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
