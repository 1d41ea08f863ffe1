pub mod challenge;
pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use challenge::*;
pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one measured frame.
///
/// Motion scales by the frame's dt (clamped to [`Params::MAX_DT`]); there is
/// no fixed timestep. Scoring events go to `listener`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    input: &PaddleInput,
    listener: &mut dyn ScoreListener,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.clamp(0.0, Params::MAX_DT);
    let step_time = Time::new(clamped_dt, time.now + clamped_dt);

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. AI reads the ball before anything moves
    track_ball(world);

    // 3. Move paddles based on intents
    move_paddles(world, &step_time, map);

    // 4. Move ball, resolving paddle hits per axis
    move_ball(world, &step_time, config);

    // 5. Walls and scoring
    check_walls(world, map, config, listener, events, rng);

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its start position
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_spawn(side),
        config.paddle_size(),
        config.paddle_speed(side),
    );
    world.spawn((paddle, PaddleIntent::new(), controller))
}

/// Helper to create the ball entity, centered and waiting to serve
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let direction = rng.serve_direction(config.serve_y_min, config.serve_y_max);
    world.spawn((Ball::new(
        config.ball_spawn(),
        Vec2::splat(config.ball_size),
        direction,
    ),))
}
