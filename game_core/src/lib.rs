pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use systems::*;

/// Run one frame of the Pong simulation
pub fn step(session: &mut Session, input: &FrameInput, config: &Config, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles from keyboard and controllers
    resolve_input(session, input, config);

    // 2. Move ball
    move_ball(&mut session.ball);

    // 3. Bounce off walls, then paddles
    check_walls(&mut session.ball, config, events);
    check_paddles(&mut session.ball, &session.paddles, events);

    // 4. Check scoring (ball reached a side wall)
    check_scoring(&mut session.ball, &mut session.score, config, events);
}
