//! Terminal frontend for Love Pong
//!
//! Owns the 60 Hz loop: input polling, the simulation step and drawing all
//! run on one thread.

pub mod app;
pub mod cli;
pub mod clock;
pub mod flow;
pub mod input;
pub mod logging;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use clock::FrameClock;
pub use flow::{Flow, FlowAction, FlowState};
pub use input::{KeyState, PaddleKey};
