/// Game tuning parameters for Love Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (screen units, y grows downward)
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 50.0; // Distance from the window edge to a paddle center
    pub const PLAYER_SPEED: f32 = 500.0;
    pub const OPPONENT_SPEED: f32 = 250.0;

    // Ball
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SPEED: f32 = 450.0;
    pub const SERVE_DELAY: f32 = 1.2; // Seconds the ball rests after a serve
    pub const SERVE_Y_MIN: f32 = 0.7;
    pub const SERVE_Y_MAX: f32 = 0.8;

    // Challenge (player:opponent == 26:7)
    pub const TARGET_PLAYER: u32 = 26;
    pub const TARGET_OPPONENT: u32 = 7;

    // Loop
    pub const TARGET_FPS: u32 = 60;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
