/// Widget geometry, signal tuning, and game constants.
///
/// These constants express intended behavior (noise amplitudes, window
/// capacities, relaxation rates) and keep magic numbers out of the code.
// Full-size joystick widget (canvas pixels)
pub const WIDTH: f64 = 350.0;
pub const HEIGHT: f64 = 350.0;
pub const RADIUS: f32 = 120.0;
pub const KNOB_SIZE: f64 = 25.0;

// Mini joysticks on the mini-game screen
pub const MINI_WIDTH: f64 = 150.0;
pub const MINI_HEIGHT: f64 = 150.0;
pub const MINI_RADIUS: f32 = 50.0;
pub const MINI_KNOB_SIZE: f64 = 15.0;

// Normalized output range per axis, shared by both widget sizes
pub const MAX_OUTPUT: i32 = 1600;

// Per-technology noise amplitudes (counts, uniform in [-a, a])
pub const HALL_NOISE: i32 = 50;
pub const TMR_NOISE: i32 = 10;
pub const ANALOG_NOISE: i32 = 50;

// TMR drift: sinusoidal jitter of +/-5 counts, period 2*pi*100 ms
pub const TMR_JITTER_AMPLITUDE: f64 = 5.0;
pub const TMR_JITTER_PERIOD_MS: f64 = 100.0;

// Analog deadzone, applied to the pre-noise normalized value
pub const DEADZONE: i32 = 100;

// Rolling statistics window and accuracy mapping
pub const STATS_WINDOW: usize = 100;
pub const ACCURACY_NOISE_DIVISOR: f64 = 16.0;

// Chart history and plotted value range
pub const CHART_POINTS: usize = 200;
pub const CHART_VALUE_MIN: f64 = -1600.0;
pub const CHART_VALUE_MAX: f64 = 1600.0;

// Return-to-center relaxation
pub const RELAX_FACTOR: f32 = 0.2; // fraction of remaining distance per tick
pub const RELAX_TICK_MS: i32 = 10;
pub const RELAX_SNAP_EPSILON: f32 = 1.0; // px; snap to center below this

// Mini-game playfield and car
pub const GAME_WIDTH: f64 = 800.0;
pub const GAME_HEIGHT: f64 = 600.0;
pub const GAME_MARGIN: f64 = 20.0;
pub const CAR_HALF: f64 = 15.0;
pub const CAR_SPEED: f64 = 5.0;
pub const COIN_RADIUS: f64 = 10.0;
pub const COIN_COUNT: usize = 5;
pub const COIN_SCORE: i32 = 10;
