// Default tuning for the dot field. Distances are in surface pixels, times in
// milliseconds.

// Grid layout
pub const DEFAULT_GRID_ROWS: usize = 55;
pub const DEFAULT_GRID_COLUMNS: usize = 55;
pub const DEFAULT_DOT_SPACING: f32 = 30.0;

// Dot sizing (diameters)
pub const DEFAULT_DOT_SIZE: f32 = 0.0; // resting size, dots hidden until something excites them
pub const DEFAULT_MAX_DOT_SIZE: f32 = 10.0;

// Pulses
pub const DEFAULT_WAVE_THICKNESS: f32 = 40.0; // half-width of the ring annulus
pub const DEFAULT_PULSE_EXPANSION_MS: f64 = 3000.0;
pub const DEFAULT_PULSE_FADE_MS: f64 = 1500.0;
pub const DEFAULT_PULSE_MAX_RADIUS: f32 = 500.0;
pub const DEFAULT_PULSE_WEIGHT: f32 = 4.0; // 0.4 * max dot size
pub const DEFAULT_MAX_ACTIVE_PULSES: usize = 32;

// Pointer
pub const DEFAULT_MOUSE_INFLUENCE_RADIUS: f32 = 150.0;
pub const DEFAULT_POINTER_WEIGHT: f32 = 5.0; // 0.5 * max dot size
pub const DEFAULT_POINTER_THROTTLE_MS: f64 = 50.0;

// Chromatic aberration
pub const DEFAULT_CHROMATIC_INFLUENCE_RADIUS: f32 = 200.0;
pub const DEFAULT_BASE_CHROMATIC_OFFSET: f32 = 10.0;
pub const DEFAULT_CHROMATIC_MIN_SIZE_RATIO: f32 = 0.5; // halos only above half the max size
pub const DEFAULT_RED_CHANNEL_WEIGHT: f32 = 1.0;
pub const DEFAULT_GREEN_CHANNEL_WEIGHT: f32 = 0.5;
pub const DEFAULT_BLUE_CHANNEL_WEIGHT: f32 = 0.8;
pub const DEFAULT_HALO_ALPHA: f32 = 0.9; // at the pointer, fades to 0 at the radius

// Baked frames
pub const DEFAULT_FRAME_GAIN: f32 = 1.0;
pub const DEFAULT_FRAME_RATE_FPS: f32 = 60.0;
pub const MAX_ASSET_FRAMES: usize = 4096; // decoded frames accepted from one packed asset

// Rendering
pub const DEFAULT_HALO_SCALE: f32 = 0.9; // halo diameter relative to the main dot
