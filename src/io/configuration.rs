//! Ramp constants and runtime configuration defaults

// Ramp walk constants
/// Upper bound of an 8-bit channel counter
pub const CHANNEL_MAX: u8 = 255;
/// Channel values the walk starts from (pure blue)
pub const START_CHANNELS: [u8; 3] = [0, 0, CHANNEL_MAX];
/// The walk stops once red falls below this value with green and blue at zero
pub const RED_STOP_THRESHOLD: u8 = 127;
/// Number of samples produced by the fixed walk
pub const REFERENCE_RAMP_LENGTH: usize = 1150;

// Color selection
/// Per-channel floor applied to colors meant to stay legible on scene objects
pub const DEFAULT_MIN_BRIGHTNESS: f64 = 0.3;
/// Display gamma used for linearization and PNG encoding
pub const DEFAULT_GAMMA: f64 = 2.2;

// Visible spectrum range in nanometres
/// Shortest wavelength with a defined spectral response
pub const SPECTRUM_MIN_NM: f64 = 400.0;
/// First wavelength sampled when building spectrum palettes
pub const SPECTRUM_PALETTE_START_NM: f64 = 401.0;
/// Exclusive upper wavelength bound of the spectral response
pub const SPECTRUM_MAX_NM: f64 = 700.0;

// Balanced table emission
/// Number of entries in the emitted balanced table
pub const DEFAULT_TABLE_SAMPLES: usize = 32;

// Pyramid scene layout
/// Number of stacked layers in the sphere pyramid
pub const PYRAMID_LAYERS: usize = 4;
/// Sphere radius used throughout the pyramid
pub const PYRAMID_RADIUS: f64 = 0.9;
/// World-space x coordinate of the pyramid anchor
pub const PYRAMID_CENTER_X: f64 = 5.0;
/// World-space z coordinate of the pyramid anchor
pub const PYRAMID_CENTER_Z: f64 = 5.0;
/// Lift added to body heights so spheres start clear of the floor
pub const PYRAMID_BODY_LIFT: f64 = 0.01;
/// Initial vertical speed of each moving sphere (sqrt of 10)
pub const PYRAMID_LAUNCH_SPEED: f64 = 3.162_277_660_168_379_5;
/// Mass of each moving sphere
pub const PYRAMID_BODY_MASS: f64 = 1.0;

// Aperture row layout
/// Number of spheres on the rising half of the aperture row
pub const DEFAULT_APERTURE_STEPS: usize = 9;
/// Distance between neighbouring aperture spheres
pub const DEFAULT_APERTURE_SPACING: f64 = 1.0;

// Swatch output settings
/// Default swatch width in pixels
pub const DEFAULT_SWATCH_WIDTH: u32 = 1200;
/// Default swatch height in pixels
pub const DEFAULT_SWATCH_HEIGHT: u32 = 400;
/// Largest accepted swatch edge in pixels
pub const MAX_SWATCH_DIMENSION: u32 = 10_000;
