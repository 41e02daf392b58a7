// Wave geometry and animation tuning constants shared by both curve styles.

use std::f64::consts::PI;

// Controller
pub const HEIGHT_MARGIN: f64 = 6.0; // px kept free above and below the tallest wave
pub const PHASE_STEP: f64 = PI / 2.0; // phase advance per frame at speed 1
pub const FALLBACK_FRAME_DELAY_MS: i32 = 20; // timer used when no frame request is available

// Option defaults
pub const DEFAULT_SPEED: f64 = 0.2;
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_FREQUENCY: f64 = 6.0;
pub const DEFAULT_COLOR: &str = "#fff";
pub const DEFAULT_PIXEL_DEPTH: f64 = 0.02;
pub const DEFAULT_LERP_SPEED: f64 = 0.1;

// Banded curve
pub const BANDED_GRAPH_X: f64 = 2.0; // samples span [-X, X]
pub const BANDED_AMPLITUDE_FACTOR: f64 = 0.6;
pub const ATT_FACTOR: f64 = 4.0;

// Organic curve
pub const ORGANIC_GRAPH_X: f64 = 25.0;
pub const ORGANIC_AMPLITUDE_FACTOR: f64 = 0.8;
pub const ORGANIC_SPEED_FACTOR: f64 = 1.0;
pub const DEAD_PX: f64 = 2.0; // below this the curve counts as gone
pub const DESPAWN_FACTOR: f64 = 0.02; // amplitude change per frame while growing or shrinking
pub const ORGANIC_GLOBAL_ALPHA: f64 = 0.7;
pub const SUPPORT_LINE_FADE: f64 = 0.1; // gradient stop where the support line reaches full alpha
pub const SUPPORT_LINE_ALPHA: f64 = 0.5;

// Respawn ranges (min inclusive, max exclusive)
pub const SUB_BAND_COUNT_RANGE: (usize, usize) = (2, 5);
pub const AMPLITUDE_RANGE: (f64, f64) = (0.3, 1.0);
pub const OFFSET_RANGE: (f64, f64) = (-3.0, 3.0);
pub const WIDTH_RANGE: (f64, f64) = (1.0, 3.0);
pub const SPEED_RANGE: (f64, f64) = (0.5, 1.0);
pub const DESPAWN_TIMEOUT_MS_RANGE: (u64, u64) = (500, 2000);
