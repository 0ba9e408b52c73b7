/// Scene tuning constants.
///
/// These keep the literal values of the look-around behaviour, the orbit rig
/// and the host integration in one place so presets and tests share them.
// Parallax: fraction of the remaining distance covered per frame
pub const PARALLAX_SMOOTHING: f32 = 0.01;

// Parallax scale factors applied to the smoothed pointer position
pub const CAMERA_GROUP_Y_SCALE: f32 = 8.0;
pub const LIGHT_X_SCALE: f32 = -50.0;
pub const LIGHT_Y_SCALE: f32 = 60.0;

// Frame rate the per-frame smoothing factor was tuned at
pub const REFERENCE_FPS: f32 = 60.0;

// Orbit controls
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0; // one full turn every 30 s at 60 fps
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6; // keeps the eye off the poles
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // radius factor per wheel notch at zoom speed 1

// Intro animation
pub const INTRO_DURATION_MS: u64 = 1800;

// Renderer
pub const MAX_PIXEL_RATIO: f32 = 2.0;
pub const GLOW_FALLOFF: f32 = 18.0; // gaussian falloff of the light glow in ndc units

// Host page
pub const CONTAINER_CLASS: &str = "threejs";
pub const CANVAS_ID: &str = "scene-canvas";
pub const SCENE_QUERY_KEY: &str = "scene";
