/// Header inspection for the scene's model and environment map.
///
/// Decoding is left to the loaders; this only checks that a fetched payload
/// is what the manifest promised and pulls out the few facts worth logging.
pub mod assets;
pub mod error;
pub mod orbit;
/// Cursor-driven look-around.
///
/// Pointer moves set a normalized target in [-0.5, 0.5]²; every frame a
/// first-order lag filter pulls the smoothed position toward it and the result
/// is scaled into a camera-group lift and a light displacement.
pub mod parallax;
/// Camera and light state the render step reads every frame.
///
/// The rig replaces ambient scene globals: it is built once from the scene
/// configuration and then mutated by the per-frame collaborators (intro tween,
/// orbit controls, parallax) before the renderer consumes it.
pub mod rig;
/// Scene presets.
///
/// Each preset is plain data: lens, light, orbit behaviour, renderer output,
/// the post-processing chain and the assets to fetch. The host picks one from
/// the page URL and builds the runtime pieces from it.
pub mod scene;
pub mod tween;
pub mod viewport;

pub use error::SceneError;
pub use parallax::{ParallaxConfig, ParallaxController, ParallaxOffsets};
pub use rig::SceneRig;
pub use scene::{SceneConfig, ScenePreset};

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
