use crate::constants::{
    INTRO_DURATION_MS, MAX_PIXEL_RATIO, ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING_FACTOR,
};
use crate::core::assets::AssetManifest;
use crate::core::error::SceneError;
use crate::core::orbit::OrbitConfig;
use crate::core::parallax::ParallaxConfig;
use crate::core::rig::{Camera, PointLight, SceneRig};
use crate::core::tween::IntroConfig;
use glam::{Vec2, Vec3};
use smallvec::{smallvec, SmallVec};
use std::str::FromStr;
use std::time::Duration;

const DRACO_DECODER_PATH: &str = "https://www.gstatic.com/draco/v1/decoders/";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePreset {
    #[default]
    Cyberpunk,
    Logo,
}

impl FromStr for ScenePreset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyberpunk" => Ok(Self::Cyberpunk),
            "logo" => Ok(Self::Logo),
            _ => Err(SceneError::UnknownPreset(s.to_string())),
        }
    }
}

/// Reads `key` from a `location.search` string such as `?scene=logo&debug`.
///
/// A missing key yields the default preset; an unrecognised value is an error.
pub fn preset_from_query(search: &str, key: &str) -> Result<ScenePreset, SceneError> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k == key {
            return v.parse();
        }
    }
    Ok(ScenePreset::default())
}

/// `0xRRGGBB` to linear-ish float rgb in [0, 1].
#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputEncoding {
    Srgb,
    Linear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneMapping {
    Linear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerPreference {
    HighPerformance,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererConfig {
    pub power_preference: PowerPreference,
    pub max_pixel_ratio: f32,
    pub output: OutputEncoding,
    pub tone_mapping: ToneMapping,
    pub exposure: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmaaPreset {
    High,
    Ultra,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Bloom {
        intensity: f32,
        luminance_threshold: f32,
        radius: f32,
        mipmap_blur: bool,
    },
    Smaa(SmaaPreset),
    ChromaticAberration {
        offset: Vec2,
        radial_modulation: bool,
        modulation_offset: f32,
    },
    HueSaturation {
        hue: f32,
        saturation: f32,
    },
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Bloom { .. } => "bloom",
            Effect::Smaa(SmaaPreset::High) => "smaa-high",
            Effect::Smaa(SmaaPreset::Ultra) => "smaa-ultra",
            Effect::ChromaticAberration { .. } => "chromatic-aberration",
            Effect::HueSaturation { .. } => "hue-saturation",
        }
    }
}

/// Effects merged into one full-screen pass.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectPass {
    pub effects: SmallVec<[Effect; 4]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostChain {
    pub multisampling: u32,
    pub passes: SmallVec<[EffectPass; 2]>,
}

/// What the backdrop shader needs from the post chain and renderer output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLook {
    pub glow_gain: f32,
    pub bloom_threshold: f32,
    pub aberration: Vec2,
    pub hue: f32,
    pub saturation: f32,
    pub exposure: f32,
    pub linear_output: bool,
}

impl PostChain {
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.passes.iter().flat_map(|p| p.effects.iter())
    }

    pub fn look(&self, renderer: &RendererConfig) -> FrameLook {
        let mut look = FrameLook {
            glow_gain: 0.0,
            bloom_threshold: 1.0,
            aberration: Vec2::ZERO,
            hue: 0.0,
            saturation: 0.0,
            exposure: renderer.exposure,
            linear_output: renderer.output == OutputEncoding::Linear,
        };
        for effect in self.effects() {
            match *effect {
                Effect::Bloom {
                    intensity,
                    luminance_threshold,
                    ..
                } => {
                    look.glow_gain += intensity;
                    look.bloom_threshold = look.bloom_threshold.min(luminance_threshold);
                }
                Effect::ChromaticAberration { offset, .. } => look.aberration += offset,
                Effect::HueSaturation { hue, saturation } => {
                    look.hue += hue;
                    look.saturation += saturation;
                }
                Effect::Smaa(_) => {}
            }
        }
        look
    }

    /// One-line summary, e.g. `msaa=0 | bloom+bloom+smaa-ultra | hue-saturation`.
    pub fn describe(&self) -> String {
        let mut out = format!("msaa={}", self.multisampling);
        for pass in &self.passes {
            out.push_str(" | ");
            for (i, e) in pass.effects.iter().enumerate() {
                if i > 0 {
                    out.push('+');
                }
                out.push_str(e.name());
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub preset: ScenePreset,
    pub background_rgb: [f32; 3],
    pub renderer: RendererConfig,
    pub camera: CameraConfig,
    pub light: PointLight,
    pub orbit: OrbitConfig,
    pub assets: AssetManifest,
    pub post: PostChain,
    pub parallax: Option<ParallaxConfig>,
    pub intro: Option<IntroConfig>,
}

impl SceneConfig {
    pub fn for_preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Cyberpunk => Self::cyberpunk(),
            ScenePreset::Logo => Self::logo(),
        }
    }

    fn cyberpunk() -> Self {
        Self {
            preset: ScenePreset::Cyberpunk,
            background_rgb: rgb_hex(0x000000),
            renderer: RendererConfig {
                power_preference: PowerPreference::HighPerformance,
                max_pixel_ratio: MAX_PIXEL_RATIO,
                output: OutputEncoding::Srgb,
                tone_mapping: ToneMapping::Linear,
                exposure: 1.0,
            },
            camera: CameraConfig {
                fov_degrees: 45.0,
                near: 1.0,
                far: 100.0,
                position: Vec3::new(0.0, 3.0, 9.0),
            },
            light: PointLight {
                position: Vec3::new(-3.0, 0.0, 8.0),
                color_rgb: rgb_hex(0xffff00),
                intensity: 1.0,
                distance: 100.0,
            },
            orbit: OrbitConfig {
                target: Vec3::new(0.0, 2.2, 0.0),
                auto_rotate: true,
                auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
                damping: Some(ORBIT_DAMPING_FACTOR),
                ..OrbitConfig::default()
            },
            assets: AssetManifest {
                model_url: "https://03fltx.csb.app/assets/model/cyberpunk_model.glb",
                draco_decoder_path: DRACO_DECODER_PATH,
                environment_url: "../assets/envmap.hdr",
            },
            post: PostChain {
                multisampling: 0,
                passes: smallvec![
                    EffectPass {
                        effects: smallvec![
                            bloom(1.9, 0.1, 1.1),
                            bloom(3.2, 0.1, 0.5),
                            bloom(1.2, 0.1, 0.5),
                            Effect::Smaa(SmaaPreset::Ultra),
                        ],
                    },
                    EffectPass {
                        effects: smallvec![
                            Effect::ChromaticAberration {
                                offset: Vec2::new(0.002, 0.02),
                                radial_modulation: true,
                                modulation_offset: 0.7,
                            },
                            Effect::HueSaturation {
                                hue: -0.1,
                                saturation: 0.25,
                            },
                        ],
                    },
                ],
            },
            parallax: Some(ParallaxConfig::default()),
            intro: None,
        }
    }

    fn logo() -> Self {
        let start_eye = Vec3::new(4.0, 2.0, 25.0);
        let start_target = Vec3::new(0.0, 1.0, 0.0);
        Self {
            preset: ScenePreset::Logo,
            background_rgb: rgb_hex(0x191919),
            renderer: RendererConfig {
                power_preference: PowerPreference::HighPerformance,
                max_pixel_ratio: MAX_PIXEL_RATIO,
                output: OutputEncoding::Linear,
                tone_mapping: ToneMapping::Linear,
                exposure: 1.2,
            },
            camera: CameraConfig {
                fov_degrees: 45.0,
                near: 1.0,
                far: 100.0,
                position: start_eye,
            },
            light: PointLight {
                position: Vec3::new(-3.0, 12.0, 8.0),
                color_rgb: rgb_hex(0xffff00),
                intensity: 1.0,
                distance: 100.0,
            },
            orbit: OrbitConfig {
                target: start_target,
                ..OrbitConfig::default()
            },
            assets: AssetManifest {
                model_url: "https://cdn.glitch.global/84b42a01-59de-4a46-a133-517eb21aee3c/threejs_logo.glb?v=1675285403141",
                draco_decoder_path: DRACO_DECODER_PATH,
                environment_url: "https://cdn.glitch.global/df35b9e1-0fa8-49d1-b430-bed29251dfb5/gem_2.hdr?v=1675257556766",
            },
            post: PostChain {
                multisampling: 4,
                passes: smallvec![
                    EffectPass {
                        effects: smallvec![Effect::Bloom {
                            intensity: 1.0,
                            luminance_threshold: 0.9,
                            radius: 0.85,
                            mipmap_blur: true,
                        }],
                    },
                    EffectPass {
                        effects: smallvec![Effect::Smaa(SmaaPreset::High)],
                    },
                ],
            },
            parallax: None,
            intro: Some(IntroConfig {
                eye_from: start_eye,
                eye_to: Vec3::new(4.0, 1.8, 9.5),
                target_from: start_target,
                target_to: Vec3::new(0.0, 2.0, 0.0),
                duration: Duration::from_millis(INTRO_DURATION_MS),
            }),
        }
    }

    pub fn look(&self) -> FrameLook {
        self.post.look(&self.renderer)
    }

    pub fn build_rig(&self, aspect: f32) -> SceneRig {
        SceneRig {
            camera: Camera {
                eye: self.camera.position,
                target: self.orbit.target,
                up: Vec3::Y,
                aspect,
                fovy_radians: self.camera.fov_degrees.to_radians(),
                znear: self.camera.near,
                zfar: self.camera.far,
            },
            camera_group: Vec3::ZERO,
            light: self.light.clone(),
        }
    }
}

#[inline]
fn bloom(intensity: f32, luminance_threshold: f32, radius: f32) -> Effect {
    Effect::Bloom {
        intensity,
        luminance_threshold,
        radius,
        mipmap_blur: true,
    }
}
