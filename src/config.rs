use std::path::Path;

use image::Rgb;
use nalgebra::Point3;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::spotlight::camera::Camera;
use crate::spotlight::light::Light;
use crate::spotlight::scene::{Axis, Plane, Scene, SceneObject, Sphere, AMBIENT};
use crate::spotlight::Spotlight;

/// 시작할 때 한 번 읽는 씬 설정 (TOML)
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub observer: [f64; 3],
    pub ambient: f64,
    pub light: LightConfig,
    pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LightConfig {
    pub x: f64,
    pub y: f64,
    /// 광원이 구 중심에서 떨어진 정도 (반지름 배수)
    pub scale: f64,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            x: 0.3,
            y: 0.2,
            scale: 1000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObjectConfig {
    Sphere {
        center: [f64; 3],
        radius: f64,
        color: [u8; 3],
    },
    Plane {
        axis: Axis,
        coordinate: f64,
        color: [u8; 3],
    },
}

impl ObjectConfig {
    fn build(&self, ambient: f64) -> Result<SceneObject, ConfigError> {
        Ok(match *self {
            ObjectConfig::Sphere { center, radius, color } => {
                Sphere::new(Point3::from(center), radius, Rgb(color))?.into()
            }
            ObjectConfig::Plane { axis, coordinate, color } => {
                Plane::with_ambient(axis, coordinate, Rgb(color), ambient).into()
            }
        })
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let sphere = |center, radius, color| ObjectConfig::Sphere { center, radius, color };
        let plane = |axis, coordinate, color| ObjectConfig::Plane { axis, coordinate, color };

        Self {
            width: 300,
            height: 200,
            observer: [0.0, 0.0, -3.0],
            ambient: AMBIENT,
            light: LightConfig::default(),
            objects: vec![
                sphere([1.0, 0.0, 3.0], 0.8, [255, 255, 255]),
                sphere([0.6, 0.5, 0.2], 0.1, [0, 130, 255]),
                // 바닥과 천장
                plane(Axis::Y, -0.8, [130, 130, 130]),
                plane(Axis::Y, 2.0, [130, 130, 130]),
                // 양쪽 벽
                plane(Axis::X, -2.0, [0, 200, 22]),
                plane(Axis::X, 2.0, [0, 200, 22]),
                // 뒷벽
                plane(Axis::Z, 10.0, [240, 30, 24]),
            ],
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    /// 씬과 카메라, 아직 위치가 정해지지 않은 광원을 만듦
    pub fn build(&self) -> Result<(Spotlight, Light), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(ConfigError::InvalidAmbient(self.ambient));
        }

        let objects = self
            .objects
            .iter()
            .map(|object| object.build(self.ambient))
            .collect::<Result<Vec<_>, _>>()?;

        let camera = Camera::new(Point3::from(self.observer), self.width, self.height);
        let light = Light::new(self.light.x, self.light.y, self.light.scale);

        Ok((Spotlight::new(Scene::new(objects), camera), light))
    }
}
