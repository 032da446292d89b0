use std::time::Instant;

use image::{Rgb, RgbImage};
use log::{debug, info};
use rayon::prelude::*;

use crate::error::TraceError;
use crate::spotlight::camera::Camera;
use crate::spotlight::light::Light;
use crate::spotlight::scene::Scene;

pub mod camera;
pub mod light;
pub mod ray;
pub mod scene;
pub mod shading;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Rgb<u8>,
}

/// 한 장면의 결과. 아무것도 맞지 않은 픽셀은 들어있지 않음
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl Frame {
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixels
            .iter()
            .find(|pixel| pixel.x == x && pixel.y == y)
            .map(|pixel| pixel.color)
    }

    // 배경 위에 맞은 픽셀만 덮어씀
    pub fn to_image(&self, background: Rgb<u8>) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, background);
        for pixel in &self.pixels {
            image.put_pixel(pixel.x, pixel.y, pixel.color);
        }
        image
    }
}

/// 고정된 씬과 카메라. 광원은 따로 빌려서 씀
pub struct Spotlight {
    pub scene: Scene,
    pub camera: Camera,
}

impl Spotlight {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self { scene, camera }
    }

    /// 지금 화면 좌표로 광원 위치를 계산
    pub fn resolve_light(&self, light: &mut Light) -> Result<bool, TraceError> {
        let lit = light.set_position(&self.scene, self.camera.observer)?;

        match light.position() {
            Some(position) => debug!("Light placed at {:?}", position.coords.as_slice()),
            None => debug!("Light at screen {:?} does not strike any sphere", light.screen_point().coords.as_slice()),
        }

        Ok(lit)
    }

    /// 광원을 화면의 (screen_x, screen_y)로 옮김. 구를 맞혔으면 true
    pub fn reposition_light(&self, light: &mut Light, screen_x: f64, screen_y: f64) -> Result<bool, TraceError> {
        light.update_input(screen_x, screen_y);
        self.resolve_light(light)
    }

    pub fn render_frame(&self, light: &Light) -> Result<Frame, TraceError> {
        self.render_frame_with(light, || {})
    }

    /// 줄마다 on_row를 부름 (진행 표시용)
    pub fn render_frame_with<F>(&self, light: &Light, on_row: F) -> Result<Frame, TraceError>
    where
        F: Fn() + Sync,
    {
        // 광원이 없으면 그리지 않음
        light.illuminated_position()?;

        let generation_start = Instant::now();
        let columns = self.camera.sample_columns();

        // 줄끼리는 서로 의존하지 않으니 병렬로 처리. 결과 순서는 그대로 유지됨
        let rows = self
            .camera
            .sample_rows()
            .par_iter()
            .enumerate()
            .map(|(y, &screen_y)| -> Result<Vec<Pixel>, TraceError> {
                let mut row = Vec::new();
                for (x, &screen_x) in columns.iter().enumerate() {
                    if let Some(color) = self.per_pixel(light, screen_x, screen_y)? {
                        row.push(Pixel {
                            x: x as u32,
                            y: y as u32,
                            color,
                        });
                    }
                }
                on_row();
                Ok(row)
            })
            .collect::<Result<Vec<_>, TraceError>>()?;

        let pixels: Vec<Pixel> = rows.into_iter().flatten().collect();
        info!(
            "Frame {}x{} traced in {:.2?} ({} pixels hit)",
            self.camera.width(),
            self.camera.height(),
            generation_start.elapsed(),
            pixels.len()
        );

        Ok(Frame {
            width: self.camera.width(),
            height: self.camera.height(),
            pixels,
        })
    }

    /// 화면 위 한 점의 색. 아무것도 맞지 않으면 None
    pub fn per_pixel(&self, light: &Light, screen_x: f64, screen_y: f64) -> Result<Option<Rgb<u8>>, TraceError> {
        let ray = self.camera.primary_ray(screen_x, screen_y)?;

        let Some(hit) = self.scene.find_closest(&ray, None) else {
            return Ok(None);
        };

        let point = ray.at(hit.distance);
        shading::shade(hit.object, &point, &self.scene, light).map(Some)
    }
}
