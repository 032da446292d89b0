use nalgebra::Point3;

use crate::error::TraceError;
use crate::spotlight::ray::Ray;
use crate::spotlight::scene::{ObjectKind, Scene};

/// 화면 위의 한 점으로 위치를 정하는 점광원.
/// 그 점을 지나는 빔이 맞힌 구의 표면에서 법선 방향으로 떨어진 곳에 놓임.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    screen_x: f64,
    screen_y: f64,
    scale: f64,
    // 빔이 아무 구도 못 맞히면 None. set_position만 씀
    position: Option<Point3<f64>>,
}

impl Light {
    pub fn new(screen_x: f64, screen_y: f64, scale: f64) -> Self {
        Self {
            screen_x,
            screen_y,
            scale,
            position: None,
        }
    }

    pub fn screen_point(&self) -> Point3<f64> {
        // 화면은 언제나 z = 0
        Point3::new(self.screen_x, self.screen_y, 0.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn position(&self) -> Option<Point3<f64>> {
        self.position
    }

    /// 조명 계산 전에 위치가 정해졌는지 확인
    pub fn illuminated_position(&self) -> Result<Point3<f64>, TraceError> {
        self.position.ok_or(TraceError::NoIllumination)
    }

    // 화면 좌표가 바뀌면 예전 위치는 더 이상 맞지 않음
    pub fn update_input(&mut self, screen_x: f64, screen_y: f64) {
        self.screen_x = screen_x;
        self.screen_y = screen_y;
        self.position = None;
    }

    /// 관찰자에서 화면 좌표를 지나는 빔을 쏴서 광원 위치를 다시 계산함.
    /// 구를 맞혔으면 true.
    pub fn set_position(&mut self, scene: &Scene, observer: Point3<f64>) -> Result<bool, TraceError> {
        let ray = Ray::toward(observer, self.screen_point())?;

        self.position = scene
            .find_closest(&ray, Some(ObjectKind::Sphere))
            .and_then(|hit| {
                let sphere = hit.object.as_sphere()?;
                let on_surface = ray.at(hit.distance);

                Some(sphere.center() + (on_surface - sphere.center()) * sphere.radius() * self.scale)
            });

        Ok(self.position.is_some())
    }
}
