use nalgebra::Point3;

use crate::error::TraceError;
use crate::spotlight::ray::Ray;
use crate::util::linspace;

/// z = 0 평면 위의 화면 사각형. 시야를 정함
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenRect {
    // 가로는 -1..1, 세로는 화면 비율에 맞춤
    pub fn for_aspect(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;

        Self {
            left: -1.0,
            top: 1.0 / ratio,
            right: 1.0,
            bottom: -1.0 / ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub observer: Point3<f64>,
    pub screen: ScreenRect,
    width: u32,
    height: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, -3.0), 300, 200)
    }
}

impl Camera {
    pub fn new(observer: Point3<f64>, width: u32, height: u32) -> Self {
        Self::with_screen(observer, ScreenRect::for_aspect(width, height), width, height)
    }

    pub fn with_screen(observer: Point3<f64>, screen: ScreenRect, width: u32, height: u32) -> Self {
        Self {
            observer,
            screen,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // 위에서 아래로
    pub fn sample_rows(&self) -> Vec<f64> {
        linspace(self.screen.top, self.screen.bottom, self.height).collect()
    }

    // 왼쪽에서 오른쪽으로
    pub fn sample_columns(&self) -> Vec<f64> {
        linspace(self.screen.left, self.screen.right, self.width).collect()
    }

    pub fn primary_ray(&self, screen_x: f64, screen_y: f64) -> Result<Ray, TraceError> {
        Ray::toward(self.observer, Point3::new(screen_x, screen_y, 0.0))
    }
}
