use nalgebra::{Point3, Unit, Vector3};

use crate::error::TraceError;
use crate::util::normalize;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Unit<Vector3<f64>>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Unit<Vector3<f64>>) -> Self {
        Self { origin, direction }
    }

    // origin에서 target 쪽을 향하는 빔
    pub fn toward(origin: Point3<f64>, target: Point3<f64>) -> Result<Self, TraceError> {
        Ok(Self::new(origin, normalize(target - origin)?))
    }

    pub fn at(&self, distance: f64) -> Point3<f64> {
        self.origin + self.direction.as_ref() * distance
    }
}
