use image::Rgb;
use nalgebra::{Point3, Unit, Vector3};
use serde::Deserialize;

use crate::error::TraceError;
use crate::spotlight::ray::Ray;
use crate::util::{normalize, scale_color};

/// 그림자 진 평면에 쓰는 환경광 세기
pub const AMBIENT: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
    color: Rgb<u8>,
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, color: Rgb<u8>) -> Result<Self, TraceError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(TraceError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        // |o + t * d - c|^2 = r^2, d는 단위 벡터라서 t의 이차항 계수는 1
        // t^2 + b * t + c = 0
        let offset = ray.origin - self.center;

        let b = 2.0 * ray.direction.dot(&offset);
        let c = offset.norm_squared() - self.radius.powi(2);

        // 판별식. 접하는 빔(0)도 안 맞은 것으로 침
        let discriminant = b.powi(2) - 4.0 * c;
        if discriminant <= 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / 2.0;
        let far = (-b + root) / 2.0;

        // 두 근이 모두 양수여야 빔 앞쪽에서 구를 만남. 구 안에서 출발한 빔은 무시
        (near > 0.0 && far > 0.0).then_some(near)
    }

    pub fn normal_at(&self, point: &Point3<f64>) -> Result<Unit<Vector3<f64>>, TraceError> {
        normalize(point - self.center)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    axis: Axis,
    coordinate: f64,
    color: Rgb<u8>,
    ambient_color: Rgb<u8>,
}

impl Plane {
    pub fn new(axis: Axis, coordinate: f64, color: Rgb<u8>) -> Self {
        Self::with_ambient(axis, coordinate, color, AMBIENT)
    }

    pub fn with_ambient(axis: Axis, coordinate: f64, color: Rgb<u8>, ambient: f64) -> Self {
        Self {
            axis,
            coordinate,
            color,
            ambient_color: scale_color(color, ambient),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn ambient_color(&self) -> Rgb<u8> {
        self.ambient_color
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let index = self.axis.index();

        // 고정 축 성분이 0이면 빔이 평면과 평행함
        let step = ray.direction[index];
        if step == 0.0 {
            return None;
        }

        let distance = (self.coordinate - ray.origin[index]) / step;
        (distance >= 0.0).then_some(distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Sphere,
    Plane,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Sphere(_) => ObjectKind::Sphere,
            SceneObject::Plane(_) => ObjectKind::Plane,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            SceneObject::Sphere(sphere) => Some(sphere),
            SceneObject::Plane(_) => None,
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<Plane> for SceneObject {
    fn from(plane: Plane) -> Self {
        SceneObject::Plane(plane)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub distance: f64,
    pub object: &'a SceneObject,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    pub fn push(&mut self, object: impl Into<SceneObject>) {
        self.objects.push(object.into());
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.objects.iter().filter_map(SceneObject::as_sphere)
    }

    /// 빔이 처음 만나는 물체. filter가 있으면 그 종류의 물체만 봄.
    /// 거리가 같으면 씬에 먼저 들어간 물체가 이김.
    pub fn find_closest(&self, ray: &Ray, filter: Option<ObjectKind>) -> Option<Hit<'_>> {
        let mut closest: Option<Hit> = None;

        for object in &self.objects {
            if filter.is_some_and(|kind| kind != object.kind()) {
                continue;
            }

            let Some(distance) = object.intersect(ray) else {
                continue;
            };

            if let Some(Hit { distance: previous_distance, .. }) = closest {
                if previous_distance > distance {
                    closest = Some(Hit { distance, object })
                }
            } else {
                closest = Some(Hit { distance, object })
            }
        }

        closest
    }
}
