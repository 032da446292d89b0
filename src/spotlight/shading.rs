use image::Rgb;
use nalgebra::{Point3, Unit, Vector3};

use crate::error::TraceError;
use crate::spotlight::light::Light;
use crate::spotlight::ray::Ray;
use crate::spotlight::scene::{Hit, ObjectKind, Plane, Scene, SceneObject, Sphere};
use crate::util::{distance, round4, scale_color};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

// 광원에서 점 쪽으로 쏜 그림자 빔의 결과
struct ShadowProbe<'a> {
    direction: Unit<Vector3<f64>>,
    // 광원에서 점까지의 실제 거리
    distance: f64,
    // 그림자를 드리울 수 있는 건 구뿐
    blocker: Option<Hit<'a>>,
}

fn shadow_probe<'a>(point: &Point3<f64>, scene: &'a Scene, light: Point3<f64>) -> Result<ShadowProbe<'a>, TraceError> {
    let ray = Ray::toward(light, *point)?;

    Ok(ShadowProbe {
        direction: ray.direction,
        distance: distance(&light, point),
        blocker: scene.find_closest(&ray, Some(ObjectKind::Sphere)),
    })
}

/// 물체 위의 한 점의 색. 광원 위치가 정해지지 않았으면 NoIllumination
pub fn shade(object: &SceneObject, point: &Point3<f64>, scene: &Scene, light: &Light) -> Result<Rgb<u8>, TraceError> {
    match object {
        SceneObject::Sphere(sphere) => shade_sphere(sphere, point, scene, light),
        SceneObject::Plane(plane) => shade_plane(plane, point, scene, light),
    }
}

pub fn shade_sphere(sphere: &Sphere, point: &Point3<f64>, scene: &Scene, light: &Light) -> Result<Rgb<u8>, TraceError> {
    let light_position = light.illuminated_position()?;
    let normal = sphere.normal_at(point)?;
    let probe = shadow_probe(point, scene, light_position)?;

    // 점 자신에게 맞는 경우가 부동소수점 오차로 그림자가 되지 않도록 넷째 자리에서 비교
    // 구 뒤쪽 점은 같은 구의 앞면이 먼저 맞아서 검게 됨
    let shadowed = probe
        .blocker
        .is_some_and(|hit| round4(hit.distance) < round4(probe.distance));
    if shadowed {
        return Ok(BLACK);
    }

    // cos(n, -L). 광원을 등진 면은 0
    let intensity = (-normal.dot(probe.direction.as_ref())).max(0.0);
    Ok(scale_color(sphere.color(), intensity))
}

// 평면은 그림자를 드리우지 않음. 반올림 없이 그대로 비교
// TODO: 구와 같은 4자리 반올림 규칙으로 맞출지 정해야 함
pub fn shade_plane(plane: &Plane, point: &Point3<f64>, scene: &Scene, light: &Light) -> Result<Rgb<u8>, TraceError> {
    let light_position = light.illuminated_position()?;
    let probe = shadow_probe(point, scene, light_position)?;

    Ok(match probe.blocker {
        Some(hit) if hit.distance <= probe.distance => plane.ambient_color(),
        _ => plane.color(),
    })
}
