//! 처음부터 끝까지 음영 확인
//!
//! 씬: 원점의 흰 단위 구와 그 아래 회색 바닥 (y = -1). 관찰자는 (0, 0, -3).
//! 광원은 화면 점 (0, 0.5)를 겨누고, 맞은 법선 방향으로 반지름 10배 거리에 놓임

use image::Rgb;
use nalgebra::{Point3, Vector3};
use spotlight::spotlight::ray::Ray;
use spotlight::spotlight::shading::shade;
use spotlight::{Axis, Camera, Light, Plane, Scene, SceneObject, Sphere, Spotlight, TraceError};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRAY: Rgb<u8> = Rgb([100, 100, 100]);

/// 색 비교 허용 오차 (채널당 ±2)
const COLOR_TOLERANCE: u8 = 2;

fn assert_color_near(actual: Rgb<u8>, expected: Rgb<u8>, tolerance: u8, label: &str) {
    let diff = [0, 1, 2].map(|channel| actual[channel].abs_diff(expected[channel]));

    assert!(
        diff.iter().all(|&d| d <= tolerance),
        "{}: expected RGB{:?}, got RGB{:?}, diff={:?}",
        label,
        expected.0,
        actual.0,
        diff
    );
}

fn setup() -> (Spotlight, Light) {
    let mut scene = Scene::default();
    scene.push(Sphere::new(Point3::origin(), 1.0, WHITE).unwrap());
    scene.push(Plane::new(Axis::Y, -1.0, GRAY));

    let spotlight = Spotlight::new(scene, Camera::new(Point3::new(0.0, 0.0, -3.0), 300, 200));
    let mut light = Light::new(0.0, 0.5, 10.0);
    assert_eq!(spotlight.resolve_light(&mut light), Ok(true));
    (spotlight, light)
}

fn sphere_object(spotlight: &Spotlight) -> &SceneObject {
    &spotlight.scene.objects()[0]
}

fn plane_object(spotlight: &Spotlight) -> &SceneObject {
    &spotlight.scene.objects()[1]
}

#[test]
fn light_sits_above_the_front_of_the_sphere() {
    let (_, light) = setup();
    let position = light.position().unwrap();

    // 반지름 1인 구에서 10배 떨어진 곳
    assert!((position.coords.norm() - 10.0).abs() < 1e-9);
    assert!(position.y > 0.0);
    assert!(position.z < 0.0);
}

#[test]
fn point_under_the_light_is_white() {
    let (spotlight, light) = setup();

    // 광원을 정할 때와 같은 빔은 광원 바로 아래의 점을 맞힘
    let color = spotlight.per_pixel(&light, 0.0, 0.5).unwrap().unwrap();
    assert_color_near(color, WHITE, COLOR_TOLERANCE, "point under the light");
}

#[test]
fn terminator_is_near_black() {
    let (spotlight, light) = setup();
    let light_direction = light.position().unwrap().coords / 10.0;

    // 광원에서 접선이 닿는 곳: n · light_direction = 1 / 10
    let sideways = light_direction.cross(&Vector3::x()).normalize();
    let normal = light_direction * 0.1 + sideways * 0.99_f64.sqrt();
    let point = Point3::from(normal);

    let color = shade(sphere_object(&spotlight), &point, &spotlight.scene, &light).unwrap();
    assert_color_near(color, Rgb([0, 0, 0]), COLOR_TOLERANCE, "terminator");
}

#[test]
fn floor_in_the_sphere_shadow_is_ambient() {
    let (spotlight, light) = setup();
    let position = light.position().unwrap();

    let through_center = Ray::toward(position, Point3::origin()).unwrap();
    let floor = match plane_object(&spotlight) {
        SceneObject::Plane(plane) => plane.clone(),
        other => panic!("expected the floor, got {other:?}"),
    };
    let distance = floor.intersect(&through_center).expect("the shadow reaches the floor");
    let point = through_center.at(distance);

    let color = shade(plane_object(&spotlight), &point, &spotlight.scene, &light).unwrap();
    assert_eq!(color, floor.ambient_color());
    assert_ne!(color, GRAY);
}

#[test]
fn floor_below_the_light_is_lit() {
    let (spotlight, light) = setup();
    let position = light.position().unwrap();
    let point = Point3::new(position.x, -1.0, position.z);

    let color = shade(plane_object(&spotlight), &point, &spotlight.scene, &light).unwrap();
    assert_eq!(color, GRAY);
}

#[test]
fn light_aimed_at_empty_space_stops_rendering() {
    let (spotlight, mut light) = setup();

    assert_eq!(spotlight.reposition_light(&mut light, 0.9, 0.6), Ok(false));
    assert_eq!(light.position(), None);
    assert_eq!(spotlight.render_frame(&light), Err(TraceError::NoIllumination));

    // 다시 구를 겨누면 그릴 수 있음
    assert_eq!(spotlight.reposition_light(&mut light, 0.0, 0.5), Ok(true));
    assert!(spotlight.render_frame(&light).is_ok());
}

#[test]
fn rendered_frame_matches_per_pixel_shading() {
    let (spotlight, light) = setup();
    let frame = spotlight.render_frame(&light).unwrap();

    assert_eq!((frame.width, frame.height), (300, 200));
    // 위쪽 가장자리는 바닥도 구도 맞지 않음
    assert_eq!(frame.color_at(0, 0), None);

    let rows = spotlight.camera.sample_rows();
    let columns = spotlight.camera.sample_columns();
    for pixel in frame.pixels.iter().step_by(97) {
        let expected = spotlight
            .per_pixel(&light, columns[pixel.x as usize], rows[pixel.y as usize])
            .unwrap();
        assert_eq!(Some(pixel.color), expected);
    }

    let image = frame.to_image(Rgb([0, 0, 0]));
    assert_eq!(image.dimensions(), (300, 200));
}
