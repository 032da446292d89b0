use image::Rgb;
use nalgebra::{Point3, Unit, Vector3};

use crate::error::TraceError;

pub fn normalize(vector: Vector3<f64>) -> Result<Unit<Vector3<f64>>, TraceError> {
    let norm = vector.norm();
    // 길이가 0인 벡터는 방향이 없음. NaN을 조용히 돌려주지 않고 실패시킴
    if norm == 0.0 || !norm.is_finite() {
        return Err(TraceError::DegenerateVector);
    }

    Ok(Unit::new_unchecked(vector / norm))
}

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// 소수점 넷째 자리까지 반올림 (0.5는 0에서 먼 쪽으로)
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// start부터 end까지 양 끝을 포함해 고르게 count개를 뽑음
pub fn linspace(start: f64, end: f64, count: u32) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

// 채널마다 곱한 뒤 소수점 아래는 버림
pub fn scale_color(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    Rgb(color.0.map(|channel| (channel as f64 * factor) as u8))
}

#[cfg(test)]
pub(crate) fn random_vec(range: std::ops::Range<f64>) -> Vector3<f64> {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    Vector3::new(
        rng.gen_range(range.clone()),
        rng.gen_range(range.clone()),
        rng.gen_range(range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_gives_unit_length() {
        let unit = normalize(Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((unit.norm() - 1.0).abs() < 1e-12);
        assert!((unit.x - 0.6).abs() < 1e-12);
        assert!((unit.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert_eq!(normalize(Vector3::zeros()), Err(TraceError::DegenerateVector));
    }

    #[test]
    fn normalize_rejects_nan() {
        let vector = Vector3::new(f64::NAN, 1.0, 0.0);
        assert_eq!(normalize(vector), Err(TraceError::DegenerateVector));
    }

    #[test]
    fn round4_cuts_float_noise() {
        assert_eq!(round4(2.000_000_000_1), round4(1.999_999_999_9));
        assert_eq!(round4(1.23456), 1.2346);
        assert_ne!(round4(1.0), round4(1.0002));
    }

    #[test]
    fn linspace_includes_both_ends() {
        let samples: Vec<f64> = linspace(-1.0, 1.0, 5).collect();
        assert_eq!(samples, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let single: Vec<f64> = linspace(0.3, 0.9, 1).collect();
        assert_eq!(single, vec![0.3]);

        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    }

    #[test]
    fn scale_color_truncates() {
        assert_eq!(scale_color(Rgb([130, 130, 130]), 0.06), Rgb([7, 7, 7]));
        assert_eq!(scale_color(Rgb([255, 10, 0]), 0.5), Rgb([127, 5, 0]));
        assert_eq!(scale_color(Rgb([255, 255, 255]), 0.0), Rgb([0, 0, 0]));
    }
}
