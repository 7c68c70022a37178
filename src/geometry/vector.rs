//! 3-vector arithmetic for face-center, normal, and tangent-frame
//! computation.
//!
//! Positions and directions are plain `[f64; 3]`. Meshes of 2-D cells are
//! embedded in a z = const plane of the same representation.

/// Position or direction in 3-space.
pub type Vec3 = [f64; 3];

/// Magnitude tolerance below which a vector is treated as zero.
pub const EPS: f64 = 1e-12;

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(v: Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Unit vector along `v`, or `None` when `v` is shorter than [`EPS`].
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let n = norm(v);
    (n > EPS).then(|| scale(v, 1.0 / n))
}

/// Arithmetic mean of a non-empty point set.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    debug_assert!(!points.is_empty());
    let mut sum = [0.0; 3];
    for &p in points {
        sum = add(sum, p);
    }
    scale(sum, 1.0 / points.len() as f64)
}

/// Area-weighted normal of a polygon given in cyclic node order, by fan
/// decomposition around the centroid.
pub fn polygon_area_vector(points: &[Vec3]) -> Vec3 {
    let c = centroid(points);
    let mut sum = [0.0; 3];
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum = add(sum, cross(sub(points[i], c), sub(points[j], c)));
    }
    scale(sum, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_orthogonal() {
        let a = [1.0, 2.0, 3.0];
        let b = [-2.0, 0.5, 4.0];
        let c = cross(a, b);
        assert!(dot(a, c).abs() < 1e-14);
        assert!(dot(b, c).abs() < 1e-14);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(normalize([0.0, 0.0, 0.0]).is_none());
        assert!(normalize([0.0, 1e-15, 0.0]).is_none());
    }

    #[test]
    fn normalize_has_unit_length() {
        let u = normalize([3.0, 4.0, 0.0]).unwrap();
        assert!((norm(u) - 1.0).abs() < 1e-14);
        assert!((u[0] - 0.6).abs() < 1e-14);
    }

    #[test]
    fn centroid_of_square() {
        let pts = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        assert_eq!(centroid(&pts), [0.5, 0.5, 0.0]);
    }

    #[test]
    fn unit_square_area_vector() {
        let pts = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let a = polygon_area_vector(&pts);
        assert!((a[0]).abs() < 1e-14);
        assert!((a[1]).abs() < 1e-14);
        assert!((a[2] - 1.0).abs() < 1e-14);
    }
}
