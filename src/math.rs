use crate::error::DegenerateVector;
use crate::*;

/// Tolerance for "is this direction unit length" and "is this ray parallel
/// to that plane".
pub const EPSILON: f64 = 1e-4;

pub fn add(a: &V3, b: &V3) -> V3 {
    a + b
}

pub fn sub(a: &V3, b: &V3) -> V3 {
    a - b
}

pub fn scale(a: &V3, s: f64) -> V3 {
    a * s
}

pub fn dot(a: &V3, b: &V3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product.
pub fn cross(a: &V3, b: &V3) -> V3 {
    a.cross(b)
}

/// Divides `v` by its Euclidean norm. A zero vector has no direction and is
/// reported instead of turning into NaNs.
pub fn normalize(v: &V3) -> Result<V3, DegenerateVector> {
    // scale by the largest component first so the squared sum cannot
    // overflow or underflow for very large or very small vectors
    let max = v.amax();
    if max == 0.0 || !v.iter().all(|c| c.is_finite()) {
        return Err(DegenerateVector {
            x: v[0],
            y: v[1],
            z: v[2],
        });
    }
    let scaled = v / max;
    Ok(&scaled / scaled.norm())
}
