//! Angle utilities used by the saliency field and the selector.
use nalgebra::Vector2;

/// Unit vector pointing along `angle` (radians).
#[inline]
pub fn direction_vector(angle: f32) -> Vector2<f32> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Parallel-alignment term `cos²(a − b)` in [0, 1].
///
/// Evaluated as the squared dot product of the two unit direction vectors,
/// so it is 1 for parallel and antiparallel directions and 0 for
/// perpendicular ones.
#[inline]
pub fn parallel_alignment(a: f32, b: f32) -> f32 {
    let dot = direction_vector(a).dot(&direction_vector(b));
    (dot * dot).clamp(0.0, 1.0)
}
