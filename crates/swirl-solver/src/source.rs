//! Source injection.

/// Add `source * dt` to every cell of `field`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn add_source(field: &mut [f32], source: &[f32], dt: f32) {
    assert_eq!(field.len(), source.len(), "field/source length mismatch");
    for (f, &s) in field.iter_mut().zip(source) {
        *f += s * dt;
    }
}
