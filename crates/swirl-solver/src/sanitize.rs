//! Numerical fault containment.

/// Reset every NaN or infinite cell of `field` to zero.
///
/// Returns the number of cells reset.
pub fn sanitize(field: &mut [f32]) -> usize {
    let mut reset = 0;
    for v in field.iter_mut() {
        if !v.is_finite() {
            *v = 0.0;
            reset += 1;
        }
    }
    reset
}
