use crate::CoreError;

/// Floating point type used throughout the core.
pub type Real = f64;

/// Round to 2 decimal places, the display precision sensor readings carry.
pub fn round2(v: Real) -> Real {
    (v * 100.0).round() / 100.0
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
