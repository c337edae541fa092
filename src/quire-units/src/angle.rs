//! Canonicalization of angles.
//!
//! Angles are kept in degrees within `[0, 360)`. Any value reached by
//! arithmetic is folded back into that range, so two angles naming the
//! same direction always compare equal.

/// Degrees in one full turn.
pub const FULL_TURN: f64 = 360.0;

/// Folds an angle in degrees into the canonical range `[0, 360)`.
///
/// The result is stable under repeated application. Non-finite input
/// yields NaN.
pub fn normalize(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(FULL_TURN);

    // Tiny negative angles round up to a full turn.
    if folded >= FULL_TURN {
        0.0
    } else {
        // Adding zero turns a negative zero into a positive one.
        folded + 0.0
    }
}
