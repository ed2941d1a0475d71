//! Integer arithmetic helpers.

/// Adds two integers.
///
/// Overflow wraps around in two's complement rather than panicking, so the
/// function is total over `i64`.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
