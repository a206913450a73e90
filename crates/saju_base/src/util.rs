//! Shared cyclic-index helpers.

/// Floor-mod `value` into `[0, base)`, also for negative input.
pub fn cyclic_index(value: i64, base: u8) -> u8 {
    value.rem_euclid(base as i64) as u8
}
