/// Clamp `value` into `[min, max]`. Works for ints and floats alike.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `a + (b - a) * t` with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp(t, 0.0, 1.0)
}

/// Floored modulo: the result takes the sign of the divisor.
#[inline]
pub fn floor_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// World coordinate -> cell coordinate, `floor(pos / cell_size)`.
///
/// Negative positions map to negative cells (never truncated toward zero).
#[inline]
pub fn world_to_cell(pos: f32, cell_size: f32) -> i32 {
    (pos / cell_size).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_cell_floors_negatives() {
        assert_eq!(world_to_cell(15.9, 16.0), 0);
        assert_eq!(world_to_cell(16.0, 16.0), 1);
        assert_eq!(world_to_cell(-0.1, 16.0), -1);
    }

    #[test]
    fn test_floor_mod() {
        assert_eq!(floor_mod(-1.0, 16.0), 15.0);
        assert_eq!(floor_mod(17.0, 16.0), 1.0);
    }

    #[test]
    fn test_clamp_and_lerp() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-0.5f32, 0.0, 1.0), 0.0);
        assert_eq!(lerp(0.0, 16.0, 0.25), 4.0);
        assert_eq!(lerp(0.0, 16.0, 2.0), 16.0);
    }
}
