// fixed.rs — 16.16 fixed-point helpers

pub const FRACBITS: i32 = 16;
pub const FRACUNIT: i32 = 1 << FRACBITS;

/// Scale a whole number into 16.16.
#[inline]
pub fn to_fixed(value: i32) -> i32 {
    value.wrapping_shl(FRACBITS as u32)
}

/// Whole part of a 16.16 value.
#[inline]
pub fn from_fixed(value: i32) -> i32 {
    value >> FRACBITS
}

#[inline]
pub fn fixed_from_f64(value: f64) -> i32 {
    (value * FRACUNIT as f64) as i32
}

#[inline]
pub fn fixed_to_f64(value: i32) -> f64 {
    value as f64 / FRACUNIT as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_round_trip() {
        for n in [0, 1, 10, 64, 65535] {
            assert_eq!(from_fixed(to_fixed(n)), n);
        }
        assert_eq!(to_fixed(10), 10 << 16);
    }

    #[test]
    fn test_fixed_real_values() {
        assert_eq!(fixed_from_f64(2.0), 131072);
        assert_eq!(fixed_from_f64(1.0), FRACUNIT);
        assert_eq!(fixed_to_f64(98304), 1.5);
        assert_eq!(fixed_to_f64(to_fixed(7)) * FRACUNIT as f64 / 65536.0, 7.0);
    }
}
