//! Fixed-width numeric formatting for 16-character LCD rows

/// Format a non-negative float into a fixed-width decimal string.
///
/// The integer part is right-aligned with spaces in `int_digits` columns
/// and clamped to the largest value that fits; the fractional part is
/// rounded and zero-padded to `dec_digits` digits, capped at all nines
/// so rounding never widens the field.
///
/// `format_fixed(42.5, 4, 1)` gives `"  42.5"`.
pub fn format_fixed(number: f64, int_digits: usize, dec_digits: usize) -> String {
    let max_integer = 10i64.pow(int_digits as u32) - 1;
    let min_integer = -(max_integer / 10);

    let integer_part = (number.trunc() as i64).clamp(min_integer, max_integer);

    let scale = 10i64.pow(dec_digits as u32);
    let decimal_part = ((number.fract().abs() * scale as f64).round() as i64).min(scale - 1);

    format!("{integer_part:>int_digits$}.{decimal_part:0>dec_digits$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_the_integer_part_with_spaces() {
        assert_eq!(format_fixed(42.5, 4, 1), "  42.5");
        assert_eq!(format_fixed(3.0, 2, 2), " 3.00");
    }

    #[test]
    fn zero_pads_the_fractional_part() {
        assert_eq!(format_fixed(55.05, 3, 2), " 55.05");
        assert_eq!(format_fixed(1.5, 1, 3), "1.500");
    }

    #[test]
    fn clamps_oversized_integers() {
        assert_eq!(format_fixed(12345.6, 4, 1), "9999.6");
        assert_eq!(format_fixed(100.0, 2, 1), "99.0");
    }

    #[test]
    fn rounds_the_fraction() {
        assert_eq!(format_fixed(0.26, 1, 1), "0.3");
        assert_eq!(format_fixed(12.34, 2, 1), "12.3");
    }

    #[test]
    fn rounding_never_widens_the_field() {
        // 0.96 would round up to 1.0 at one digit; cap at .9 instead
        assert_eq!(format_fixed(5.96, 1, 1), "5.9");
    }

    #[test]
    fn width_is_always_int_digits_plus_point_plus_dec_digits() {
        for value in [0.0, 0.1, 9.99, 42.0, 123.456, 99999.0] {
            let s = format_fixed(value, 3, 1);
            assert_eq!(s.len(), 5, "unexpected width for {value}: {s:?}");
        }
    }
}
