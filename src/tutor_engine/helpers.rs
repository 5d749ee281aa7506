//! Small arithmetic helpers shared by the steppers and the ledger.
//!
//! The steppers work digit by digit in base 10, and both the ledger and the
//! per-kind stats report whole-number percentages. These helpers keep that
//! arithmetic in one place so the digit order and rounding rule cannot drift
//! between modules.

/// Base-10 digits, most significant first. `0` yields `[0]`.
pub fn decimal_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// `10^exp`.
pub fn pow10(exp: usize) -> u64 {
    (0..exp).fold(1u64, |acc, _| acc * 10)
}

/// `round(100 × part / whole)` with halves rounded up, or 0 when `whole` is 0.
///
/// Integer-only so 1/8 (12.5%) rounds to 13 exactly rather than depending on
/// float representation.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    ((200 * part + whole) / (2 * whole)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_most_significant_first() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(7), vec![7]);
        assert_eq!(decimal_digits(4050), vec![4, 0, 5, 0]);
    }

    #[test]
    fn pow10_small_exponents() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(1), 10);
        assert_eq!(pow10(4), 10_000);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(3, 4), 75);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 5), 100);
    }
}
