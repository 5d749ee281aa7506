//! Long division, one dividend digit at a time.
//!
//! Each step brings down the next digit of the dividend onto the carried
//! remainder, picks the largest quotient digit that fits, and subtracts.
//! Steps whose quotient digit is zero are kept, including leading ones, so
//! the step list always has one entry per dividend digit.

use serde::{Deserialize, Serialize};

use crate::tutor_engine::{error::ProblemError, helpers::decimal_digits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionStep {
    /// 1-based position in the sequence.
    pub step_number: usize,
    /// Carried remainder × 10 + the brought-down digit.
    pub current_number: u64,
    pub quotient_digit: u8,
    /// `quotient_digit × divisor`.
    pub product: u64,
    /// `current_number − product`; always below the divisor.
    pub remainder: u64,
    pub brought_down_digit: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionWork {
    pub dividend: u32,
    pub divisor: u32,
    pub steps: Vec<DivisionStep>,
    pub quotient: u64,
    pub remainder: u64,
}

impl DivisionWork {
    /// Quotient digits in emission order, leading zeros included.
    pub fn quotient_digits(&self) -> String {
        self.steps
            .iter()
            .map(|s| char::from(b'0' + s.quotient_digit))
            .collect()
    }

    /// Index of the first step with a nonzero quotient digit, if any.
    pub fn first_significant_step(&self) -> Option<usize> {
        self.steps.iter().position(|s| s.quotient_digit != 0)
    }

    pub fn has_remainder(&self) -> bool {
        self.remainder != 0
    }
}

pub fn long_division(dividend: u32, divisor: u32) -> Result<DivisionWork, ProblemError> {
    if divisor == 0 {
        return Err(ProblemError::ZeroDivisor);
    }
    let d = u64::from(divisor);

    let mut steps = Vec::new();
    let mut carry = 0u64;
    let mut quotient = 0u64;

    for (idx, digit) in decimal_digits(u64::from(dividend)).into_iter().enumerate() {
        let current_number = carry * 10 + u64::from(digit);
        let q = current_number / d;
        let product = q * d;
        let remainder = current_number - product;

        // carry < d, so current_number < 10 × d and q is a single digit
        let quotient_digit = q as u8;
        steps.push(DivisionStep {
            step_number: idx + 1,
            current_number,
            quotient_digit,
            product,
            remainder,
            brought_down_digit: digit,
        });

        quotient = quotient * 10 + q;
        carry = remainder;
    }

    Ok(DivisionWork { dividend, divisor, steps, quotient, remainder: carry })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_four_by_three() {
        let work = long_division(84, 3).unwrap();
        assert_eq!(work.steps.len(), 2);

        let first = work.steps[0];
        assert_eq!(
            (first.current_number, first.quotient_digit, first.product, first.remainder),
            (8, 2, 6, 2)
        );
        assert_eq!(first.brought_down_digit, 8);

        let second = work.steps[1];
        assert_eq!(
            (second.current_number, second.quotient_digit, second.product, second.remainder),
            (24, 8, 24, 0)
        );
        assert_eq!(second.step_number, 2);

        assert_eq!(work.quotient, 28);
        assert_eq!(work.remainder, 0);
        assert!(!work.has_remainder());
    }

    #[test]
    fn leading_zero_quotient_steps_are_kept() {
        let work = long_division(125, 25).unwrap();
        assert_eq!(work.steps.len(), 3);
        assert_eq!(work.quotient_digits(), "005");
        assert_eq!(work.quotient, 5);
        assert_eq!(work.first_significant_step(), Some(2));
    }

    #[test]
    fn nonzero_final_remainder_is_reported() {
        let work = long_division(9999, 89).unwrap();
        assert_eq!(work.quotient, 112);
        assert_eq!(work.remainder, 31);
        assert!(work.has_remainder());
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(long_division(84, 0).unwrap_err(), ProblemError::ZeroDivisor);
    }

    #[test]
    fn zero_dividend_yields_one_step() {
        let work = long_division(0, 7).unwrap();
        assert_eq!(work.steps.len(), 1);
        assert_eq!(work.quotient, 0);
        assert_eq!(work.first_significant_step(), None);
    }

    #[test]
    fn every_step_keeps_remainder_below_divisor() {
        for dividend in [10u32, 99, 100, 507, 999, 1000, 4321, 9999] {
            for divisor in 2u32..=89 {
                let work = long_division(dividend, divisor).unwrap();
                for s in &work.steps {
                    assert!(s.remainder < u64::from(divisor), "{dividend}/{divisor}: {s:?}");
                    assert!(s.quotient_digit <= 9);
                    // maximal digit: one more would overshoot
                    assert!((u64::from(s.quotient_digit) + 1) * u64::from(divisor) > s.current_number);
                }
            }
        }
    }
}
