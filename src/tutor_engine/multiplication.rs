use serde::{Deserialize, Serialize};

use crate::tutor_engine::helpers::{decimal_digits, pow10};

/// One row of long multiplication: the multiplicand times a single digit of
/// the multiplier, before the positional shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProduct {
    pub digit: u8,
    pub value: u64,
    /// Decimal places to shift left when summing; 0 is the ones digit.
    pub position: usize,
}

impl PartialProduct {
    pub fn shifted(&self) -> u64 {
        self.value * pow10(self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicationWork {
    pub multiplicand: u32,
    pub multiplier: u32,
    /// Least-significant multiplier digit first.
    pub partials: Vec<PartialProduct>,
    /// Computed directly as `multiplicand × multiplier`, not from the partials.
    pub product: u64,
}

impl MultiplicationWork {
    /// Σ shifted partial products. Equals `product` by the distributive law.
    pub fn partials_sum(&self) -> u64 {
        self.partials.iter().map(PartialProduct::shifted).sum()
    }
}

pub fn long_multiplication(multiplicand: u32, multiplier: u32) -> MultiplicationWork {
    let m = u64::from(multiplicand);
    let partials = decimal_digits(u64::from(multiplier))
        .into_iter()
        .rev()
        .enumerate()
        .map(|(position, digit)| PartialProduct {
            digit,
            value: m * u64::from(digit),
            position,
        })
        .collect();

    MultiplicationWork {
        multiplicand,
        multiplier,
        partials,
        product: m * u64::from(multiplier),
    }
}
