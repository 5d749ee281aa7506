//! Ground-truth answers and learner-input checks.
//!
//! Both validation modes read from the same [`Worksheet`]: whole-answer mode
//! compares against [`Worksheet::final_answer`], stepwise mode against one
//! row. Learner input arrives as raw text; anything that does not parse as
//! a non-negative integer is simply a mismatch.

use serde::{Deserialize, Serialize};

use crate::tutor_engine::{
    error::ProblemError,
    models::Problem,
    worksheet::{steps, StepRef, Worksheet},
};

pub fn division_answer(dividend: u32, divisor: u32) -> Result<u64, ProblemError> {
    if divisor == 0 {
        return Err(ProblemError::ZeroDivisor);
    }
    Ok(u64::from(dividend / divisor))
}

pub fn multiplication_answer(multiplicand: u32, multiplier: u32) -> u64 {
    u64::from(multiplicand) * u64::from(multiplier)
}

/// Truncated quotient for division, exact product for multiplication.
pub fn answer(problem: &Problem) -> u64 {
    steps(problem).final_answer()
}

/// Parse one learner entry. Surrounding whitespace is ignored; empty,
/// signed, fractional or non-numeric input yields `None`.
pub fn parse_entry(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// The final answer in whole-answer mode.
    Answer(String),
    /// One long-division row.
    DivisionStep {
        quotient_digit: String,
        product: String,
        remainder: String,
    },
    /// One partial product of long multiplication.
    PartialProduct(String),
}

impl Submission {
    pub fn answer(value: impl Into<String>) -> Self {
        Submission::Answer(value.into())
    }

    pub fn division_step(
        quotient_digit: impl Into<String>,
        product: impl Into<String>,
        remainder: impl Into<String>,
    ) -> Self {
        Submission::DivisionStep {
            quotient_digit: quotient_digit.into(),
            product: product.into(),
            remainder: remainder.into(),
        }
    }

    pub fn partial_product(value: impl Into<String>) -> Self {
        Submission::PartialProduct(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    WholeAnswer,
    /// 0-based row index into the worksheet.
    Stepwise { step: usize },
}

/// A cell the learner filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepField {
    Answer,
    QuotientDigit,
    Product,
    Remainder,
    PartialProduct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepCheck {
    Match,
    /// Cells that did not match, in display order. A submission of the
    /// wrong shape lists every cell the expected row has.
    Mismatch(Vec<StepField>),
    /// No row at that index (or the session is already complete).
    OutOfRange,
}

impl StepCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, StepCheck::Match)
    }

    fn from_mismatches(fields: Vec<StepField>) -> Self {
        if fields.is_empty() {
            StepCheck::Match
        } else {
            StepCheck::Mismatch(fields)
        }
    }
}

fn entry_matches(raw: &str, expected: u64) -> bool {
    parse_entry(raw) == Some(expected)
}

pub fn check_answer(worksheet: &Worksheet, submission: &Submission) -> StepCheck {
    match submission {
        Submission::Answer(raw) if entry_matches(raw, worksheet.final_answer()) => StepCheck::Match,
        _ => StepCheck::Mismatch(vec![StepField::Answer]),
    }
}

pub fn check_step(worksheet: &Worksheet, index: usize, submission: &Submission) -> StepCheck {
    let Some(expected) = worksheet.step(index) else {
        return StepCheck::OutOfRange;
    };

    match (expected, submission) {
        (
            StepRef::Division(step),
            Submission::DivisionStep { quotient_digit, product, remainder },
        ) => {
            let mut wrong = Vec::new();
            if !entry_matches(quotient_digit, u64::from(step.quotient_digit)) {
                wrong.push(StepField::QuotientDigit);
            }
            if !entry_matches(product, step.product) {
                wrong.push(StepField::Product);
            }
            if !entry_matches(remainder, step.remainder) {
                wrong.push(StepField::Remainder);
            }
            StepCheck::from_mismatches(wrong)
        }
        (StepRef::Division(_), _) => StepCheck::Mismatch(vec![
            StepField::QuotientDigit,
            StepField::Product,
            StepField::Remainder,
        ]),
        (StepRef::Partial(partial), Submission::PartialProduct(raw)) => {
            if entry_matches(raw, partial.value) {
                StepCheck::Match
            } else {
                StepCheck::Mismatch(vec![StepField::PartialProduct])
            }
        }
        (StepRef::Partial(_), _) => StepCheck::Mismatch(vec![StepField::PartialProduct]),
    }
}

/// Single-shot check in either mode.
pub fn validate(problem: &Problem, submission: &Submission, mode: ValidationMode) -> bool {
    let worksheet = steps(problem);
    match mode {
        ValidationMode::WholeAnswer    => check_answer(&worksheet, submission).is_match(),
        ValidationMode::Stepwise { step } => check_step(&worksheet, step, submission).is_match(),
    }
}

// ---------------------------------------------------------------------------
// Stepwise session
// ---------------------------------------------------------------------------

/// Walks a learner through a worksheet one row at a time. The cursor only
/// moves forward on an exact match.
#[derive(Debug, Clone)]
pub struct StepwiseSession {
    problem: Problem,
    worksheet: Worksheet,
    cursor: usize,
    misses: u32,
}

impl StepwiseSession {
    pub fn new(problem: Problem) -> Self {
        let worksheet = steps(&problem);
        StepwiseSession { problem, worksheet, cursor: 0, misses: 0 }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    /// 0-based index of the row awaiting input.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The row awaiting input, or `None` once complete.
    pub fn current_step(&self) -> Option<StepRef<'_>> {
        self.worksheet.step(self.cursor)
    }

    /// Failed submissions so far.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.worksheet.len()
    }

    pub fn submit(&mut self, submission: &Submission) -> StepCheck {
        if self.is_complete() {
            return StepCheck::OutOfRange;
        }
        let check = check_step(&self.worksheet, self.cursor, submission);
        if check.is_match() {
            self.cursor += 1;
        } else {
            self.misses += 1;
        }
        check
    }
}
