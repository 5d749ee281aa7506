use serde::Serialize;

use crate::tutor_engine::{
    division::{long_division, DivisionStep, DivisionWork},
    models::{Operands, Problem},
    multiplication::{long_multiplication, MultiplicationWork, PartialProduct},
};

/// The full pencil-and-paper decomposition of one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Worksheet {
    Division(DivisionWork),
    Multiplication(MultiplicationWork),
}

/// One checkable row of a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRef<'a> {
    Division(&'a DivisionStep),
    Partial(&'a PartialProduct),
}

impl Worksheet {
    pub fn len(&self) -> usize {
        match self {
            Worksheet::Division(work)       => work.steps.len(),
            Worksheet::Multiplication(work) => work.partials.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn step(&self, index: usize) -> Option<StepRef<'_>> {
        match self {
            Worksheet::Division(work)       => work.steps.get(index).map(StepRef::Division),
            Worksheet::Multiplication(work) => work.partials.get(index).map(StepRef::Partial),
        }
    }

    /// Final answer: truncated quotient or full product.
    pub fn final_answer(&self) -> u64 {
        match self {
            Worksheet::Division(work)       => work.quotient,
            Worksheet::Multiplication(work) => work.product,
        }
    }
}

/// `Problem` never carries a zero divisor; if one slips through, the
/// worksheet has no rows rather than a panic.
fn division_work(dividend: u32, divisor: u32) -> DivisionWork {
    long_division(dividend, divisor).unwrap_or_else(|_| DivisionWork {
        dividend,
        divisor,
        steps: Vec::new(),
        quotient: 0,
        remainder: u64::from(dividend),
    })
}

/// Decompose a problem into its ordered steps.
pub fn steps(problem: &Problem) -> Worksheet {
    match problem.operands() {
        Operands::Division { dividend, divisor } => {
            Worksheet::Division(division_work(dividend, divisor))
        }
        Operands::Multiplication { multiplicand, multiplier } => {
            Worksheet::Multiplication(long_multiplication(multiplicand, multiplier))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::models::{Difficulty, ProblemId};

    fn problem(operands: Operands) -> Problem {
        Problem::from_parts(ProblemId::from("W".to_string()), operands, Difficulty::Easy)
    }

    #[test]
    fn rows_are_indexed_in_order() {
        let sheet = steps(&problem(Operands::Division { dividend: 84, divisor: 3 }));
        assert_eq!(sheet.len(), 2);
        assert!(matches!(sheet.step(1), Some(StepRef::Division(s)) if s.current_number == 24));
        assert!(sheet.step(2).is_none());
        assert_eq!(sheet.final_answer(), 28);

        let sheet = steps(&problem(Operands::Multiplication { multiplicand: 23, multiplier: 12 }));
        assert!(matches!(sheet.step(0), Some(StepRef::Partial(p)) if p.value == 46));
        assert_eq!(sheet.final_answer(), 276);
    }

    #[test]
    fn zero_divisor_yields_an_empty_worksheet() {
        let sheet = steps(&problem(Operands::Division { dividend: 84, divisor: 0 }));
        assert!(sheet.is_empty());
        assert_eq!(sheet.final_answer(), 0);
    }
}
