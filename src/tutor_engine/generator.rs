use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tutor_engine::{
    error::{ConfigError, ProblemError},
    models::{Difficulty, Operands, Problem, ProblemId, ProblemKind},
    random::RandomSource,
};

static NEXT_PROBLEM_SEQ: AtomicU64 = AtomicU64::new(1);

const TWO_DIGIT: RangeInclusive<u32> = 10..=99;
const THREE_DIGIT: RangeInclusive<u32> = 100..=999;
const FOUR_DIGIT: RangeInclusive<u32> = 1000..=9999;
const ONE_DIGIT_FACTOR: RangeInclusive<u32> = 2..=9;
const TWO_DIGIT_DIVISOR: RangeInclusive<u32> = 10..=89;

fn draw<R: RandomSource + ?Sized>(rng: &mut R, band: &RangeInclusive<u32>) -> u32 {
    rng.pick(*band.start(), *band.end())
}

/// Unique id: kind prefix, process-wide sequence number, random tag.
fn make_problem_id<R: RandomSource + ?Sized>(kind: ProblemKind, rng: &mut R) -> ProblemId {
    let seq = NEXT_PROBLEM_SEQ.fetch_add(1, Ordering::Relaxed);
    ProblemId::from(format!("{}-{:06}-{:08X}", kind.id_prefix(), seq, rng.tag()))
}

/// Inclusive (dividend, divisor) bands for a difficulty.
///
/// Medium flips a coin first: heads pairs the three-digit dividend with a
/// one-digit divisor, tails with a two-digit one.
pub fn division_bands<R: RandomSource + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
    match difficulty {
        Difficulty::Easy => (TWO_DIGIT, ONE_DIGIT_FACTOR),
        Difficulty::Medium => {
            if rng.flip() {
                (THREE_DIGIT, ONE_DIGIT_FACTOR)
            } else {
                (THREE_DIGIT, TWO_DIGIT_DIVISOR)
            }
        }
        Difficulty::Hard => (FOUR_DIGIT, TWO_DIGIT_DIVISOR),
    }
}

/// Inclusive (multiplicand, multiplier) bands for a difficulty.
pub fn multiplication_bands(difficulty: Difficulty) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
    match difficulty {
        Difficulty::Easy   => (TWO_DIGIT, ONE_DIGIT_FACTOR),
        Difficulty::Medium => (TWO_DIGIT, TWO_DIGIT),
        Difficulty::Hard   => (THREE_DIGIT, TWO_DIGIT),
    }
}

pub fn generate_division<R: RandomSource + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    let (dividend_band, divisor_band) = division_bands(difficulty, rng);
    let dividend = draw(rng, &dividend_band);
    let divisor = draw(rng, &divisor_band);
    let id = make_problem_id(ProblemKind::Division, rng);
    debug!(%id, %difficulty, dividend, divisor, "generated division problem");
    Problem::from_parts(id, Operands::Division { dividend, divisor }, difficulty)
}

pub fn generate_multiplication<R: RandomSource + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Problem {
    let (multiplicand_band, multiplier_band) = multiplication_bands(difficulty);
    let multiplicand = draw(rng, &multiplicand_band);
    let multiplier = draw(rng, &multiplier_band);
    let id = make_problem_id(ProblemKind::Multiplication, rng);
    debug!(%id, %difficulty, multiplicand, multiplier, "generated multiplication problem");
    Problem::from_parts(id, Operands::Multiplication { multiplicand, multiplier }, difficulty)
}

/// Dispatch on the problem kind.
pub fn generate_problem<R: RandomSource + ?Sized>(
    kind: ProblemKind,
    difficulty: Difficulty,
    rng: &mut R,
) -> Problem {
    match kind {
        ProblemKind::Division       => generate_division(difficulty, rng),
        ProblemKind::Multiplication => generate_multiplication(difficulty, rng),
    }
}

// ---------------------------------------------------------------------------
// Request-driven entry point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: ProblemKind,
    pub difficulty: Difficulty,
    /// `Some` reproduces the same problem operands every time; `None` draws
    /// from entropy.
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(kind: ProblemKind, difficulty: Difficulty) -> Self {
        GenerationRequest { kind, difficulty, rng_seed: None }
    }

    /// Build a request from the string tags a front-end hands over.
    pub fn from_tags(kind: &str, difficulty: &str) -> Result<Self, ConfigError> {
        Ok(GenerationRequest::new(kind.parse()?, difficulty.parse()?))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

pub fn generate(request: &GenerationRequest) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_problem(request.kind, request.difficulty, &mut rng)
}

/// Build a problem from caller-chosen operands (custom practice, replays).
///
/// The id still comes from the shared sequence so it stays unique.
pub fn custom_problem<R: RandomSource + ?Sized>(
    kind: ProblemKind,
    first: u32,
    second: u32,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Problem, ProblemError> {
    let id = make_problem_id(kind, rng);
    match kind {
        ProblemKind::Division       => Problem::division(id, first, second, difficulty),
        ProblemKind::Multiplication => Problem::multiplication(id, first, second, difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::random::ScriptedSource;

    #[test]
    fn scripted_easy_division_uses_exact_operands() {
        let mut src = ScriptedSource::new(vec![84, 3, 0xABCD]);
        let p = generate_division(Difficulty::Easy, &mut src);
        assert_eq!(p.operands(), Operands::Division { dividend: 84, divisor: 3 });
        assert!(p.id().as_str().starts_with("DIV-"));
        assert!(p.id().as_str().ends_with("-0000ABCD"));
    }

    #[test]
    fn medium_division_coin_selects_divisor_band() {
        // heads: one-digit divisor; the 40 is clamped into 2..=9
        let mut heads = ScriptedSource::new(vec![1, 500, 40, 0]);
        let p = generate_division(Difficulty::Medium, &mut heads);
        assert_eq!(p.operands(), Operands::Division { dividend: 500, divisor: 9 });

        // tails: two-digit divisor
        let mut tails = ScriptedSource::new(vec![0, 500, 40, 0]);
        let p = generate_division(Difficulty::Medium, &mut tails);
        assert_eq!(p.operands(), Operands::Division { dividend: 500, divisor: 40 });
    }

    #[test]
    fn scripted_hard_multiplication_uses_exact_operands() {
        let mut src = ScriptedSource::new(vec![345, 67, 1]);
        let p = generate_multiplication(Difficulty::Hard, &mut src);
        assert_eq!(
            p.operands(),
            Operands::Multiplication { multiplicand: 345, multiplier: 67 }
        );
        assert_eq!(p.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn ids_are_unique_even_with_identical_tags() {
        let mut src = ScriptedSource::new(vec![50, 5, 7]);
        let a = generate_division(Difficulty::Easy, &mut src);
        let b = generate_division(Difficulty::Easy, &mut src);
        assert_eq!(a.operands(), b.operands());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn from_tags_rejects_unknown_difficulty() {
        let err = GenerationRequest::from_tags("division", "impossible").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDifficulty(_)));
        let ok = GenerationRequest::from_tags("Multiplication", "hard").unwrap();
        assert_eq!(ok.kind, ProblemKind::Multiplication);
        assert_eq!(ok.difficulty, Difficulty::Hard);
    }

    #[test]
    fn seeded_request_is_deterministic() {
        let req = GenerationRequest::new(ProblemKind::Division, Difficulty::Hard).with_seed(42);
        assert_eq!(generate(&req).operands(), generate(&req).operands());
    }

    #[test]
    fn custom_problem_validates_operands() {
        let mut src = ScriptedSource::new(vec![0]);
        assert!(custom_problem(ProblemKind::Division, 84, 3, Difficulty::Easy, &mut src).is_ok());
        assert_eq!(
            custom_problem(ProblemKind::Division, 84, 1, Difficulty::Easy, &mut src).unwrap_err(),
            ProblemError::DivisorTooSmall(1)
        );
    }
}
