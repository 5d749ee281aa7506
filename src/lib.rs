//! # long_arith_tutor
//!
//! The engine behind a long-division and long-multiplication tutor.
//!
//! This library generates practice problems in three difficulty bands,
//! breaks each one down into the rows a learner writes on paper, checks what
//! the learner types against those rows, and keeps a persisted progress
//! ledger (accuracy, streaks, per-kind counts). Rendering and hint text are
//! left to the front-end.
//!
//! ## How it works
//!
//! 1. Call [`generate_problem`] with a [`ProblemKind`], a [`Difficulty`] and a
//!    random source (any `rand::Rng`, or a [`ScriptedSource`] in tests), or
//!    build a [`GenerationRequest`] and call [`generate`].
//! 2. Call [`steps`] to get the [`Worksheet`]: one [`DivisionStep`] per
//!    dividend digit, or one [`PartialProduct`] per multiplier digit.
//! 3. Check learner input with [`validate`], either against the final answer
//!    ([`ValidationMode::WholeAnswer`]) or row by row
//!    ([`ValidationMode::Stepwise`]). [`StepwiseSession`] tracks the current
//!    row for a step-gated flow.
//! 4. Record every attempt, right or wrong, in a [`ProgressLedger`].
//!
//! ## Quick start
//!
//! ```rust
//! use long_arith_tutor::{
//!     generate_problem, steps, validate, Difficulty, MemoryStore, ProblemKind,
//!     ProgressLedger, ScriptedSource, Submission, ValidationMode, Worksheet,
//! };
//!
//! // Scripted draws: dividend 84, divisor 3, id tag 1.
//! let mut rng = ScriptedSource::new(vec![84, 3, 1]);
//! let problem = generate_problem(ProblemKind::Division, Difficulty::Easy, &mut rng);
//!
//! if let Worksheet::Division(work) = steps(&problem) {
//!     assert_eq!(work.quotient, 28);
//!     assert_eq!(work.steps[0].current_number, 8);
//! }
//!
//! let ok = validate(&problem, &Submission::answer("28"), ValidationMode::WholeAnswer);
//! assert!(ok);
//!
//! let mut ledger = ProgressLedger::new(MemoryStore::new());
//! let progress = ledger.record_attempt(problem.kind(), ok, 35);
//! assert_eq!(progress.accuracy_rate, 100);
//! ```

pub mod tutor_engine;

// Convenience re-exports so callers can use `long_arith_tutor::generate_problem`
// directly without reaching into `tutor_engine::`.
pub use tutor_engine::{
    answer, check_answer, check_step, custom_problem, division_answer, generate,
    generate_division, generate_multiplication, generate_problem, long_division,
    long_multiplication, multiplication_answer, parse_entry, steps, validate, Attempt,
    ConfigError, Difficulty, DivisionStep, DivisionWork, FileStore, GenerationRequest, Ledger,
    LedgerStore, MemoryStore, MultiplicationWork, Operands, PartialProduct, Problem,
    ProblemError, ProblemId, ProblemKind, ProblemsByType, ProgressLedger, RandomSource,
    ScriptedSource, StepCheck, StepField, StepRef, StepwiseSession, StoreError, Streak,
    Submission, TutorConfig, TypeStats, TypeTally, ValidationMode, Worksheet,
    DEFAULT_LEDGER_KEY,
};
