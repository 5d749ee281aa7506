//! Core tutor engine: problem generation, step decomposition, answer
//! checking, and the progress ledger.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Problem, kind, difficulty and operand types |
//! | `random`         | `RandomSource` capability + `ScriptedSource` for fixed sequences |
//! | `generator`      | Difficulty-banded problem generation |
//! | `division`       | Long division, one step per dividend digit |
//! | `multiplication` | Partial products, one per multiplier digit |
//! | `worksheet`      | `steps(problem)`: either decomposition behind one type |
//! | `validator`      | Ground-truth answers, whole-answer and stepwise checks |
//! | `ledger`         | Aggregate progress record and its persisted slot |
//! | `store`          | Key-value persistence backends for the ledger |
//! | `config`         | `TutorConfig` (JSON) |
//! | `helpers`        | Digit and percentage arithmetic |
//! | `error`          | Error enums |

pub mod config;
pub mod division;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod ledger;
pub mod models;
pub mod multiplication;
pub mod random;
pub mod store;
pub mod validator;
pub mod worksheet;

// Re-export the public API surface so callers can use
// `tutor_engine::generate_problem` without reaching into sub-modules.
pub use config::TutorConfig;
pub use division::{long_division, DivisionStep, DivisionWork};
pub use error::{ConfigError, ProblemError, StoreError};
pub use generator::{
    custom_problem, generate, generate_division, generate_multiplication, generate_problem,
    GenerationRequest,
};
pub use ledger::{
    Attempt, Ledger, ProblemsByType, ProgressLedger, Streak, TypeStats, TypeTally,
    DEFAULT_LEDGER_KEY,
};
pub use models::{Difficulty, Operands, Problem, ProblemId, ProblemKind};
pub use multiplication::{long_multiplication, MultiplicationWork, PartialProduct};
pub use random::{RandomSource, ScriptedSource};
pub use store::{FileStore, LedgerStore, MemoryStore};
pub use validator::{
    answer, check_answer, check_step, division_answer, multiplication_answer, parse_entry,
    validate, StepCheck, StepField, StepwiseSession, Submission, ValidationMode,
};
pub use worksheet::{steps, StepRef, Worksheet};
