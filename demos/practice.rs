//! End-to-end practice run.
//!
//! Run with: `cargo run --example practice`
//! (`RUST_LOG=debug` shows generation and ledger events.)
//!
//! This example shows how `long_arith_tutor` fits together:
//!
//! 1. **Worked problems** - one division and one multiplication per
//!    difficulty, generated from fixed seeds, printed row by row.
//! 2. **Stepwise session** - a division worked through row by row, with one
//!    deliberate mistake so the session refuses to advance.
//! 3. **Ledger** - every attempt, right or wrong, lands in a file-backed
//!    ledger under a temp directory; the stats are printed at the end.

use long_arith_tutor::{
    generate, steps, Attempt, Difficulty, GenerationRequest, Problem, ProblemKind, StepRef,
    StepwiseSession, Submission, TutorConfig, Worksheet,
};
use tracing_subscriber::EnvFilter;

fn print_worksheet(problem: &Problem) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {}  ID: {}", problem.kind(), problem, problem.id());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match steps(problem) {
        Worksheet::Division(work) => {
            for s in &work.steps {
                println!(
                    "  Step {}: bring down {} → {:>4}  {} × {} = {:>4}  remainder {}",
                    s.step_number, s.brought_down_digit, s.current_number,
                    s.quotient_digit, work.divisor, s.product, s.remainder
                );
            }
            println!("  Quotient {} remainder {}", work.quotient, work.remainder);
        }
        Worksheet::Multiplication(work) => {
            for p in &work.partials {
                println!(
                    "  {} × {} = {:>6}  (shift {}) → {:>7}",
                    work.multiplicand, p.digit, p.value, p.position, p.shifted()
                );
            }
            println!("  Product {}", work.product);
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("long_arith_tutor_demo");
    let config = TutorConfig { ledger_dir: dir, ..TutorConfig::default() };
    let mut ledger = config.file_ledger();
    ledger.reset();

    // ── 1. worked problems ───────────────────────────────────────────────
    for (seed, difficulty) in [(1u64, Difficulty::Easy), (2, Difficulty::Medium), (3, Difficulty::Hard)] {
        for kind in ProblemKind::ALL {
            let problem = generate(&GenerationRequest::new(kind, difficulty).with_seed(seed));
            print_worksheet(&problem);

            let guess = steps(&problem).final_answer().to_string();
            ledger.record(&Attempt::graded(&problem, &guess, 40));
        }
    }

    // ── 2. stepwise session ─────────────────────────────────────────────
    let problem = generate(
        &GenerationRequest::new(ProblemKind::Division, Difficulty::Medium).with_seed(99),
    );
    println!("Stepwise: {problem}");
    let mut session = StepwiseSession::new(problem.clone());
    let mut fumbled = false;
    while let Some(StepRef::Division(expected)) = session.current_step() {
        let expected = *expected;
        if !fumbled {
            fumbled = true;
            let check = session.submit(&Submission::division_step(
                (expected.quotient_digit + 1).to_string(),
                expected.product.to_string(),
                expected.remainder.to_string(),
            ));
            println!("  step {} wrong entry → {:?}", session.position() + 1, check);
            continue;
        }
        let check = session.submit(&Submission::division_step(
            expected.quotient_digit.to_string(),
            expected.product.to_string(),
            expected.remainder.to_string(),
        ));
        println!("  step {} → {:?}", expected.step_number, check);
    }
    let finished = session.is_complete() && session.misses() == 0;
    ledger.record_attempt(problem.kind(), finished, 95);

    // ── 3. ledger ───────────────────────────────────────────────────────
    let progress = ledger.load();
    println!();
    println!("Ledger ({} problems, {}% accurate, {}s)", progress.total_problems,
        progress.accuracy_rate, progress.time_spent);
    for kind in ProblemKind::ALL {
        let s = ledger.stats(kind);
        println!("  {:<15} {}/{} ({}%)", kind.to_string(), s.correct, s.total, s.rate);
    }
    let streak = ledger.streak();
    println!("  streak {} (best {})", streak.current, streak.max);
}
