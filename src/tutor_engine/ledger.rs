//! The persisted progress ledger.
//!
//! [`Ledger`] is a plain value with a pure update rule
//! ([`Ledger::recorded`]). [`ProgressLedger`] owns the single in-process copy,
//! loads it lazily from a [`LedgerStore`], and persists every update before
//! the in-memory copy is replaced.
//!
//! Every submitted attempt must be recorded, correct or not. Recording only
//! correct attempts would leave `total_problems` equal to `correct_problems`
//! and the streak could never reset.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tutor_engine::{
    helpers::percent,
    models::{Problem, ProblemId, ProblemKind},
    store::LedgerStore,
    validator::{answer, parse_entry},
};

pub const DEFAULT_LEDGER_KEY: &str = "mathTutorProgress";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTally {
    pub total: u32,
    pub correct: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemsByType {
    pub division: TypeTally,
    pub multiplication: TypeTally,
}

impl ProblemsByType {
    pub fn get(&self, kind: ProblemKind) -> TypeTally {
        match kind {
            ProblemKind::Division       => self.division,
            ProblemKind::Multiplication => self.multiplication,
        }
    }

    fn get_mut(&mut self, kind: ProblemKind) -> &mut TypeTally {
        match kind {
            ProblemKind::Division       => &mut self.division,
            ProblemKind::Multiplication => &mut self.multiplication,
        }
    }
}

/// Aggregate performance record. The serialized form uses the camelCase
/// field names of the stored blob (`totalProblems`, `problemsByType`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub total_problems: u32,
    pub correct_problems: u32,
    /// 0..=100, derived from the two counters above.
    pub accuracy_rate: u32,
    /// Seconds.
    pub time_spent: u64,
    pub problems_by_type: ProblemsByType,
    pub current_streak: u32,
    pub max_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStats {
    pub total: u32,
    pub correct: u32,
    /// `round(100 × correct / total)`, 0 when nothing was attempted.
    pub rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub max: u32,
}

impl Ledger {
    /// Apply one attempt. Pure; the receiver is left untouched.
    pub fn recorded(&self, kind: ProblemKind, is_correct: bool, time_spent_secs: u64) -> Ledger {
        let mut next = *self;
        next.total_problems = next.total_problems.saturating_add(1);
        next.time_spent = next.time_spent.saturating_add(time_spent_secs);

        let tally = next.problems_by_type.get_mut(kind);
        tally.total = tally.total.saturating_add(1);

        if is_correct {
            next.correct_problems = next.correct_problems.saturating_add(1);
            tally.correct = tally.correct.saturating_add(1);
            next.current_streak = next.current_streak.saturating_add(1);
            next.max_streak = next.max_streak.max(next.current_streak);
        } else {
            next.current_streak = 0;
        }

        next.accuracy_rate = percent(next.correct_problems, next.total_problems);
        next
    }

    pub fn stats(&self, kind: ProblemKind) -> TypeStats {
        let tally = self.problems_by_type.get(kind);
        TypeStats {
            total: tally.total,
            correct: tally.correct,
            rate: percent(tally.correct, tally.total),
        }
    }

    pub fn streak(&self) -> Streak {
        Streak { current: self.current_streak, max: self.max_streak }
    }

    /// Bring derived fields back in line with the counters.
    ///
    /// `accuracy_rate` is recomputed, `max_streak` is raised to at least
    /// `current_streak`, and both streaks are capped at `correct_problems`.
    /// Returns `None` when the counters themselves contradict each other
    /// (more correct than attempted, or per-kind tallies that do not sum to
    /// the totals); such a ledger cannot be repaired.
    pub fn repaired(&self) -> Option<Ledger> {
        let by_type = self.problems_by_type;
        let tallies_ok = [by_type.division, by_type.multiplication]
            .iter()
            .all(|t| t.correct <= t.total);
        let sums_ok = u64::from(by_type.division.total) + u64::from(by_type.multiplication.total)
            == u64::from(self.total_problems)
            && u64::from(by_type.division.correct) + u64::from(by_type.multiplication.correct)
                == u64::from(self.correct_problems);

        if !tallies_ok || !sums_ok || self.correct_problems > self.total_problems {
            return None;
        }

        let mut fixed = *self;
        fixed.current_streak = fixed.current_streak.min(fixed.correct_problems);
        fixed.max_streak = fixed.max_streak.max(fixed.current_streak).min(fixed.correct_problems);
        fixed.accuracy_rate = percent(fixed.correct_problems, fixed.total_problems);
        Some(fixed)
    }

    /// Whether the counters and the derived fields all agree.
    pub fn is_consistent(&self) -> bool {
        self.repaired() == Some(*self)
    }
}

/// A finished attempt as the front-end reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub problem_id: ProblemId,
    pub kind: ProblemKind,
    /// The learner's final answer, if one parsed.
    pub final_answer: Option<u64>,
    pub is_correct: bool,
    pub time_spent_secs: u64,
}

impl Attempt {
    pub fn for_problem(
        problem: &Problem,
        final_answer: Option<u64>,
        is_correct: bool,
        time_spent_secs: u64,
    ) -> Self {
        Attempt {
            problem_id: problem.id().clone(),
            kind: problem.kind(),
            final_answer,
            is_correct,
            time_spent_secs,
        }
    }

    /// Grade raw learner input against the problem's ground truth.
    /// Input that does not parse is recorded as an incorrect attempt with
    /// no final answer.
    pub fn graded(problem: &Problem, raw_answer: &str, time_spent_secs: u64) -> Self {
        let final_answer = parse_entry(raw_answer);
        let is_correct = final_answer == Some(answer(problem));
        Attempt::for_problem(problem, final_answer, is_correct, time_spent_secs)
    }
}

// ---------------------------------------------------------------------------
// ProgressLedger
// ---------------------------------------------------------------------------

fn read_ledger<S: LedgerStore>(store: &S, key: &str) -> Ledger {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ledger::default(),
        Err(e) => {
            warn!(key, error = %e, "ledger unreadable, starting from zero");
            return Ledger::default();
        }
    };

    match serde_json::from_str::<Ledger>(&raw) {
        Ok(stored) => match stored.repaired() {
            Some(ledger) => {
                if ledger != stored {
                    debug!(
                        key,
                        stored_rate = stored.accuracy_rate,
                        rate = ledger.accuracy_rate,
                        "repaired derived fields of stored ledger"
                    );
                }
                ledger
            }
            None => {
                warn!(key, "stored ledger counters contradict each other, starting from zero");
                Ledger::default()
            }
        },
        Err(e) => {
            warn!(key, error = %e, "stored ledger is malformed, starting from zero");
            Ledger::default()
        }
    }
}

/// The single ledger slot for this process, backed by a [`LedgerStore`].
pub struct ProgressLedger<S> {
    store: S,
    key: String,
    slot: Option<Ledger>,
}

impl<S: LedgerStore> ProgressLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_LEDGER_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        ProgressLedger { store, key: key.into(), slot: None }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn current(&mut self) -> Ledger {
        let (store, key) = (&self.store, &self.key);
        *self.slot.get_or_insert_with(|| read_ledger(store, key))
    }

    /// Persist `next`, then adopt it. When the write fails the update is
    /// dropped and the previous ledger stays current.
    fn commit(&mut self, next: Ledger) -> Ledger {
        let persisted = serde_json::to_string(&next)
            .map_err(|e| e.to_string())
            .and_then(|blob| self.store.write(&self.key, &blob).map_err(|e| e.to_string()));

        match persisted {
            Ok(()) => {
                self.slot = Some(next);
                next
            }
            Err(error) => {
                warn!(key = %self.key, %error, "failed to persist ledger, update dropped");
                self.current()
            }
        }
    }

    /// The current ledger; all zeros when nothing usable is stored.
    pub fn load(&mut self) -> Ledger {
        self.current()
    }

    pub fn record_attempt(
        &mut self,
        kind: ProblemKind,
        is_correct: bool,
        time_spent_secs: u64,
    ) -> Ledger {
        let next = self.current().recorded(kind, is_correct, time_spent_secs);
        debug!(
            %kind,
            is_correct,
            total = next.total_problems,
            streak = next.current_streak,
            "recording attempt"
        );
        self.commit(next)
    }

    pub fn record(&mut self, attempt: &Attempt) -> Ledger {
        debug!(
            problem_id = %attempt.problem_id,
            final_answer = ?attempt.final_answer,
            "attempt submitted"
        );
        self.record_attempt(attempt.kind, attempt.is_correct, attempt.time_spent_secs)
    }

    pub fn stats(&mut self, kind: ProblemKind) -> TypeStats {
        self.current().stats(kind)
    }

    pub fn streak(&mut self) -> Streak {
        self.current().streak()
    }

    pub fn accuracy_rate(&mut self) -> u32 {
        self.current().accuracy_rate
    }

    /// Persist the all-zero ledger.
    pub fn reset(&mut self) -> Ledger {
        self.commit(Ledger::default())
    }
}
