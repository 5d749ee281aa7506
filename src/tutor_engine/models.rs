use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tutor_engine::error::{ConfigError, ProblemError};

// ---------------------------------------------------------------------------
// Problem metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Division,
    Multiplication,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 2] = [ProblemKind::Division, ProblemKind::Multiplication];

    /// Short prefix used in problem ids ("DIV", "MUL").
    pub fn id_prefix(self) -> &'static str {
        match self {
            ProblemKind::Division       => "DIV",
            ProblemKind::Multiplication => "MUL",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Division       => write!(f, "Division"),
            ProblemKind::Multiplication => write!(f, "Multiplication"),
        }
    }
}

impl FromStr for ProblemKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "division"       => Ok(ProblemKind::Division),
            "multiplication" => Ok(ProblemKind::Multiplication),
            _ => Err(ConfigError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// Opaque problem token, e.g. `"DIV-000003-9F1C22A0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(String);

impl ProblemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProblemId {
    fn from(s: String) -> Self {
        ProblemId(s)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Operands {
    Division { dividend: u32, divisor: u32 },
    Multiplication { multiplicand: u32, multiplier: u32 },
}

impl Operands {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Operands::Division { .. }       => ProblemKind::Division,
            Operands::Multiplication { .. } => ProblemKind::Multiplication,
        }
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operands::Division { dividend, divisor } => write!(f, "{dividend} ÷ {divisor}"),
            Operands::Multiplication { multiplicand, multiplier } => {
                write!(f, "{multiplicand} × {multiplier}")
            }
        }
    }
}

/// One practice problem. Immutable once built; the constructors enforce
/// positive operands and a divisor of at least 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    id: ProblemId,
    operands: Operands,
    difficulty: Difficulty,
}

impl Problem {
    pub fn division(
        id: ProblemId,
        dividend: u32,
        divisor: u32,
        difficulty: Difficulty,
    ) -> Result<Self, ProblemError> {
        if dividend == 0 {
            return Err(ProblemError::ZeroOperand { name: "dividend" });
        }
        if divisor < 2 {
            return Err(ProblemError::DivisorTooSmall(divisor));
        }
        Ok(Problem { id, operands: Operands::Division { dividend, divisor }, difficulty })
    }

    pub fn multiplication(
        id: ProblemId,
        multiplicand: u32,
        multiplier: u32,
        difficulty: Difficulty,
    ) -> Result<Self, ProblemError> {
        if multiplicand == 0 {
            return Err(ProblemError::ZeroOperand { name: "multiplicand" });
        }
        if multiplier == 0 {
            return Err(ProblemError::ZeroOperand { name: "multiplier" });
        }
        Ok(Problem {
            id,
            operands: Operands::Multiplication { multiplicand, multiplier },
            difficulty,
        })
    }

    /// Every band in the generator lies inside the constructor rules, so
    /// generated operands skip re-validation.
    pub(crate) fn from_parts(id: ProblemId, operands: Operands, difficulty: Difficulty) -> Self {
        Problem { id, operands, difficulty }
    }

    pub fn id(&self) -> &ProblemId {
        &self.id
    }

    pub fn kind(&self) -> ProblemKind {
        self.operands.kind()
    }

    pub fn operands(&self) -> Operands {
        self.operands
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.operands, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ProblemId {
        ProblemId::from("TEST-1".to_string())
    }

    #[test]
    fn difficulty_tags_parse_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn unknown_difficulty_tag_is_a_config_error() {
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDifficulty(ref t) if t == "expert"));
    }

    #[test]
    fn unknown_kind_tag_is_a_config_error() {
        let err = "addition".parse::<ProblemKind>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKind(_)));
    }

    #[test]
    fn division_rejects_small_divisor_and_zero_dividend() {
        assert_eq!(
            Problem::division(id(), 84, 1, Difficulty::Easy).unwrap_err(),
            ProblemError::DivisorTooSmall(1)
        );
        assert_eq!(
            Problem::division(id(), 84, 0, Difficulty::Easy).unwrap_err(),
            ProblemError::DivisorTooSmall(0)
        );
        assert_eq!(
            Problem::division(id(), 0, 3, Difficulty::Easy).unwrap_err(),
            ProblemError::ZeroOperand { name: "dividend" }
        );
    }

    #[test]
    fn multiplication_rejects_zero_operands() {
        assert!(Problem::multiplication(id(), 0, 3, Difficulty::Easy).is_err());
        assert!(Problem::multiplication(id(), 23, 0, Difficulty::Easy).is_err());
    }

    #[test]
    fn problem_kind_follows_operands() {
        let p = Problem::multiplication(id(), 23, 12, Difficulty::Medium).unwrap();
        assert_eq!(p.kind(), ProblemKind::Multiplication);
        assert_eq!(p.to_string(), "23 × 12 [Medium]");
    }
}
