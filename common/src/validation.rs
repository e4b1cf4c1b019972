//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Column constraints and validation errors
//!
//! Every mutable column carries exactly one [`Constraint`]. Checking happens
//! before any statement is issued, so a [`ValidationError`] always means the
//! database was not touched.

use crate::jobs::JobTable;
use crate::value::Value;
use thiserror::Error;

/// Largest value of a signed 32-bit column.
pub const INT_MAX: i64 = i32::MAX as i64;
/// Bounds of a signed 16-bit column.
pub const SHORT_MIN: i64 = i16::MIN as i64;
pub const SHORT_MAX: i64 = i16::MAX as i64;

/// Rule a column value must satisfy before it may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Primary and foreign keys; never written.
    ReadOnly,
    /// Inclusive integer range.
    Range { min: i64, max: i64 },
    /// Inclusive length range in characters.
    Length { min: usize, max: usize },
    /// Text must be one of the listed literals.
    OneOf(&'static [&'static str]),
    /// Integer must be a key of the job table.
    KnownJob,
    /// Value is already held by another row.
    Unique,
}

impl Constraint {
    pub const fn range(min: i64, max: i64) -> Self {
        Constraint::Range { min, max }
    }

    pub const fn length(min: usize, max: usize) -> Self {
        Constraint::Length { min, max }
    }

    /// Check `value` and return it in canonical form (numeric text becomes an integer).
    pub fn check(
        &self,
        attribute: &'static str,
        value: Value,
        jobs: &JobTable,
    ) -> Result<Value, ValidationError> {
        let reject = |value: Value| ValidationError {
            attribute,
            constraint: *self,
            value,
        };
        match self {
            Constraint::ReadOnly => Err(reject(value)),
            Constraint::Range { min, max } => match value.as_i64() {
                Some(number) if (*min..=*max).contains(&number) => Ok(Value::Int(number)),
                _ => Err(reject(value)),
            },
            Constraint::Length { min, max } => {
                let fits = value
                    .as_str()
                    .is_some_and(|text| (*min..=*max).contains(&text.chars().count()));
                if fits { Ok(value) } else { Err(reject(value)) }
            }
            Constraint::OneOf(allowed) => {
                let listed = value
                    .as_str()
                    .is_some_and(|text| allowed.iter().any(|candidate| *candidate == text));
                if listed { Ok(value) } else { Err(reject(value)) }
            }
            Constraint::KnownJob => match value.as_i64() {
                Some(job) if jobs.contains(job) => Ok(Value::Int(job)),
                _ => Err(reject(value)),
            },
            Constraint::Unique => Ok(value),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::ReadOnly => write!(f, "attribute is read-only"),
            Constraint::Range { min, max } => write!(f, "must be between {} and {}", min, max),
            Constraint::Length { min, max } => {
                write!(f, "must be {} to {} characters long", min, max)
            }
            Constraint::OneOf(allowed) => write!(f, "must be one of {}", allowed.join(", ")),
            Constraint::KnownJob => write!(f, "must be a known job id"),
            Constraint::Unique => write!(f, "is already taken"),
        }
    }
}

/// A value was rejected before any write was attempted.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid value `{value}` for {attribute}: {constraint}")]
pub struct ValidationError {
    pub attribute: &'static str,
    pub constraint: Constraint,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn jobs() -> JobTable {
        JobTable::from_yaml_str("'0': Beginner\n'100': Warrior\n").unwrap()
    }

    #[test]
    fn test_full_range_rejects_oversized_float() {
        let exp = Constraint::range(i64::MIN, i64::MAX);
        let error = exp.check("exp", Value::Float(1e20), &jobs()).unwrap_err();
        assert_eq!(error.value, Value::Float(1e20));
        assert_eq!(exp.check("exp", Value::Float(2e9), &jobs()), Ok(Value::Int(2_000_000_000)));
    }

    #[test]
    fn test_range_canonicalises_numeric_text() {
        let level = Constraint::range(1, 275);
        assert_eq!(level.check("level", Value::from("10"), &jobs()), Ok(Value::Int(10)));
    }

    #[test]
    fn test_range_rejects_out_of_bounds() {
        let level = Constraint::range(1, 275);
        let error = level.check("level", Value::Int(276), &jobs()).unwrap_err();
        assert_eq!(error.attribute, "level");
        assert_eq!(error.constraint, level);
        assert_eq!(error.value, Value::Int(276));
        assert_eq!(
            error.to_string(),
            "Invalid value `276` for level: must be between 1 and 275"
        );
        assert!(level.check("level", Value::Int(0), &jobs()).is_err());
        assert!(level.check("level", Value::from("ten"), &jobs()).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let name = Constraint::length(1, 13);
        assert!(name.check("name", Value::from("tester0x00"), &jobs()).is_ok());
        assert!(name.check("name", Value::from("fourteen_chars"), &jobs()).is_err());
        assert!(name.check("name", Value::from(""), &jobs()).is_err());
        assert!(name.check("name", Value::Int(5), &jobs()).is_err());
    }

    #[test]
    fn test_one_of() {
        let mute = Constraint::OneOf(&["true", "false"]);
        assert!(mute.check("mute", Value::from("true"), &jobs()).is_ok());
        assert!(mute.check("mute", Value::from("TRUE"), &jobs()).is_err());
    }

    #[test]
    fn test_known_job() {
        assert_eq!(
            Constraint::KnownJob.check("job", Value::Int(100), &jobs()),
            Ok(Value::Int(100))
        );
        assert!(Constraint::KnownJob.check("job", Value::Int(101), &jobs()).is_err());
    }

    #[test]
    fn test_read_only_always_rejects() {
        assert!(Constraint::ReadOnly.check("character_id", Value::Int(1), &jobs()).is_err());
    }

    proptest! {
        #[test]
        fn prop_range_accepts_exactly_its_bounds(min in -1000i64..1000, span in 0i64..1000, value in -3000i64..3000) {
            let constraint = Constraint::range(min, min + span);
            let accepted = constraint.check("stat", Value::Int(value), &jobs()).is_ok();
            prop_assert_eq!(accepted, value >= min && value <= min + span);
        }
    }
}
