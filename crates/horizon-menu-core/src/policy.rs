//! Record-count enablement policy.
//!
//! A menu item declares how many records must be *active* (selected and/or
//! clicked upon) for it to be actionable. Definitions spell this as a single
//! field holding either a boolean or an integer; in code it is the closed
//! [`RecordsRequired`] enum, normalized once from the raw
//! [`RecordsRequiredValue`] and never re-interpreted.
//!
//! | Declared value | Policy | Eligible iff |
//! |---|---|---|
//! | `false` | [`RecordsRequired::Any`] | always |
//! | `true` | [`RecordsRequired::AtLeastOne`] | `count > 0` |
//! | `n >= 0` | [`RecordsRequired::Exactly`] | `count == n` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::logging::targets;

/// How many active records an item needs in order to be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordsRequiredValue", into = "RecordsRequiredValue")]
pub enum RecordsRequired {
    /// Any number of records, zero included. Always eligible.
    Any,
    /// At least one record.
    AtLeastOne,
    /// Exactly `n` records. `Exactly(0)` is eligible only when nothing is active.
    Exactly(usize),
}

impl Default for RecordsRequired {
    /// Most record actions operate on a single record.
    fn default() -> Self {
        Self::Exactly(1)
    }
}

impl RecordsRequired {
    /// Map the boolean form: `false` is [`Any`](Self::Any), `true` is
    /// [`AtLeastOne`](Self::AtLeastOne).
    pub fn from_flag(required: bool) -> Self {
        if required { Self::AtLeastOne } else { Self::Any }
    }

    /// Check whether `count` active records satisfy this policy.
    pub fn is_met_by(self, count: usize) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeastOne => count > 0,
            Self::Exactly(n) => count == n,
        }
    }
}

impl From<bool> for RecordsRequired {
    fn from(required: bool) -> Self {
        Self::from_flag(required)
    }
}

impl From<usize> for RecordsRequired {
    fn from(n: usize) -> Self {
        Self::Exactly(n)
    }
}

impl TryFrom<i64> for RecordsRequired {
    type Error = ConfigurationError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n).map(Self::Exactly).map_err(|_| {
            ConfigurationError::new(
                "records_required",
                format!("expected false, true or a non-negative integer, got {n}"),
            )
        })
    }
}

impl fmt::Display for RecordsRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::AtLeastOne => write!(f, "at least one"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}

/// The raw, un-normalized form of a record requirement as it appears in
/// configuration.
///
/// Accepts anything a loosely-typed definition might contain so that bad
/// values surface as a [`ConfigurationError`] rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordsRequiredValue {
    /// `false` or `true`.
    Bool(bool),
    /// An integer count.
    Integer(i64),
    /// A number with a fractional representation.
    Float(f64),
    /// A string. Never valid.
    Text(String),
}

impl TryFrom<RecordsRequiredValue> for RecordsRequired {
    type Error = ConfigurationError;

    fn try_from(value: RecordsRequiredValue) -> Result<Self, Self::Error> {
        let policy = match value {
            RecordsRequiredValue::Bool(required) => Ok(Self::from_flag(required)),
            RecordsRequiredValue::Integer(n) => Self::try_from(n),
            RecordsRequiredValue::Float(f)
                if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 =>
            {
                Ok(Self::Exactly(f as usize))
            }
            RecordsRequiredValue::Float(f) => Err(ConfigurationError::new(
                "records_required",
                format!("expected false, true or a non-negative integer, got {f}"),
            )),
            RecordsRequiredValue::Text(text) => Err(ConfigurationError::new(
                "records_required",
                format!("expected false, true or a non-negative integer, got \"{text}\""),
            )),
        };

        if let Err(err) = &policy {
            tracing::debug!(target: targets::POLICY, "rejected record requirement: {}", err);
        }
        policy
    }
}

impl From<RecordsRequired> for RecordsRequiredValue {
    fn from(policy: RecordsRequired) -> Self {
        match policy {
            RecordsRequired::Any => Self::Bool(false),
            RecordsRequired::AtLeastOne => Self::Bool(true),
            RecordsRequired::Exactly(n) => Self::Integer(i64::try_from(n).unwrap_or(i64::MAX)),
        }
    }
}

impl From<bool> for RecordsRequiredValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RecordsRequiredValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RecordsRequiredValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
