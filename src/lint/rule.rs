//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule (`FML001`)
//! - [`Severity`] - Severity level of a failing rule (Info, Warning, Error)
//! - [`Outcome`] - Result of evaluating one rule against one file

use std::cmp::Ordering;

use serde::Serialize;

use super::context::LintContext;
use super::fix::FixerBinding;

/// Unique identifier for a lint rule.
///
/// Ids are ordered by their numeric suffix, so `FML002 < FML010 < FML100`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The numeric part of the id, if it has one.
    pub fn number(&self) -> Option<u32> {
        self.0
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .ok()
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for RuleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number()
            .cmp(&other.number())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RuleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RuleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().to_ascii_uppercase()))
    }
}

/// Severity level for a failing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Metadata is missing or stale; fixed automatically.
    Info,
    /// Structure is incomplete but usable.
    Warning,
    /// Structure is broken; needs a human.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Result of evaluating a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document satisfies the rule.
    Pass,
    /// The document violates the rule.
    Fail,
    /// The rule cannot be evaluated for this document, e.g. counting
    /// front matter fields when there is no front matter block.
    Undetermined,
}

impl Outcome {
    /// Build an outcome from a boolean check.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    /// Whether this is a failure.
    pub fn is_fail(self) -> bool {
        self == Outcome::Fail
    }
}

/// A lint rule that checks one property of a front matter document.
///
/// Rules are pure: they look at the [`LintContext`] and never touch the
/// filesystem themselves.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Kebab-case name of the rule.
    fn name(&self) -> &str;

    /// Message shown when the rule fails.
    fn description(&self) -> &str;

    /// Severity of a failure.
    fn severity(&self) -> Severity;

    /// Evaluate the rule.
    fn check(&self, ctx: &LintContext<'_>) -> Outcome;

    /// How a failure of this rule is repaired.
    fn fixer(&self) -> FixerBinding {
        FixerBinding::NoFixer
    }
}
