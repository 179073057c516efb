//! Provenance rules for the `created` field.
//!
//! `created` should hold the earliest known creation instant, so a stored
//! value at or before the file's birthtime is correct and anything later is
//! stale.

use chrono::{DateTime, Utc};

use super::stored_timestamp;
use crate::lint::{Fixer, FixerBinding, LintContext, LintRule, Outcome, RuleId, Severity};

/// Front matter key holding the creation timestamp.
pub const CREATED_FIELD: &str = "created";

/// Whether a stored `created` value agrees with the file's birthtime.
pub fn created_is_consistent(stored: DateTime<Utc>, birthtime: DateTime<Utc>) -> bool {
    stored <= birthtime
}

/// Fails when there is no `created` field.
pub struct HasCreatedMatterRule;

impl LintRule for HasCreatedMatterRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML100")
    }

    fn name(&self) -> &str {
        "has-created-matter"
    }

    fn description(&self) -> &str {
        "There is no 'created'/'birthtime' datetimestamp, can't track its creation"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(ctx.document.field(CREATED_FIELD).is_some())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateCreatedMatter)
    }
}

/// Fails when `created` is missing or not a timestamp.
pub struct HasValidCreatedMatterDateRule;

impl LintRule for HasValidCreatedMatterDateRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML110")
    }

    fn name(&self) -> &str {
        "has-valid-created-matter-date"
    }

    fn description(&self) -> &str {
        "The 'created' matter field doesn't have a valid Date value, can't track time"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(stored_timestamp(ctx.document, CREATED_FIELD).is_some())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateCreatedMatter)
    }
}

/// Fails when `created` is later than the file's birthtime.
pub struct CreatedMatterOlderThanBirthtimeRule;

impl LintRule for CreatedMatterOlderThanBirthtimeRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML120")
    }

    fn name(&self) -> &str {
        "created-matter-older-than-birthtime"
    }

    fn description(&self) -> &str {
        "The 'created' matter is newer than stat.birthtime, the oldest date should be in matter to track correct birthtime"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        let Some(stat) = ctx.stat else {
            return Outcome::Undetermined;
        };
        match stored_timestamp(ctx.document, CREATED_FIELD) {
            Some(stored) => Outcome::from_bool(created_is_consistent(stored, stat.created)),
            None => Outcome::Fail,
        }
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateCreatedMatter)
    }
}
