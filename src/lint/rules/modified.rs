//! Freshness rules for the `modified` field.
//!
//! `modified` should hold the latest known edit instant. A stored value older
//! than the file's mtime means the file was edited outside the tool.

use chrono::{DateTime, Utc};

use super::stored_timestamp;
use crate::lint::{Fixer, FixerBinding, LintContext, LintRule, Outcome, RuleId, Severity};

/// Front matter key holding the modification timestamp.
pub const MODIFIED_FIELD: &str = "modified";

/// Whether a stored `modified` value agrees with the file's mtime.
pub fn modified_is_consistent(stored: DateTime<Utc>, mtime: DateTime<Utc>) -> bool {
    stored >= mtime
}

/// Fails when there is no `modified` field.
pub struct HasModifiedMatterRule;

impl LintRule for HasModifiedMatterRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML101")
    }

    fn name(&self) -> &str {
        "has-modified-matter"
    }

    fn description(&self) -> &str {
        "There is no 'updated'/'modified'/'mtime' datetimestamp, can't track changes of file"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(ctx.document.field(MODIFIED_FIELD).is_some())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateModifiedMatter)
    }
}

/// Fails when `modified` is missing or not a timestamp.
pub struct HasValidModifiedMatterDateRule;

impl LintRule for HasValidModifiedMatterDateRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML111")
    }

    fn name(&self) -> &str {
        "has-valid-modified-matter-date"
    }

    fn description(&self) -> &str {
        "The 'modified' matter field doesn't have a valid Date value, can't track time"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(stored_timestamp(ctx.document, MODIFIED_FIELD).is_some())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateModifiedMatter)
    }
}

/// Fails when `modified` is earlier than the file's mtime.
pub struct ModifiedMatterNewerThanMtimeRule;

impl LintRule for ModifiedMatterNewerThanMtimeRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML121")
    }

    fn name(&self) -> &str {
        "modified-matter-newer-than-mtime"
    }

    fn description(&self) -> &str {
        "The 'modified' matter is older than stat.mtime, the newest date should be in matter to track modifications to file"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        let Some(stat) = ctx.stat else {
            return Outcome::Undetermined;
        };
        match stored_timestamp(ctx.document, MODIFIED_FIELD) {
            Some(stored) => Outcome::from_bool(modified_is_consistent(stored, stat.modified)),
            None => Outcome::Fail,
        }
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::UpdateModifiedMatter)
    }
}
