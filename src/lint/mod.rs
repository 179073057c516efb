//! Front matter linting.
//!
//! This module checks and repairs the `created` / `modified` front matter
//! of text files through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Fixers** - Idempotent corrections bound to rules ([`Fixer`])
//! - **Formatters** - Human and JSON reports ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use fmlint::lint::{RuleId, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::builtin();
//!
//! let rule = registry.get(&RuleId::new("FML001")).unwrap();
//! assert_eq!(rule.name(), "has-matter-markers");
//!
//! // Rule lists are always applied in ascending id order
//! let sorted = registry
//!     .sort(&[RuleId::new("FML120"), RuleId::new("FML001")])
//!     .unwrap();
//! assert_eq!(sorted, [RuleId::new("FML001"), RuleId::new("FML120")]);
//!
//! // Severity has ordering
//! assert!(Severity::Info < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod context;
pub mod fix;
pub mod output;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;

pub use context::{FileStat, LintContext};
pub use fix::{plan_fixers, Fixer, FixerBinding, FixResult};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::{RuleRegistry, RuleSet};
pub use result::LintResult;
pub use rule::{LintRule, Outcome, RuleId, Severity};
pub use rules::{
    CreatedMatterOlderThanBirthtimeRule, HasCreatedMatterRule, HasMatterMarkersRule,
    HasModifiedMatterRule, HasValidCreatedMatterDateRule, HasValidModifiedMatterDateRule,
    HasValidYamlRule, MatterDelimitersMatchRule, ModifiedMatterNewerThanMtimeRule,
    NonEmptyMatterRule,
};

/// Evaluate `rules` against one context.
///
/// Failed and undetermined ids are returned in the order of `rules`, which
/// is canonical for any [`RuleSet`].
pub fn evaluate(rules: &RuleSet<'_>, ctx: &LintContext<'_>) -> LintResult {
    let mut result = LintResult::new(ctx.path);
    for rule in rules.iter() {
        let outcome = rule.check(ctx);
        tracing::debug!("{} {}: {:?}", ctx.path.display(), rule.id(), outcome);
        match outcome {
            Outcome::Pass => {}
            Outcome::Fail => result.failed.push(rule.id()),
            Outcome::Undetermined => result.undetermined.push(rule.id()),
        }
    }
    result
}
