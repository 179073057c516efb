//! Structural rules.
//!
//! These rules look at the shape of the front matter block rather than its
//! fields: are the `---` delimiters there, is the block empty, does the YAML
//! parse.

use crate::lint::{Fixer, FixerBinding, LintContext, LintRule, Outcome, RuleId, Severity};

/// Fails when the first line opens a block that is never closed.
///
/// A `---` line further down a file without an opening delimiter is body
/// text and does not count.
pub struct MatterDelimitersMatchRule;

impl LintRule for MatterDelimitersMatchRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML000")
    }

    fn name(&self) -> &str {
        "matter-delimiters-match"
    }

    fn description(&self) -> &str {
        "Frontmatter block is never closed, it must be closed or removed by hand"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(!ctx.document.unclosed_matter())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::Unfixable
    }
}

/// Fails unless both delimiters are present.
pub struct HasMatterMarkersRule;

impl LintRule for HasMatterMarkersRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML001")
    }

    fn name(&self) -> &str {
        "has-matter-markers"
    }

    fn description(&self) -> &str {
        "No frontmatter markers/delimiters found, necessary for frontmatter"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(ctx.document.has_matter())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::HasFixer(Fixer::AddMatterMarkers)
    }
}

/// Fails when the front matter block has no fields.
///
/// Undetermined without a complete, parseable block.
pub struct NonEmptyMatterRule;

impl LintRule for NonEmptyMatterRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML002")
    }

    fn name(&self) -> &str {
        "non-empty-matter"
    }

    fn description(&self) -> &str {
        "No frontmatter fields found, frontmatter is irrelevant without a field"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        let doc = ctx.document;
        if !doc.has_matter() || doc.yaml_error.is_some() {
            return Outcome::Undetermined;
        }
        Outcome::from_bool(!doc.metadata.is_empty())
    }
}

/// Fails when the front matter block is not a valid YAML mapping.
pub struct HasValidYamlRule;

impl LintRule for HasValidYamlRule {
    fn id(&self) -> RuleId {
        RuleId::new("FML003")
    }

    fn name(&self) -> &str {
        "has-valid-yaml"
    }

    fn description(&self) -> &str {
        "YAML frontmatter has formatting errors, needs to be fixed to continue"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Outcome {
        Outcome::from_bool(ctx.document.yaml_error.is_none())
    }

    fn fixer(&self) -> FixerBinding {
        FixerBinding::Unfixable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matter::Document;
    use std::path::Path;

    fn check(rule: &dyn LintRule, text: &str) -> Outcome {
        let doc = Document::parse(text);
        rule.check(&LintContext::new(Path::new("note.md"), &doc, None))
    }

    #[test]
    fn markers_fail_without_delimiters() {
        assert_eq!(check(&HasMatterMarkersRule, "Hello World!\n"), Outcome::Fail);
    }

    #[test]
    fn markers_fail_with_only_end_delimiter() {
        assert_eq!(
            check(&HasMatterMarkersRule, "foo: bar\n---\nHello\n"),
            Outcome::Fail
        );
    }

    #[test]
    fn markers_fail_with_only_start_delimiter() {
        assert_eq!(
            check(&HasMatterMarkersRule, "---\nfoo: bar\nHello\n"),
            Outcome::Fail
        );
    }

    #[test]
    fn markers_pass_on_empty_matter() {
        assert_eq!(check(&HasMatterMarkersRule, "---\n---\n"), Outcome::Pass);
        assert_eq!(
            check(&HasMatterMarkersRule, "---\n---\nHello\n"),
            Outcome::Pass
        );
    }

    #[test]
    fn mismatch_detects_unclosed_block() {
        assert_eq!(
            check(&MatterDelimitersMatchRule, "---\nfoo: bar\n"),
            Outcome::Fail
        );
    }

    #[test]
    fn mismatch_ignores_dashes_in_body() {
        // Setext heading underline
        assert_eq!(
            check(&MatterDelimitersMatchRule, "My Title\n---\nSome text\n"),
            Outcome::Pass
        );
        // Horizontal rule
        assert_eq!(
            check(
                &MatterDelimitersMatchRule,
                "# Notes\n\nPart one\n\n---\n\nPart two\n"
            ),
            Outcome::Pass
        );
    }

    #[test]
    fn mismatch_passes_with_none_or_both() {
        assert_eq!(check(&MatterDelimitersMatchRule, "Hello\n"), Outcome::Pass);
        assert_eq!(check(&MatterDelimitersMatchRule, "---\n---\n"), Outcome::Pass);
        assert_eq!(
            check(&MatterDelimitersMatchRule, "---\na: 1\n---\nb\n"),
            Outcome::Pass
        );
    }

    #[test]
    fn non_empty_passes_with_a_field() {
        assert_eq!(
            check(&NonEmptyMatterRule, "---\nfoo: bar\n---\n"),
            Outcome::Pass
        );
    }

    #[test]
    fn non_empty_fails_on_empty_block() {
        assert_eq!(check(&NonEmptyMatterRule, "---\n---\n"), Outcome::Fail);
    }

    #[test]
    fn non_empty_is_undetermined_without_markers() {
        assert_eq!(
            check(&NonEmptyMatterRule, "Hello World!\n"),
            Outcome::Undetermined
        );
        assert_eq!(
            check(&NonEmptyMatterRule, "---\nfoo: bar\n"),
            Outcome::Undetermined
        );
    }

    #[test]
    fn valid_yaml_fails_on_duplicate_keys() {
        assert_eq!(
            check(&HasValidYamlRule, "---\nfoo: 1\nfoo: 2\n---\n"),
            Outcome::Fail
        );
    }

    #[test]
    fn valid_yaml_passes_without_structure() {
        assert_eq!(check(&HasValidYamlRule, "Just text\n"), Outcome::Pass);
        assert_eq!(check(&HasValidYamlRule, "---\n---\n"), Outcome::Pass);
        assert_eq!(
            check(&HasValidYamlRule, "---\ntitle: ok\n---\n"),
            Outcome::Pass
        );
    }

    #[test]
    fn error_rules_are_unfixable() {
        assert_eq!(MatterDelimitersMatchRule.fixer(), FixerBinding::Unfixable);
        assert_eq!(HasValidYamlRule.fixer(), FixerBinding::Unfixable);
        assert_eq!(NonEmptyMatterRule.fixer(), FixerBinding::NoFixer);
    }
}
