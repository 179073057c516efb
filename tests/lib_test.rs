//! Library integration tests.

use fmlint::FmlintError;

#[test]
fn error_types_are_public() {
    let err = FmlintError::UnknownRule {
        id: "FML999".into(),
    };
    assert!(err.to_string().contains("FML999"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fmlint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use fmlint::cli::Cli;

    let cli = Cli::parse_from(["fmlint", "notes", "--check", "--rules", "FML001"]);
    assert!(cli.lint.check);
    assert_eq!(cli.lint.rules, ["FML001"]);
}

#[test]
fn builtin_registry_is_public() {
    use fmlint::lint::{FixerBinding, RuleId, RuleRegistry, Severity};

    let registry = RuleRegistry::builtin();
    assert_eq!(registry.len(), 10);

    let rule = registry.get(&RuleId::new("FML003")).unwrap();
    assert_eq!(rule.severity(), Severity::Error);
    assert_eq!(rule.fixer(), FixerBinding::Unfixable);
}
