//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules in canonical
//! (ascending [`RuleId`]) order and resolves user-supplied rule lists into a
//! [`RuleSet`] in that order.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::rule::{LintRule, RuleId};
use super::rules::{
    CreatedMatterOlderThanBirthtimeRule, HasCreatedMatterRule, HasMatterMarkersRule,
    HasModifiedMatterRule, HasValidCreatedMatterDateRule, HasValidModifiedMatterDateRule,
    HasValidYamlRule, MatterDelimitersMatchRule, ModifiedMatterNewerThanMtimeRule,
    NonEmptyMatterRule,
};
use crate::error::{FmlintError, Result};

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MatterDelimitersMatchRule));
        registry.register(Box::new(HasMatterMarkersRule));
        registry.register(Box::new(NonEmptyMatterRule));
        registry.register(Box::new(HasValidYamlRule));
        registry.register(Box::new(HasCreatedMatterRule));
        registry.register(Box::new(HasModifiedMatterRule));
        registry.register(Box::new(HasValidCreatedMatterDateRule));
        registry.register(Box::new(HasValidModifiedMatterDateRule));
        registry.register(Box::new(CreatedMatterOlderThanBirthtimeRule));
        registry.register(Box::new(ModifiedMatterNewerThanMtimeRule));
        registry
    }

    /// The process-wide registry of built-in rules.
    pub fn builtin() -> &'static RuleRegistry {
        static BUILTIN: OnceLock<RuleRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Register a lint rule, keeping canonical order.
    ///
    /// A rule with an id that is already registered replaces the old one.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.binary_search_by(|r| r.id().cmp(&id)) {
            Ok(index) => self.rules[index] = rule,
            Err(index) => self.rules.insert(index, rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// All rule ids in canonical order.
    pub fn all_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Restrict the canonical order to `subset`.
    ///
    /// Input order and duplicates are ignored; unknown ids are rejected.
    pub fn sort(&self, subset: &[RuleId]) -> Result<Vec<RuleId>> {
        Ok(self.select(subset)?.ids())
    }

    /// Resolve `subset` into the rules themselves, in canonical order.
    pub fn select(&self, subset: &[RuleId]) -> Result<RuleSet<'_>> {
        if let Some(unknown) = subset.iter().find(|id| self.get(id).is_none()) {
            return Err(FmlintError::UnknownRule {
                id: unknown.to_string(),
            });
        }
        let wanted: HashSet<&RuleId> = subset.iter().collect();
        let rules = self
            .rules
            .iter()
            .filter(|r| wanted.contains(&r.id()))
            .map(|r| r.as_ref())
            .collect();
        Ok(RuleSet { rules })
    }

    /// Every registered rule, in canonical order.
    pub fn all(&self) -> RuleSet<'_> {
        RuleSet {
            rules: self.rules.iter().map(|r| r.as_ref()).collect(),
        }
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered, duplicate-free selection of rules.
///
/// Only [`RuleRegistry`] builds these, so a `RuleSet` is always in
/// canonical order.
#[derive(Clone)]
pub struct RuleSet<'r> {
    rules: Vec<&'r dyn LintRule>,
}

impl<'r> RuleSet<'r> {
    /// Iterate over the selected rules.
    pub fn iter(&self) -> impl Iterator<Item = &'r dyn LintRule> + '_ {
        self.rules.iter().copied()
    }

    /// Ids of the selected rules.
    pub fn ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Number of selected rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
