//! [`MaskPlan`]: a rule set bound to the mode that interprets it.

use serde_json::Value;

use super::{Mode, RuleSet, mask};

/// Everything needed to mask one document.
///
/// Resolvers hand a plan to the response interceptor for each request.
#[derive(Clone, Debug)]
pub struct MaskPlan {
    rules: RuleSet,
    mode: Mode,
}

impl MaskPlan {
    /// Binds `rules` to `mode`.
    #[must_use]
    pub fn new(rules: RuleSet, mode: Mode) -> Self {
        Self { rules, mode }
    }

    /// A plan whose selectors are dotted paths.
    #[must_use]
    pub fn exact(rules: RuleSet) -> Self {
        Self::new(rules, Mode::Exact)
    }

    /// A plan whose selectors are bare keys matched at any depth.
    #[must_use]
    pub fn recursive(rules: RuleSet) -> Self {
        Self::new(rules, Mode::Recursive)
    }

    /// A plan that masks nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::exact(RuleSet::new())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if applying the plan can never change a document.
    pub fn is_noop(&self) -> bool {
        self.rules.is_empty()
    }

    /// Masks `root` in place, returning the number of replaced leaves.
    pub fn apply(&self, root: &mut Value) -> usize {
        mask(root, &self.rules, self.mode)
    }
}
