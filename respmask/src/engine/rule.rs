//! The [`MaskingRule`] trait and the per-request [`RuleSet`].

use std::{collections::HashMap, fmt, sync::Arc};

/// A pure function from a sensitive string to its masked form.
///
/// Rules must be deterministic and total over UTF-8 strings. Any
/// `Fn(&str) -> String + Send + Sync` is a rule:
///
/// ```rust
/// use respmask::MaskingRule;
///
/// let upper = |input: &str| input.to_uppercase();
/// assert_eq!(upper.mask("abc"), "ABC");
/// ```
///
/// Rules are shared across threads, so they must be `Send + Sync`:
///
/// ```compile_fail
/// use std::rc::Rc;
/// use respmask::RuleSet;
///
/// let suffix = Rc::new(String::from("!"));
/// let rules = RuleSet::new().with("name", move |input: &str| format!("{input}{suffix}"));
/// ```
pub trait MaskingRule: Send + Sync {
    /// Returns the masked form of `input`.
    fn mask(&self, input: &str) -> String;
}

impl<F> MaskingRule for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn mask(&self, input: &str) -> String {
        self(input)
    }
}

/// A reference-counted rule, cheap to clone into many rule sets.
pub type SharedRule = Arc<dyn MaskingRule>;

/// Mapping from field selector to masking rule.
///
/// How a selector is interpreted (dotted path or bare key) depends on the
/// [`Mode`](super::Mode) the set is applied with. Inserting a selector twice
/// replaces the earlier rule.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, SharedRule>,
}

impl RuleSet {
    /// Creates an empty rule set. Applying it never changes a document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rule` under `selector`, consuming and returning the set.
    #[must_use]
    pub fn with<R>(mut self, selector: impl Into<String>, rule: R) -> Self
    where
        R: MaskingRule + 'static,
    {
        self.insert(selector, rule);
        self
    }

    /// Adds an already shared rule under `selector`.
    #[must_use]
    pub fn with_shared(mut self, selector: impl Into<String>, rule: SharedRule) -> Self {
        self.rules.insert(selector.into(), rule);
        self
    }

    /// Adds the catalogue rule `rule` under `selector`.
    #[cfg(feature = "catalogue")]
    #[must_use]
    pub fn with_builtin(self, selector: impl Into<String>, rule: crate::BuiltinRule) -> Self {
        self.with_shared(selector, crate::RuleCatalogue::global().get(rule))
    }

    /// Adds `rule` under `selector`, returning the rule it replaced.
    pub fn insert<R>(&mut self, selector: impl Into<String>, rule: R) -> Option<SharedRule>
    where
        R: MaskingRule + 'static,
    {
        self.rules.insert(selector.into(), Arc::new(rule))
    }

    /// Returns the rule registered for exactly `selector`.
    pub fn get(&self, selector: &str) -> Option<&dyn MaskingRule> {
        self.rules.get(selector).map(|rule| &**rule)
    }

    /// Returns `true` if `selector` has a rule.
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Number of selectors in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no selectors.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the selectors, in no particular order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl<S> FromIterator<(S, SharedRule)> for RuleSet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, SharedRule)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(selector, rule)| (selector.into(), rule))
                .collect(),
        }
    }
}

impl<S> Extend<(S, SharedRule)> for RuleSet
where
    S: Into<String>,
{
    fn extend<I: IntoIterator<Item = (S, SharedRule)>>(&mut self, iter: I) {
        self.rules.extend(
            iter.into_iter()
                .map(|(selector, rule)| (selector.into(), rule)),
        );
    }
}

// Rules are opaque closures; only the selectors are printable.
impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut selectors: Vec<&str> = self.selectors().collect();
        selectors.sort_unstable();
        f.debug_struct("RuleSet")
            .field("selectors", &selectors)
            .finish()
    }
}
