//! Per-request rule resolution.

use std::{collections::HashMap, fmt, sync::Arc};

use axum::extract::Request;
use respmask::MaskPlan;

/// Decides which fields of a request's response are masked, and how.
///
/// Any `Fn(&Request) -> MaskPlan` that is `Clone + Send + Sync` is a resolver:
///
/// ```rust
/// use axum::extract::Request;
/// use respmask::{BuiltinRule, MaskPlan, RuleSet};
/// use respmask_axum::MaskingLayer;
///
/// let layer = MaskingLayer::new(|request: &Request| match request.uri().path() {
///     "/api/data" => MaskPlan::exact(RuleSet::new().with_builtin("email", BuiltinRule::Email)),
///     _ => MaskPlan::none(),
/// });
/// # let _ = layer;
/// ```
pub trait ResolveRules: Clone + Send + Sync + 'static {
    /// Returns the plan to apply to the response for `request`.
    fn resolve(&self, request: &Request) -> MaskPlan;
}

impl<F> ResolveRules for F
where
    F: Fn(&Request) -> MaskPlan + Clone + Send + Sync + 'static,
{
    fn resolve(&self, request: &Request) -> MaskPlan {
        self(request)
    }
}

/// Maps exact request paths to mask plans.
///
/// Paths without an entry resolve to [`MaskPlan::none`], so their responses
/// pass through untouched.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: Arc<HashMap<String, MaskPlan>>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `plan` for `path`, replacing any plan already registered.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, plan: MaskPlan) -> Self {
        Arc::make_mut(&mut self.routes).insert(path.into(), plan);
        self
    }

    /// Returns the plan registered for exactly `path`.
    pub fn get(&self, path: &str) -> Option<&MaskPlan> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl ResolveRules for RouteTable {
    fn resolve(&self, request: &Request) -> MaskPlan {
        self.get(request.uri().path())
            .cloned()
            .unwrap_or_else(MaskPlan::none)
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.routes.iter()).finish()
    }
}
