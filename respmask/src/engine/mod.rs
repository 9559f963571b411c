//! The masking engine.
//!
//! - **`rule`**: the [`MaskingRule`] trait and the per-request [`RuleSet`]
//! - **`mode`**: [`Mode`], which decides how selectors are read
//! - **`traverse`**: the tree walk behind [`mask`]
//! - **`plan`**: [`MaskPlan`], a rule set bound to its mode
//!
//! The engine is synchronous and keeps no state between calls.

mod mode;
mod plan;
mod rule;
mod traverse;

pub use mode::{Mode, ParseModeError};
pub use plan::MaskPlan;
pub use rule::{MaskingRule, RuleSet, SharedRule};
pub use traverse::{mask, mask_object};
