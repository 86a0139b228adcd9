//! Breakpoint tiers and the rules that gate conditional blocks.

use std::fmt;
use std::sync::Arc;

/// A viewport tier, ordered smallest first.
///
/// The smallest tier ([`Breakpoint::BASE`]) is the unconditional block: values
/// given for it land at the top level of a compiled object instead of inside
/// a conditional block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Every tier, smallest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// The tier that contributes to the unconditional block.
    pub const BASE: Breakpoint = Breakpoint::Xs;

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Looks up a tier by name. Matching is exact: `"MD"` is not a breakpoint.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == name)
    }

    pub fn is_base(self) -> bool {
        self == Self::BASE
    }

    /// The built-in minimum viewport width of this tier, in pixels.
    pub fn default_min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 900,
            Breakpoint::Lg => 1200,
            Breakpoint::Xl => 1536,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the condition string for a tier from the tier and its min width.
pub type RuleFn = dyn Fn(Breakpoint, u32) -> String + Send + Sync;

/// Minimum widths for every tier plus the rule that turns a tier into the
/// key of its conditional block.
///
/// The default rule produces `@media (min-width:900px)`.
///
/// # Example
///
/// ```rust
/// use ldstyle::{Breakpoint, Breakpoints};
///
/// let breakpoints = Breakpoints::new().with_value(Breakpoint::Md, 768);
/// assert_eq!(breakpoints.up(Breakpoint::Md), "@media (min-width:768px)");
///
/// let container = breakpoints.with_rule(|_, px| format!("@container (min-width: {}px)", px));
/// assert_eq!(container.up(Breakpoint::Sm), "@container (min-width: 600px)");
/// ```
#[derive(Clone)]
pub struct Breakpoints {
    values: [u32; 5],
    rule: Option<Arc<RuleFn>>,
}

impl Breakpoints {
    /// Creates the built-in five-tier scale.
    pub fn new() -> Self {
        Self {
            values: Breakpoint::ALL.map(Breakpoint::default_min_width),
            rule: None,
        }
    }

    /// Overrides the min width of one tier.
    pub fn with_value(mut self, breakpoint: Breakpoint, px: u32) -> Self {
        self.values[breakpoint.index()] = px;
        self
    }

    /// Replaces the rule used to build conditional block keys.
    pub fn with_rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(Breakpoint, u32) -> String + Send + Sync + 'static,
    {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// The min width of a tier, in pixels.
    pub fn value(&self, breakpoint: Breakpoint) -> u32 {
        self.values[breakpoint.index()]
    }

    /// The condition string for "this tier and above".
    pub fn up(&self, breakpoint: Breakpoint) -> String {
        let px = self.value(breakpoint);
        match &self.rule {
            Some(rule) => rule(breakpoint, px),
            None => format!("@media (min-width:{}px)", px),
        }
    }

    /// Iterates tiers with their widths, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL.into_iter().map(move |bp| (bp, self.value(bp)))
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Breakpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breakpoints")
            .field("values", &self.values)
            .field("rule", &self.rule.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
