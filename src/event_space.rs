//! The event space: joint observation history and probability queries.
//!
//! An [`EventSpace`] accumulates observed events, each a category label plus
//! the features that co-occurred with it, and answers joint, conditional, and
//! marginal probability queries from the recorded frequencies. It is the
//! computational core of a naive-Bayes-style classifier; the decision rule
//! and any smoothing live in the caller.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::bag::Bag;

/// Composite key pairing a category with a feature.
///
/// A `(C, F)` tuple works as a map key only when the pairing itself is
/// hashable; `Pair` is that product type. Two pairs are equal iff both
/// components are equal, and the hash combines both components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<C, F> {
    category: C,
    feature: F,
}

impl<C, F> Pair<C, F> {
    /// Creates a pair from its two components.
    #[must_use]
    pub fn new(category: C, feature: F) -> Self {
        Self { category, feature }
    }

    /// The category component.
    #[must_use]
    pub const fn category(&self) -> &C {
        &self.category
    }

    /// The feature component.
    #[must_use]
    pub const fn feature(&self) -> &F {
        &self.feature
    }
}

/// Frequency-based probability estimator over categories and features.
///
/// Holds three multiset counters: one over categories, one over features, and
/// one over (category, feature) pairs. Every call to [`EventSpace::observe`]
/// updates all three; queries never mutate.
///
/// Every probability in this API is normalized against the number of
/// observations (the category counter's total), not against the feature or
/// joint totals. The probability space is "event count".
///
/// Queries on an empty history, or conditioned on a never-observed category,
/// return NaN — the formulas are unchecked floating-point divisions, and
/// 0/0 is left to IEEE-754. See [`Bag::p`].
///
/// # Examples
///
/// ```
/// use eventspace::EventSpace;
///
/// let mut space = EventSpace::new();
/// space.observe("spam", ["buy", "now"]);
/// space.observe("ham", ["meeting", "now"]);
///
/// assert_eq!(space.p_category(&"spam"), 0.5);
/// assert_eq!(space.p_joint(&"now", &"spam"), 0.5);
/// assert_eq!(space.p_given(&"now", &"spam"), 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Serialize + Eq + Hash, F: Serialize + Eq + Hash",
    deserialize = "C: Deserialize<'de> + Eq + Hash + Clone, F: Deserialize<'de> + Eq + Hash + Clone"
))]
pub struct EventSpace<C, F> {
    categories: Bag<C>,
    features: Bag<F>,
    joint: Bag<Pair<C, F>>,
}

impl<C, F> EventSpace<C, F> {
    /// Creates an event space with zero observations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Bag::new(),
            features: Bag::new(),
            joint: Bag::new(),
        }
    }

    /// Number of `observe` calls recorded so far.
    #[must_use]
    pub const fn observations(&self) -> u64 {
        self.categories.total()
    }

    /// Distinct categories observed so far, in first-insertion order.
    #[must_use]
    pub fn categories(&self) -> &[C] {
        self.categories.members()
    }

    /// Distinct features observed so far, in first-insertion order.
    #[must_use]
    pub fn features(&self) -> &[F] {
        self.features.members()
    }

    /// The category counter.
    #[must_use]
    pub const fn category_counts(&self) -> &Bag<C> {
        &self.categories
    }

    /// The feature counter.
    #[must_use]
    pub const fn feature_counts(&self) -> &Bag<F> {
        &self.features
    }

    /// The joint (category, feature) counter.
    #[must_use]
    pub const fn joint_counts(&self) -> &Bag<Pair<C, F>> {
        &self.joint
    }
}

impl<C, F> EventSpace<C, F>
where
    C: Eq + Hash + Clone,
    F: Eq + Hash + Clone,
{
    /// Records one observed event: a category and its co-occurring features.
    ///
    /// Appends the category once, each feature element once to the feature
    /// counter, and one (category, feature) pair per feature element to the
    /// joint counter. A feature repeated within `features` counts each time
    /// it appears. An empty feature sequence is valid and touches only the
    /// category counter. Never fails; there is no partial-update path.
    pub fn observe<I>(&mut self, category: C, features: I)
    where
        I: IntoIterator<Item = F>,
    {
        for feature in features {
            self.joint
                .append(Pair::new(category.clone(), feature.clone()));
            self.features.append(feature);
        }
        self.categories.append(category);
    }

    /// Joint probability of observing `feature` and `category` together:
    /// P(feature, category).
    ///
    /// The denominator is the total number of observations, not the joint
    /// counter's own total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn p_joint(&self, feature: &F, category: &C) -> f64 {
        let pair = Pair::new(category.clone(), feature.clone());
        self.joint.count(&pair) as f64 / self.categories.total() as f64
    }

    /// Conditional probability of `feature` given `category`:
    /// P(feature | category).
    ///
    /// Computed as `p_joint / p_category` so that rounding and NaN behavior
    /// follow the documented division chain. NaN when `category` was never
    /// observed.
    #[must_use]
    pub fn p_given(&self, feature: &F, category: &C) -> f64 {
        self.p_joint(feature, category) / self.p_category(category)
    }

    /// Base rate of `category`: P(category).
    #[must_use]
    pub fn p_category(&self, category: &C) -> f64 {
        self.categories.p(category)
    }
}

impl<C, F> Default for EventSpace<C, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, F> PartialEq for EventSpace<C, F>
where
    C: Eq + Hash,
    F: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
            && self.features == other.features
            && self.joint == other.joint
    }
}

impl<C, F> Eq for EventSpace<C, F>
where
    C: Eq + Hash,
    F: Eq + Hash,
{
}
