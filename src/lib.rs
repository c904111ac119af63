//! # eventspace — frequency-based probability estimation
//!
//! `eventspace` is the counting core of a naive-Bayes-style classifier. It
//! ingests observed events, each a category label plus the features that
//! co-occurred with it, and answers joint, conditional, and marginal
//! probability queries derived from the recorded frequencies.
//!
//! ## Core Concepts
//!
//! - **Bag**: an append-only multiset counter with deterministic
//!   first-insertion enumeration order
//! - **EventSpace**: three bags (categories, features, joint pairs) behind an
//!   observe/query API
//! - **Pair**: the composite (category, feature) key for the joint counter
//!
//! Categories and features are arbitrary application-defined types; they only
//! need equality, hashing, and (for snapshots) serde support.
//!
//! ## Usage
//!
//! ```
//! use eventspace::EventSpace;
//!
//! let mut space = EventSpace::new();
//! space.observe("spam", ["buy", "now"]);
//! space.observe("ham", ["meeting", "now"]);
//!
//! assert_eq!(space.p_category(&"spam"), 0.5);
//! assert_eq!(space.p_given(&"now", &"spam"), 1.0);
//! assert_eq!(space.p_given(&"buy", &"ham"), 0.0);
//! ```
//!
//! Probabilities are unchecked floating-point ratios: querying an empty
//! history, or conditioning on a never-observed category, yields NaN rather
//! than an error. Smoothing and the classification decision rule belong to
//! the caller.
//!
//! A single `EventSpace` is not safe to share across threads without external
//! synchronization: `observe` updates three counters in sequence, and a
//! concurrent reader could see a torn intermediate state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bag;
pub mod error;
pub mod event_space;
pub mod snapshot;

pub use bag::Bag;
pub use error::SnapshotError;
pub use event_space::{EventSpace, Pair};
