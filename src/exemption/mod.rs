//! Exemption subsystem.
//!
//! # Data Flow
//! ```text
//! ExemptionsConfig (at startup)
//!     → matcher.rs (compile prefixes and regexes)
//!     → evaluator.rs (freeze as immutable ExemptionConfig)
//!
//! Per outbound path:
//!     path / host / routing key
//!     → evaluator.rs (independence + restricted allow-list)
//!     → bool answers consumed by the path composer
//! ```

pub mod evaluator;
pub mod matcher;

pub use evaluator::ExemptionConfig;
pub use matcher::{AnyMatcher, Matcher, PathPattern, PatternCategory, PrefixMatcher, RoutingScope};
