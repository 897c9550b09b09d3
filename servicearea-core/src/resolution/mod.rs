mod eligibility_resolver;
mod error;
pub mod precedence_ops;
mod resolution_result;
pub mod time_window_ops;

pub use eligibility_resolver::EligibilityResolver;
pub use error::ResolutionError;
pub use resolution_result::ResolutionResult;
