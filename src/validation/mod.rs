//! The consistency engine: rule families, their diagnostics and the
//! validator that runs them in order.
pub use self::error::{Category, Diagnostic, DiagnosticKind, DictionaryError};
pub use self::validator::Validator;

#[cfg(test)]
pub(crate) use self::rules::{RuleContext, RuleFamily};

mod error;
mod rules;
mod validator;
