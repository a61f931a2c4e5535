//! Decides whether a failed operation ended with a known transient condition.

use crate::provider::ProviderError;

pub trait ErrorClassifier: Send + Sync {
    /// Returns true when `err` matches any of `reasons`.
    fn matches(&self, err: &anyhow::Error, reasons: &[&str]) -> bool;
}

/// Default classifier.
///
/// Every link of the error chain is inspected. A [`ProviderError`] link is
/// matched on its code (exact, or a dotted sub-code of the reason); any other
/// link is matched when its message contains the reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReasonMatcher;

impl ErrorClassifier for ReasonMatcher {
    fn matches(&self, err: &anyhow::Error, reasons: &[&str]) -> bool {
        reasons
            .iter()
            .filter(|reason| !reason.is_empty())
            .any(|reason| chain_matches(err, reason))
    }
}

pub fn is_expected_error(err: &anyhow::Error, reasons: &[&str]) -> bool {
    ReasonMatcher.matches(err, reasons)
}

fn chain_matches(err: &anyhow::Error, reason: &str) -> bool {
    err.chain().any(|link| match link.downcast_ref::<ProviderError>() {
        Some(provider) => provider.code_matches(reason),
        None => link.to_string().contains(reason),
    })
}
