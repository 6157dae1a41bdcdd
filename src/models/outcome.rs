//! Tagged outcome of one upstream fetch
//!
//! A sum type instead of bare `Option`/`Result` so callers must handle all
//! three cases: usable data, a successful call with no data, and a failed
//! call. Fallback treats `Empty` and `Error` identically; logging does not.

use crate::error::FetchError;

// == Fetch Outcome ==
/// Result of a single source-client call.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    /// The upstream returned usable data
    Ok(T),
    /// The upstream answered successfully but had no data for this word
    Empty,
    /// The call failed (transport, non-2xx, malformed body)
    Error(FetchError),
}

impl<T> FetchOutcome<T> {
    /// Returns `true` for the `Ok` variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, FetchOutcome::Ok(_))
    }

    /// Collapses the outcome into the payload, discarding error detail.
    ///
    /// This is the default-substitution step of aggregation: `Empty` and
    /// `Error` both become `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Ok(value) => Some(value),
            FetchOutcome::Empty | FetchOutcome::Error(_) => None,
        }
    }

    /// Builds an outcome from optional data: `Some` becomes `Ok`,
    /// `None` becomes `Empty`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => FetchOutcome::Ok(value),
            None => FetchOutcome::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_option_ok() {
        let outcome: FetchOutcome<u32> = FetchOutcome::Ok(7);
        assert!(outcome.is_ok());
        assert_eq!(outcome.into_option(), Some(7));
    }

    #[test]
    fn test_into_option_empty_and_error() {
        let empty: FetchOutcome<u32> = FetchOutcome::Empty;
        assert_eq!(empty.into_option(), None);

        let error: FetchOutcome<u32> = FetchOutcome::Error(FetchError::Upstream(500));
        assert!(!error.is_ok());
        assert_eq!(error.into_option(), None);
    }

    #[test]
    fn test_from_option() {
        assert!(FetchOutcome::from_option(Some(1)).is_ok());
        assert!(matches!(
            FetchOutcome::<u32>::from_option(None),
            FetchOutcome::Empty
        ));
    }
}
