//! The problem reporter: one hook for every unresolved cross-reference.

use tracing::warn;

use crate::{Error, Result};

/// Reports unresolved references according to the configured strictness.
///
/// In strict mode every reported problem becomes a hard failure at the call
/// site (propagate with `?`). In lenient mode the problem is logged and
/// resolution continues with a documented default substitute.
#[derive(Debug, Clone, Copy)]
pub struct ProblemReporter {
    strict: bool,
}

impl ProblemReporter {
    pub fn new(strict: bool) -> Self {
        ProblemReporter { strict }
    }

    /// Whether reported problems are fatal.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Report an unresolved reference described by `message`.
    pub fn report(&self, message: impl Into<String>) -> Result<()> {
        self.raise(Error::Reference(message.into()))
    }

    /// Report an already-classified problem.
    ///
    /// Strict mode returns the error for the caller to propagate; lenient
    /// mode logs it and lets resolution continue.
    pub fn raise(&self, error: Error) -> Result<()> {
        if self.strict {
            Err(error)
        } else {
            warn!(problem = %error, "unresolved resource reference");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_reporter_raises() {
        let reporter = ProblemReporter::new(true);
        let result = reporter.report("shïp 1:128 missing shän");
        assert!(matches!(result, Err(Error::Reference(message)) if message.contains("shän")));
    }

    #[test]
    fn lenient_reporter_continues() {
        let reporter = ProblemReporter::new(false);
        assert!(reporter.report("shïp 1:128 missing shän").is_ok());
    }
}
