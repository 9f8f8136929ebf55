use uuid::Uuid;

/// Correlation context threaded through every operation so that log records of a single
/// authentication attempt can be tied together, here and on the server side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LogContext {
    correlation_id: Uuid,
}

impl LogContext {
    /// Uses the supplied correlation id or generates a fresh one
    pub fn new(correlation_id: Option<Uuid>) -> Self {
        Self {
            correlation_id: correlation_id.unwrap_or_else(Uuid::new_v4),
        }
    }

    /// Correlation id of this context
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Span every log record of a component should be emitted in
    pub fn span(&self, component: &'static str) -> tracing::Span {
        tracing::debug_span!("adal", component, correlation_id = %self.correlation_id)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(None)
    }
}

impl From<Uuid> for LogContext {
    fn from(correlation_id: Uuid) -> Self {
        Self::new(Some(correlation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_supplied_correlation_id() {
        let id = uuid::uuid!("4af3df2e-5c01-422f-baa1-d75546b92aa7");
        assert_eq!(LogContext::new(Some(id)).correlation_id(), id);
        assert_eq!(LogContext::from(id).correlation_id(), id);
    }

    #[test]
    fn should_generate_distinct_correlation_ids() {
        assert_ne!(LogContext::default(), LogContext::default());
    }
}
