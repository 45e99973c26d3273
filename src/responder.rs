/// Fallback seam consulted only when the matcher abstains.
///
/// Implementations own their failure handling: any internal error must be
/// converted into a user-facing string here, never propagated back into the
/// matching flow. A generative backend plugs in behind this trait with its
/// own timeout and retry discipline.
pub trait FallbackResponder: Send + Sync {
    fn respond(&self, query: &str) -> String;
}

/// Fixed-string fallback.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    message: String,
}

impl CannedResponder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new("I'm not sure how to answer that yet. Could you rephrase your question?")
    }
}

impl FallbackResponder for CannedResponder {
    fn respond(&self, _query: &str) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_responder_ignores_the_query() {
        let responder = CannedResponder::new("sorry");
        assert_eq!(responder.respond("anything"), "sorry");
        assert_eq!(responder.respond(""), "sorry");
    }
}
