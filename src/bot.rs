use crate::matcher::FaqMatcher;
use crate::responder::{CannedResponder, FallbackResponder};

/// Chatbot facade
/// The single boundary operation the surrounding service calls: matcher
/// first, fallback responder on abstention. Holds no conversation state, so
/// it is as shareable across threads as the matcher itself.
#[derive(Debug)]
pub struct Chatbot<R = CannedResponder>
where
    R: FallbackResponder,
{
    matcher: FaqMatcher,
    responder: R,
}

impl Chatbot<CannedResponder> {
    /// Matcher plus the default canned fallback.
    pub fn new(matcher: FaqMatcher) -> Self {
        Self::with_responder(matcher, CannedResponder::default())
    }
}

impl<R> Chatbot<R>
where
    R: FallbackResponder,
{
    pub fn with_responder(matcher: FaqMatcher, responder: R) -> Self {
        Self { matcher, responder }
    }

    /// Answer a raw query: the stored answer on a confident match, the
    /// fallback responder's string otherwise. Always returns some string.
    pub fn get_response(&self, query: &str) -> String {
        match self.matcher.find_best_match(query) {
            Some(m) => {
                tracing::debug!(index = m.index, score = m.score, "answered from corpus");
                m.answer.to_string()
            }
            None => {
                tracing::debug!("no confident match, delegating to fallback");
                self.responder.respond(query)
            }
        }
    }

    pub fn matcher(&self) -> &FaqMatcher {
        &self.matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::FaqCorpus;

    fn sample_bot() -> Chatbot {
        let corpus: FaqCorpus = [
            ("What is your name?", "I am a chatbot."),
            ("What is Python?", "Python is a programming language."),
        ]
        .into_iter()
        .collect();
        Chatbot::new(FaqMatcher::with_defaults(corpus).unwrap())
    }

    #[test]
    fn matched_query_returns_the_stored_answer() {
        let bot = sample_bot();
        assert_eq!(bot.get_response("What is Python?"), "Python is a programming language.");
    }

    #[test]
    fn unmatched_query_goes_to_the_fallback() {
        let bot = sample_bot();
        let reply = bot.get_response("qwertyuiop");
        assert_eq!(reply, CannedResponder::default().respond("qwertyuiop"));
    }

    #[test]
    fn custom_responder_sees_the_raw_query() {
        struct Echo;
        impl FallbackResponder for Echo {
            fn respond(&self, query: &str) -> String {
                format!("echo: {query}")
            }
        }
        let corpus: FaqCorpus = [("What is Python?", "A language.")].into_iter().collect();
        let bot = Chatbot::with_responder(FaqMatcher::with_defaults(corpus).unwrap(), Echo);
        assert_eq!(bot.get_response("zzzz"), "echo: zzzz");
    }
}
