use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("vidrecap.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("vidrecap.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("vidrecap.client.request_duration_seconds");

pub(crate) static SESSION_SUMMARIES: Counter = Counter::new("vidrecap.session.summaries");
pub(crate) static SESSION_SUMMARY_FAILURES: Counter =
    Counter::new("vidrecap.session.summary_failures");
pub(crate) static SESSION_MESSAGES: Counter = Counter::new("vidrecap.session.messages");
pub(crate) static SESSION_MESSAGE_FAILURES: Counter =
    Counter::new("vidrecap.session.message_failures");
pub(crate) static SESSION_VALIDATION_ERRORS: Counter =
    Counter::new("vidrecap.session.validation_errors");
pub(crate) static SESSION_IGNORED_SENDS: Counter = Counter::new("vidrecap.session.ignored_sends");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_SUMMARIES);
    collector.register_counter(&SESSION_SUMMARY_FAILURES);
    collector.register_counter(&SESSION_MESSAGES);
    collector.register_counter(&SESSION_MESSAGE_FAILURES);
    collector.register_counter(&SESSION_VALIDATION_ERRORS);
    collector.register_counter(&SESSION_IGNORED_SENDS);
}
