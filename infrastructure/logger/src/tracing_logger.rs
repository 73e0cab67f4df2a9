use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Logger adapter backed by the `tracing` ecosystem. Each record carries
/// the domain context tag (CART, CHECKOUT, ...) so log lines stay
/// greppable per feature area.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, context: &str, message: &str) {
        info!(target: "cafe_api", "[{}] {}", context, message);
    }

    fn warn(&self, context: &str, message: &str) {
        warn!(target: "cafe_api", "[{}] {}", context, message);
    }

    fn error(&self, context: &str, message: &str, details: Option<&str>) {
        match details {
            Some(details) => {
                error!(target: "cafe_api", "[{}] {}: {}", context, message, details)
            }
            None => error!(target: "cafe_api", "[{}] {}", context, message),
        }
    }

    fn debug(&self, context: &str, message: &str) {
        debug!(target: "cafe_api", "[{}] {}", context, message);
    }
}
