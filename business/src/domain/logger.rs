/// Logging port for the domain and application layers.
///
/// Call sites pass a short context tag (the flow or screen the message belongs
/// to) and a plain-English message. `error` carries optional technical details
/// that are kept out of anything user-facing.
pub trait Logger: Send + Sync {
    fn info(&self, context: &str, message: &str);
    fn warn(&self, context: &str, message: &str);
    fn error(&self, context: &str, message: &str, details: Option<&str>);
    fn debug(&self, context: &str, message: &str);
}
