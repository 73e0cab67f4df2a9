use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SubmitFeedbackRequest {
    /// Who the sender is at the café, free text up to 50 characters
    pub role: String,
    /// One of "Feature Request", "Bug Report", "General Feedback",
    /// "Order Issue"
    pub topic: String,
    /// The feedback itself, up to 500 characters; markup is stripped
    pub message: String,
}
