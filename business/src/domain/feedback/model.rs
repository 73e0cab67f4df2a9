use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

use super::errors::FeedbackError;

const ROLE_MAX_CHARS: usize = 50;
const MESSAGE_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedbackTopic {
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    #[serde(rename = "Bug Report")]
    BugReport,
    #[serde(rename = "General Feedback")]
    GeneralFeedback,
    #[serde(rename = "Order Issue")]
    OrderIssue,
}

impl std::fmt::Display for FeedbackTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackTopic::FeatureRequest => write!(f, "Feature Request"),
            FeedbackTopic::BugReport => write!(f, "Bug Report"),
            FeedbackTopic::GeneralFeedback => write!(f, "General Feedback"),
            FeedbackTopic::OrderIssue => write!(f, "Order Issue"),
        }
    }
}

impl std::str::FromStr for FeedbackTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Feature Request" => Ok(FeedbackTopic::FeatureRequest),
            "Bug Report" => Ok(FeedbackTopic::BugReport),
            "General Feedback" => Ok(FeedbackTopic::GeneralFeedback),
            "Order Issue" => Ok(FeedbackTopic::OrderIssue),
            _ => Err(format!("Invalid feedback topic: {}", s)),
        }
    }
}

/// A sanitized feedback entry ready to be written. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub user_id: UserId,
    pub user_email: String,
    pub role: String,
    pub topic: FeedbackTopic,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewFeedbackProps {
    pub user_id: UserId,
    pub user_email: String,
    pub role: String,
    pub topic: FeedbackTopic,
    pub message: String,
}

impl Feedback {
    /// Validates and sanitizes raw input. Angle brackets are stripped from
    /// the message before the emptiness check, so a message of markup alone
    /// does not survive. The creation instant comes from the caller's clock.
    pub fn new(props: NewFeedbackProps, created_at: DateTime<Utc>) -> Result<Self, FeedbackError> {
        let role = props.role.trim().to_string();
        if role.is_empty() {
            return Err(FeedbackError::RoleEmpty);
        }
        if role.chars().count() > ROLE_MAX_CHARS {
            return Err(FeedbackError::RoleTooLong);
        }

        let message = sanitize_message(&props.message);
        if message.is_empty() {
            return Err(FeedbackError::MessageEmpty);
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(FeedbackError::MessageTooLong);
        }

        Ok(Self {
            user_id: props.user_id,
            user_email: props.user_email,
            role,
            topic: props.topic,
            message,
            created_at,
        })
    }
}

fn sanitize_message(raw: &str) -> String {
    raw.replace(['<', '>'], "").trim().to_string()
}
