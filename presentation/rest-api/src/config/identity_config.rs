use std::env;

/// Firebase identity settings shared by the bearer-token checker.
///
/// Environment variables:
/// - FIREBASE_PROJECT_ID: project whose tokens are accepted (required)
pub struct IdentityConfig {
    pub project_id: String,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: env::var("FIREBASE_PROJECT_ID")
                .expect("FIREBASE_PROJECT_ID must be set"),
        }
    }
}

/// Email allowlist gating the administrative endpoints (order dashboard,
/// menu seeding and export). Identity comes from the verified token; this
/// policy only decides which of those identities count as staff.
///
/// Environment variables:
/// - ADMIN_EMAILS: Comma-separated list of admin email addresses
///   (default: empty, no admins)
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl AdminPolicy {
    pub fn from_env() -> Self {
        let raw = env::var("ADMIN_EMAILS").unwrap_or_default();
        Self::from_list(&raw)
    }

    pub fn from_list(raw: &str) -> Self {
        let emails = raw
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self { emails }
    }

    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.emails.iter().any(|admin| admin == &email)
    }
}
