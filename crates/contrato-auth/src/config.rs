//! Authentication configuration.

/// Identity handed to whoever signs in.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session user id (default: `u1`).
    pub user_id: String,
    /// Display name recorded in contract history entries.
    pub display_name: String,
    /// Placeholder avatar image URL.
    pub avatar_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_id: "u1".into(),
            display_name: "Admin Saúde".into(),
            avatar_url: "https://picsum.photos/100/100".into(),
        }
    }
}
