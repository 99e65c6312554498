//! Store configuration.

use contrato_core::stats::DEFAULT_EXPIRING_WINDOW_DAYS;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Lookahead for "expiring soon" notifications (default: 30 days).
    pub expiring_window_days: u32,
    /// History author used when nobody is signed in.
    pub system_actor: String,
    /// Load the sample collection at startup.
    pub seed_mock_data: bool,
    /// Reject creates/updates with an empty title, a negative value or an
    /// end date before the start date. Off by default: the form sends
    /// whatever the user typed.
    pub strict_validation: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
            system_actor: "Sistema".into(),
            seed_mock_data: true,
            strict_validation: false,
        }
    }
}
