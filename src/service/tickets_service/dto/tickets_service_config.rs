use std::time::Duration;

pub struct TicketsServiceConfig {
    /// How long a freshly created or rotated token stays valid
    pub token_lifespan: Duration,
}

impl Default for TicketsServiceConfig {
    fn default() -> Self {
        Self {
            token_lifespan: Duration::from_secs(30),
        }
    }
}
