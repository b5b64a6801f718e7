use std::any::Any;

use roster_states::State;

/// Rows shown per table page, fixed for the session.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Public endpoint serving the full member roster as a JSON array.
const DEFAULT_DATA_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// App configuration, registered in `StateCtx` and injected where needed
/// rather than read from globals.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// URL of the roster JSON array.
    pub data_url: String,
    /// Rows per table page.
    pub page_size: usize,
}

impl RosterConfig {
    /// Configuration pointing at `data_url`, e.g. a mock server in tests.
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }
}

impl State for RosterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
