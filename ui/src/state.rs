use roster_business::{
    LoadRosterCommand, Pager, RosterConfig, RosterFetchCompute, RosterState, SearchDebounce,
};
use roster_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// State context for business logic.
    pub ctx: StateCtx,
    /// Debounce task for the search field.
    pub search: SearchDebounce,
    /// Live contents of the search text field.
    pub query_input: String,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(RosterConfig::default())
    }
}

impl State {
    pub fn with_config(config: RosterConfig) -> Self {
        let mut ctx = StateCtx::new();
        let pager = Pager::new(config.page_size);

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(RosterState::new(pager));
        ctx.record_compute(RosterFetchCompute::default());
        ctx.record_command(LoadRosterCommand);

        Self {
            ctx,
            search: SearchDebounce::new(),
            query_input: String::new(),
        }
    }

    /// State whose roster is served by a test server.
    pub fn test(data_url: String) -> Self {
        Self::with_config(RosterConfig::new(data_url))
    }
}
