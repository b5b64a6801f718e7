use chrono::Utc;
use roster_business::{LoadRosterCommand, RosterFetchCompute, RosterState};
use roster_states::Time;

use crate::{state::State, widgets};

/// The eframe application driving the roster table.
pub struct RosterApp {
    pub state: State,
    load_requested: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            load_requested: false,
        }
    }

    /// Applies a finished fetch to the roster exactly once, so a late
    /// compute update can never clobber in-session edits.
    fn install_loaded_records(&mut self) {
        if self.state.ctx.state::<RosterState>().is_loaded() {
            return;
        }
        let Some(records) = self
            .state
            .ctx
            .cached::<RosterFetchCompute>()
            .and_then(|compute| compute.records().map(<[_]>::to_vec))
        else {
            return;
        };
        let now = *self.state.ctx.state::<Time>().as_ref();
        log::info!("installing {} roster records", records.len());
        self.state
            .ctx
            .state_mut::<RosterState>()
            .install(records, now);
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.update::<Time>(|time| time.set(Utc::now()));

        if !self.load_requested {
            self.load_requested = true;
            self.state.ctx.enqueue_command::<LoadRosterCommand>();
        }

        self.state.ctx.sync_computes();
        self.install_loaded_records();

        // A fired search filters the live records, not a snapshot.
        if let Some(query) = self.state.search.poll() {
            log::debug!("search fired: {query:?}");
            self.state
                .ctx
                .state_mut::<RosterState>()
                .run_search(&query);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Roster Admin");
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::roster_panel(&mut self.state, ui);
        });

        self.state.ctx.flush_commands();

        // Keep painting while async work is pending so its result lands
        // without waiting for user input.
        let waiting = self.state.search.is_pending()
            || self
                .state
                .ctx
                .cached::<RosterFetchCompute>()
                .is_some_and(RosterFetchCompute::is_loading);
        if waiting {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
