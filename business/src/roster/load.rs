//! Load pipeline: fetch the roster once at startup.
//!
//! Fetching is a side effect, so it lives in a manual-only command that
//! publishes into a compute-shaped cache; nothing here touches live state.
//! The app installs a `Loaded` result into `RosterState` exactly once.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use log::{error, info};
use roster_states::{Command, CommandSnapshot, Compute, Updater, assign_impl};
use tokio_util::sync::CancellationToken;

use crate::config::RosterConfig;
use crate::http::Client;
use crate::member::MemberRecord;

/// Status/result of the roster fetch.
#[derive(Debug, Clone, Default)]
pub enum RosterFetchResult {
    /// No request made yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// The fetch succeeded with these records.
    Loaded(Vec<MemberRecord>),
    /// The fetch failed; the UI shows this instead of the loading state.
    Error(String),
}

/// Compute-shaped cache for the fetch outcome, read via
/// `ctx.cached::<RosterFetchCompute>()`.
#[derive(Debug, Clone, Default)]
pub struct RosterFetchCompute {
    pub result: RosterFetchResult,
}

impl RosterFetchCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, RosterFetchResult::Loading)
    }

    pub fn records(&self) -> Option<&[MemberRecord]> {
        match &self.result {
            RosterFetchResult::Loaded(records) => Some(records.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            RosterFetchResult::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl Compute for RosterFetchCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command performing the initial GET. No retry and no timeout:
/// a failure is published once and the UI falls back to the error state.
#[derive(Debug, Default)]
pub struct LoadRosterCommand;

impl Command for LoadRosterCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let config: RosterConfig = snap.state::<RosterConfig>();

        Box::pin(async move {
            info!("LoadRosterCommand: fetching roster from {}", config.data_url);
            updater.set(RosterFetchCompute {
                result: RosterFetchResult::Loading,
            });

            let response = match Client::get(&config.data_url).send().await {
                Ok(response) => response,
                Err(err) => {
                    error!("LoadRosterCommand: request failed: {err}");
                    updater.set(RosterFetchCompute {
                        result: RosterFetchResult::Error(err.to_string()),
                    });
                    return;
                }
            };

            if !response.is_success() {
                let message = format!("roster endpoint returned status {}", response.status);
                error!("LoadRosterCommand: {message}");
                updater.set(RosterFetchCompute {
                    result: RosterFetchResult::Error(message),
                });
                return;
            }

            match response.json::<Vec<MemberRecord>>() {
                Ok(records) => {
                    info!("LoadRosterCommand: fetched {} records", records.len());
                    updater.set(RosterFetchCompute {
                        result: RosterFetchResult::Loaded(records),
                    });
                }
                Err(err) => {
                    error!("LoadRosterCommand: failed to parse the roster body: {err}");
                    updater.set(RosterFetchCompute {
                        result: RosterFetchResult::Error(format!("parse error: {err}")),
                    });
                }
            }
        })
    }
}
