//! Domain logic for the roster admin table.
//!
//! UI code stays thin: state, pagination math, and the load pipeline live
//! here; rendering reads the state and dispatches the operations it exposes.

pub mod config;
pub mod http;
pub mod member;
pub mod pager;
pub mod roster;

pub use config::RosterConfig;
pub use member::MemberRecord;
pub use pager::{PageControl, Pager};
pub use roster::load::{LoadRosterCommand, RosterFetchCompute, RosterFetchResult};
pub use roster::search::{SEARCH_QUIET_PERIOD, SearchDebounce};
pub use roster::state::{EditDraft, EditField, RosterState, SearchFilter};
