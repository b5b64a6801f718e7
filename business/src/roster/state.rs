//! In-memory state for the roster table.
//!
//! Single source of truth for:
//! - the full record set (mutated in place, never reordered)
//! - the active search filter (explicit tri-state)
//! - the selection set and per-row edit drafts, keyed by interned id
//! - the current page
//!
//! Every deletion funnels through one removal path, so the selection set,
//! edit drafts, and search matches can never reference a removed record.

use std::any::Any;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use roster_states::State;
use ustr::Ustr;

use crate::member::MemberRecord;
use crate::pager::Pager;

/// Search filter over the record set.
///
/// `NoMatches` is distinct from `Inactive`: a search that matched nothing
/// renders an empty table instead of falling back to the paginated view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchFilter {
    /// No search active; the paginated window is visible.
    #[default]
    Inactive,
    /// Ids of the records matching the last query, in record order.
    Matches(Vec<Ustr>),
    /// The last query matched nothing.
    NoMatches,
}

/// Buffered edit for one record. Present only while the row is in edit
/// mode; applied to the record on commit, dropped on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub role: String,
}

/// Fields exposed for inline editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Role,
}

/// State for the roster table, stored in `StateCtx` and accessed via
/// `state_mut::<RosterState>()`.
#[derive(Debug)]
pub struct RosterState {
    records: Vec<MemberRecord>,
    search: SearchFilter,
    selected: HashSet<Ustr>,
    drafts: HashMap<Ustr, EditDraft>,
    page: usize,
    pager: Pager,
    loaded_at: Option<DateTime<Utc>>,
}

impl State for RosterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RosterState {
    pub fn new(pager: Pager) -> Self {
        Self {
            records: Vec::new(),
            search: SearchFilter::Inactive,
            selected: HashSet::new(),
            drafts: HashMap::new(),
            page: 1,
            pager,
            loaded_at: None,
        }
    }

    /// Installs the fetched record set. Resets the page and clears all
    /// derived state; `now` comes from the `Time` state for mockability.
    pub fn install(&mut self, records: Vec<MemberRecord>, now: DateTime<Utc>) {
        self.records = records;
        self.search = SearchFilter::Inactive;
        self.selected.clear();
        self.drafts.clear();
        self.page = 1;
        self.loaded_at = Some(now);
    }

    // =====================
    // Search
    // =====================

    /// Recomputes the filter from the live records: case-insensitive
    /// substring match on any of name/email/role. An empty query clears the
    /// filter; a query matching nothing yields `NoMatches`.
    ///
    /// Callers must not invoke this per keystroke; keystrokes go through
    /// [`SearchDebounce`](crate::SearchDebounce).
    pub fn run_search(&mut self, query: &str) {
        if query.is_empty() {
            self.search = SearchFilter::Inactive;
            return;
        }
        let needle = query.to_lowercase();
        let matches: Vec<Ustr> = self
            .records
            .iter()
            .filter(|record| record.matches(&needle))
            .map(MemberRecord::uid)
            .collect();
        self.search = if matches.is_empty() {
            SearchFilter::NoMatches
        } else {
            SearchFilter::Matches(matches)
        };
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn is_searching(&self) -> bool {
        !matches!(self.search, SearchFilter::Inactive)
    }

    // =====================
    // Selection
    // =====================

    /// Adds the id to the selection if absent, removes it if present.
    /// No-op for ids not in the record set.
    pub fn toggle_select(&mut self, id: Ustr) {
        if self.record(id).is_none() {
            return;
        }
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: Ustr) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    // =====================
    // Deletion
    // =====================

    /// Removes every selected record and clears the selection. No-op when
    /// the selection is empty.
    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let ids = std::mem::take(&mut self.selected);
        self.remove_ids(&ids);
    }

    /// Removes the record with that id, if present.
    pub fn delete_one(&mut self, id: Ustr) {
        self.remove_ids(&HashSet::from([id]));
    }

    /// The single removal path: drops the records and prunes every id-keyed
    /// structure, then re-clamps the current page to the shrunken set.
    fn remove_ids(&mut self, ids: &HashSet<Ustr>) {
        self.records.retain(|record| !ids.contains(&record.uid()));
        self.selected.retain(|id| !ids.contains(id));
        self.drafts.retain(|id, _| !ids.contains(id));
        if let SearchFilter::Matches(matches) = &mut self.search {
            matches.retain(|id| !ids.contains(id));
            if matches.is_empty() {
                self.search = SearchFilter::NoMatches;
            }
        }
        self.page = self.page.min(self.total_pages().max(1));
    }

    // =====================
    // Inline editing
    // =====================

    /// Opens an edit draft seeded from the record's current role. No effect
    /// if the id is unknown or the row is already editing.
    pub fn begin_edit(&mut self, id: Ustr) {
        let Some(record) = self.record(id) else {
            return;
        };
        let role = record.role.clone();
        self.drafts.entry(id).or_insert(EditDraft { role });
    }

    /// Writes `value` into the draft. The record itself is untouched until
    /// commit. Safe no-op when the row is not editing.
    pub fn update_field(&mut self, id: Ustr, field: EditField, value: &str) {
        let Some(draft) = self.drafts.get_mut(&id) else {
            return;
        };
        match field {
            EditField::Role => draft.role = value.to_owned(),
        }
    }

    /// Applies the draft to the record and exits edit mode.
    pub fn commit_edit(&mut self, id: Ustr) {
        let Some(draft) = self.drafts.remove(&id) else {
            return;
        };
        if let Some(record) = self.record_mut(id) {
            record.role = draft.role;
        }
    }

    /// Discards the draft and exits edit mode; the record keeps its
    /// pre-edit value.
    pub fn cancel_edit(&mut self, id: Ustr) {
        self.drafts.remove(&id);
    }

    pub fn is_editing(&self, id: Ustr) -> bool {
        self.drafts.contains_key(&id)
    }

    pub fn draft(&self, id: Ustr) -> Option<&EditDraft> {
        self.drafts.get(&id)
    }

    // =====================
    // Pagination
    // =====================

    /// Moves to `requested` if it is a reachable page; out-of-range
    /// requests are rejected with no state change.
    pub fn set_page(&mut self, requested: usize) -> bool {
        if !Pager::accepts(requested, self.total_pages()) {
            return false;
        }
        self.page = requested;
        true
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.records.len())
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    // =====================
    // Views
    // =====================

    /// The rows the table shows right now: the paginated window when no
    /// search is active, up to one page's worth of matches while one is
    /// (capped, not paged), and nothing when the search matched nothing.
    pub fn visible(&self) -> Vec<&MemberRecord> {
        match &self.search {
            SearchFilter::Inactive => self.pager.window(&self.records, self.page).iter().collect(),
            SearchFilter::NoMatches => Vec::new(),
            SearchFilter::Matches(ids) => ids
                .iter()
                .take(self.pager.page_size())
                .filter_map(|id| self.record(*id))
                .collect(),
        }
    }

    pub fn records(&self) -> &[MemberRecord] {
        &self.records
    }

    pub fn record(&self, id: Ustr) -> Option<&MemberRecord> {
        self.records.iter().find(|record| record.id == id.as_str())
    }

    fn record_mut(&mut self, id: Ustr) -> Option<&mut MemberRecord> {
        self.records
            .iter_mut()
            .find(|record| record.id == id.as_str())
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, name: &str, email: &str, role: &str) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
        }
    }

    /// `n` generated members with roles cycling member/admin/manager.
    fn members(n: usize) -> Vec<MemberRecord> {
        (1..=n)
            .map(|i| {
                let role = match i % 3 {
                    0 => "manager",
                    1 => "member",
                    _ => "admin",
                };
                record(
                    i,
                    &format!("Member {i:02}"),
                    &format!("member{i:02}@mailinator.com"),
                    role,
                )
            })
            .collect()
    }

    fn state_with(records: Vec<MemberRecord>) -> RosterState {
        let mut state = RosterState::new(Pager::new(10));
        state.install(records, Utc::now());
        state
    }

    fn uid(id: usize) -> Ustr {
        Ustr::from(id.to_string().as_str())
    }

    #[test]
    fn install_resets_derived_state() {
        let mut state = state_with(members(5));
        state.toggle_select(uid(1));
        state.begin_edit(uid(2));
        state.run_search("member");

        state.install(members(3), Utc::now());

        assert_eq!(state.total(), 3);
        assert_eq!(state.page(), 1);
        assert!(!state.has_selection());
        assert!(!state.is_editing(uid(2)));
        assert_eq!(state.search(), &SearchFilter::Inactive);
        assert!(state.is_loaded());
    }

    #[test]
    fn toggle_select_twice_restores_the_selection() {
        let mut state = state_with(members(5));

        state.toggle_select(uid(3));
        assert!(state.is_selected(uid(3)));

        state.toggle_select(uid(3));
        assert!(!state.is_selected(uid(3)));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn toggle_select_unknown_id_is_a_noop() {
        let mut state = state_with(members(5));

        state.toggle_select(Ustr::from("999"));

        assert!(!state.has_selection());
    }

    #[test]
    fn delete_one_prunes_selection_and_drafts() {
        let mut state = state_with(members(5));
        state.toggle_select(uid(2));
        state.begin_edit(uid(2));

        state.delete_one(uid(2));

        assert!(state.record(uid(2)).is_none());
        assert!(!state.is_selected(uid(2)));
        assert!(!state.is_editing(uid(2)));
        assert_eq!(state.total(), 4);
    }

    #[test]
    fn delete_one_unknown_id_is_a_noop() {
        let mut state = state_with(members(5));

        state.delete_one(Ustr::from("999"));

        assert_eq!(state.total(), 5);
    }

    #[test]
    fn delete_selected_removes_records_and_clears_the_selection() {
        let mut state = state_with(members(25));
        state.toggle_select(uid(5));
        state.toggle_select(uid(7));

        state.delete_selected();

        assert_eq!(state.total(), 23);
        assert!(state.record(uid(5)).is_none());
        assert!(state.record(uid(7)).is_none());
        assert!(!state.has_selection());

        // Page window recomputed against the shorter set.
        let visible = state.visible();
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[0].id, "1");
        assert!(visible.iter().all(|r| r.id != "5" && r.id != "7"));
    }

    #[test]
    fn delete_selected_with_empty_selection_is_a_noop() {
        let mut state = state_with(members(5));

        state.delete_selected();

        assert_eq!(state.total(), 5);
    }

    #[test]
    fn deletion_reclamps_the_current_page() {
        let mut state = state_with(members(21));
        assert!(state.set_page(3)); // page 3 holds only record 21

        state.delete_one(uid(21));

        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut state = state_with(vec![
            record(1, "Aaron Miles", "aaron@mailinator.com", "member"),
            record(2, "Alice", "ALICE@x.com", "admin"),
            record(3, "Bob", "bob@mailinator.com", "manager"),
        ]);

        state.run_search("alice");

        assert_eq!(
            state.search(),
            &SearchFilter::Matches(vec![Ustr::from("2")])
        );
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Alice");
    }

    #[test]
    fn search_matches_on_role() {
        let mut state = state_with(members(25));

        state.run_search("MANAGER");

        let visible = state.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.role == "manager"));
    }

    #[test]
    fn search_with_no_matches_shows_an_empty_table() {
        let mut state = state_with(members(25));

        state.run_search("does-not-exist");

        assert_eq!(state.search(), &SearchFilter::NoMatches);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn clearing_the_search_reverts_to_the_page_window() {
        let mut state = state_with(members(25));
        state.run_search("manager");
        assert!(state.is_searching());

        state.run_search("");

        assert_eq!(state.search(), &SearchFilter::Inactive);
        let visible = state.visible();
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn search_results_are_capped_to_one_page() {
        let mut state = state_with(members(25));

        state.run_search("member"); // matches every name

        assert_eq!(state.visible().len(), 10);
    }

    #[test]
    fn deleting_the_last_match_collapses_to_no_matches() {
        let mut state = state_with(vec![
            record(1, "Aaron", "aaron@mailinator.com", "member"),
            record(2, "Alice", "alice@x.com", "admin"),
        ]);
        state.run_search("alice");

        state.delete_one(uid(2));

        assert_eq!(state.search(), &SearchFilter::NoMatches);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn search_filters_the_live_records_at_fire_time() {
        let mut state = state_with(members(25));
        // A delete lands between keystrokes; the search that fires afterwards
        // must not resurrect the record.
        state.delete_one(uid(1));

        state.run_search("member 01");

        assert_eq!(state.search(), &SearchFilter::NoMatches);
    }

    #[test]
    fn edits_are_buffered_until_commit() {
        let mut state = state_with(members(5));
        state.begin_edit(uid(1));
        assert!(state.is_editing(uid(1)));

        state.update_field(uid(1), EditField::Role, "owner");

        assert_eq!(state.record(uid(1)).unwrap().role, "member");
        assert_eq!(state.draft(uid(1)).unwrap().role, "owner");

        state.commit_edit(uid(1));

        assert_eq!(state.record(uid(1)).unwrap().role, "owner");
        assert!(!state.is_editing(uid(1)));
    }

    #[test]
    fn cancel_edit_discards_the_draft() {
        let mut state = state_with(members(5));
        state.begin_edit(uid(1));
        state.update_field(uid(1), EditField::Role, "owner");

        state.cancel_edit(uid(1));

        assert_eq!(state.record(uid(1)).unwrap().role, "member");
        assert!(!state.is_editing(uid(1)));
    }

    #[test]
    fn begin_edit_seeds_the_draft_from_the_record() {
        let mut state = state_with(members(5));

        state.begin_edit(uid(2));

        assert_eq!(state.draft(uid(2)).unwrap().role, "admin");
    }

    #[test]
    fn edit_operations_on_unknown_ids_are_noops() {
        let mut state = state_with(members(5));

        state.begin_edit(Ustr::from("999"));
        state.update_field(Ustr::from("999"), EditField::Role, "owner");
        state.commit_edit(Ustr::from("999"));
        state.cancel_edit(Ustr::from("999"));

        assert!(state.draft(Ustr::from("999")).is_none());
    }

    #[test]
    fn update_field_without_begin_edit_is_a_noop() {
        let mut state = state_with(members(5));

        state.update_field(uid(1), EditField::Role, "owner");

        assert_eq!(state.record(uid(1)).unwrap().role, "member");
    }

    #[test]
    fn pages_follow_the_pager_window() {
        let mut state = state_with(members(25));

        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible().len(), 10);

        assert!(state.set_page(3));
        let visible = state.visible();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "21");
        assert_eq!(visible[4].id, "25");
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut state = state_with(members(25));
        assert!(state.set_page(2));

        assert!(!state.set_page(0));
        assert!(!state.set_page(4));

        assert_eq!(state.page(), 2);
    }
}
