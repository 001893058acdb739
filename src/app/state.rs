//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::messages::ui_events::AppTab;
use crate::messages::{NetworkResponse, RenderState};
use crate::models::{filter_by_city, Counter, User};

/// State of the user table: fetched users, fetch status and city filter
#[derive(Clone, Debug, Default)]
pub struct UserFetchView {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_city: Option<String>,

    /// Request id of the outstanding fetch
    pub pending_fetch: Option<u64>,
    pub loaded_at: Option<DateTime<Local>>,
    pub last_fetch_ms: u64,
    pub selected_row: usize,
}

impl UserFetchView {
    pub fn new() -> Self {
        UserFetchView::default()
    }

    /// Start fetch `id`. Returns false, changing nothing, while another
    /// fetch is outstanding.
    pub fn begin_load(&mut self, id: u64) -> bool {
        if self.loading {
            tracing::debug!(id, pending = ?self.pending_fetch, "Fetch already in flight, ignoring");
            return false;
        }
        self.loading = true;
        self.error = None;
        self.pending_fetch = Some(id);
        true
    }

    /// Apply the terminal outcome of a fetch. Outcomes for anything but
    /// the pending id are dropped.
    pub fn complete_load(&mut self, response: NetworkResponse) {
        if self.pending_fetch != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale fetch result");
            return;
        }

        match response {
            NetworkResponse::Users { users, time_ms, .. } => {
                self.users = users;
                self.loaded_at = Some(Local::now());
                self.last_fetch_ms = time_ms;
                self.selected_row = 0;
            }
            NetworkResponse::Error { message, .. } => {
                self.error = Some(message);
            }
        }

        self.loading = false;
        self.pending_fetch = None;
    }

    /// Set the city filter; `None` or an empty string clears it
    pub fn set_city_filter(&mut self, city: Option<&str>) {
        self.selected_city = city.filter(|c| !c.is_empty()).map(str::to_string);
        self.selected_row = 0;
    }

    pub fn reset_filter(&mut self) {
        self.set_city_filter(None);
    }

    /// Users matching the current filter, in fetch order
    pub fn visible_users(&self) -> Vec<&User> {
        filter_by_city(&self.users, self.selected_city.as_deref()).collect()
    }

    /// Move the filter to the next option of `[All, cities...]`
    pub fn next_city_option(&mut self, cities: &[String]) {
        let len = cities.len() + 1;
        let next = (self.city_option_index(cities) + 1) % len;
        self.select_city_option(cities, next);
    }

    /// Move the filter to the previous option of `[All, cities...]`
    pub fn prev_city_option(&mut self, cities: &[String]) {
        let len = cities.len() + 1;
        let prev = (self.city_option_index(cities) + len - 1) % len;
        self.select_city_option(cities, prev);
    }

    /// 0 is `All`; a city outside the list also maps to 0
    fn city_option_index(&self, cities: &[String]) -> usize {
        self.selected_city
            .as_ref()
            .and_then(|selected| cities.iter().position(|c| c == selected))
            .map_or(0, |i| i + 1)
    }

    fn select_city_option(&mut self, cities: &[String], index: usize) {
        match index.checked_sub(1).and_then(|i| cities.get(i)) {
            Some(city) => self.set_city_filter(Some(city.as_str())),
            None => self.reset_filter(),
        }
    }

    pub fn next_row(&mut self) {
        let len = self.visible_users().len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1) % len;
        }
    }

    pub fn prev_row(&mut self) {
        let len = self.visible_users().len();
        if len > 0 {
            self.selected_row = self.selected_row.checked_sub(1).unwrap_or(len - 1);
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Tab navigation
    pub active_tab: AppTab,

    pub counter: Counter,
    pub user_view: UserFetchView,

    /// Cities offered by the filter control
    pub cities: Vec<String>,
    pub next_request_id: u64,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            active_tab: AppTab::Counter,
            counter: Counter::new(),
            user_view: UserFetchView::new(),
            cities: config.cities.clone(),
            next_request_id: 1,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let view = &self.user_view;
        RenderState {
            active_tab: self.active_tab,
            counter: self.counter,
            users: view.users.clone(),
            loading: view.loading,
            error: view.error.clone(),
            selected_city: view.selected_city.clone(),
            cities: self.cities.clone(),
            selected_row: view.selected_row,
            loaded_at: view.loaded_at,
            last_fetch_ms: view.last_fetch_ms,
            show_help: self.show_help,
        }
    }
}
