//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::messages::ui_events::AppTab;
use crate::models::{filter_by_city, Counter, User};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Tab
    pub active_tab: AppTab,

    // Counter
    pub counter: Counter,

    // Users view
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_city: Option<String>,
    /// Options offered by the city filter, `All` excluded
    pub cities: Vec<String>,
    pub selected_row: usize,
    pub loaded_at: Option<DateTime<Local>>,
    pub last_fetch_ms: u64,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Rows of the table, derived from `users` and `selected_city`
    pub fn visible_users(&self) -> Vec<&User> {
        filter_by_city(&self.users, self.selected_city.as_deref()).collect()
    }

    pub fn filter_active(&self) -> bool {
        self.selected_city.is_some()
    }
}
