//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::AppTab;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Tab navigation
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    // ========================
    // Counter
    // ========================

    pub fn increment_counter(&mut self) {
        self.counter.increment();
    }

    // ========================
    // Fetching
    // ========================

    /// Start a user fetch; `None` while one is already outstanding
    pub fn load_users(&mut self) -> Option<NetworkCommand> {
        if self.user_view.loading {
            return None;
        }
        let id = self.next_id();
        self.user_view.begin_load(id);
        Some(NetworkCommand::FetchUsers { id })
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        self.user_view.complete_load(response);
    }

    // ========================
    // City filter
    // Inert until users are shown, like the filter control itself
    // ========================

    pub fn next_city(&mut self) {
        if !self.user_view.users.is_empty() {
            self.user_view.next_city_option(&self.cities);
        }
    }

    pub fn prev_city(&mut self) {
        if !self.user_view.users.is_empty() {
            self.user_view.prev_city_option(&self.cities);
        }
    }

    pub fn reset_filter(&mut self) {
        if !self.user_view.users.is_empty() {
            self.user_view.reset_filter();
        }
    }

    // ========================
    // Table navigation
    // ========================

    pub fn next_row(&mut self) {
        self.user_view.next_row();
    }

    pub fn prev_row(&mut self) {
        self.user_view.prev_row();
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppState;
    use crate::messages::ui_events::AppTab;
    use crate::messages::{NetworkCommand, NetworkResponse};
    use crate::models::fixtures::three_users;

    #[test]
    fn test_load_issues_one_command_at_a_time() {
        let mut state = AppState::default();
        assert_eq!(state.load_users(), Some(NetworkCommand::FetchUsers { id: 1 }));
        assert_eq!(state.load_users(), None);

        state.handle_response(NetworkResponse::Users { id: 1, users: three_users(), time_ms: 3 });
        assert_eq!(state.load_users(), Some(NetworkCommand::FetchUsers { id: 2 }));
    }

    #[test]
    fn test_counter_and_tabs() {
        let mut state = AppState::default();
        assert_eq!(state.active_tab, AppTab::Counter);
        state.increment_counter();
        state.increment_counter();
        assert_eq!(state.to_render_state().counter.count(), 2);

        state.next_tab();
        assert_eq!(state.active_tab, AppTab::Users);
        state.switch_tab(AppTab::Counter);
        assert_eq!(state.active_tab, AppTab::Counter);
    }

    fn with_users() -> AppState {
        let mut state = AppState::default();
        state.load_users();
        state.handle_response(NetworkResponse::Users { id: 1, users: three_users(), time_ms: 3 });
        state
    }

    #[test]
    fn test_city_cycling_uses_configured_cities() {
        let mut state = with_users();
        state.next_city();
        assert_eq!(state.user_view.selected_city.as_deref(), Some("Moscow"));
        state.prev_city();
        state.prev_city();
        assert_eq!(state.user_view.selected_city.as_deref(), Some("London"));
        state.reset_filter();
        assert_eq!(state.user_view.selected_city, None);
    }

    #[test]
    fn test_filter_keys_ignored_before_users_loaded() {
        let mut state = AppState::default();
        state.next_city();
        state.prev_city();
        assert_eq!(state.user_view.selected_city, None);

        // A failed load leaves the table hidden, so the filter stays inert
        state.load_users();
        state.handle_response(NetworkResponse::Error { id: 1, message: "down".into(), time_ms: 0 });
        state.next_city();
        assert_eq!(state.user_view.selected_city, None);

        state.load_users();
        state.handle_response(NetworkResponse::Users { id: 2, users: three_users(), time_ms: 1 });
        assert_eq!(state.to_render_state().visible_users().len(), 3);
        state.next_city();
        assert_eq!(state.user_view.selected_city.as_deref(), Some("Moscow"));
    }

    #[test]
    fn test_render_state_reflects_filter() {
        let mut state = AppState::default();
        state.load_users();
        state.handle_response(NetworkResponse::Users { id: 1, users: three_users(), time_ms: 3 });
        state.user_view.set_city_filter(Some("London"));

        let render = state.to_render_state();
        assert!(render.filter_active());
        assert_eq!(render.users.len(), 3);
        let visible: Vec<&str> = render.visible_users().into_iter().map(|u| u.name.as_str()).collect();
        assert_eq!(visible, vec!["John Doe"]);
    }
}
