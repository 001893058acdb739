//! Terminal drawing - turns a `RenderState` snapshot into widgets

use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;

/// Label of the "no filter" option
pub const ALL_CITIES: &str = "All cities";

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let selected = match state.active_tab {
        AppTab::Counter => 0,
        AppTab::Users => 1,
    };
    f.render_widget(render_tabs(&[" 1:Counter ", " 2:Users "], selected), main_chunks[0]);

    match state.active_tab {
        AppTab::Counter => draw_counter_tab(f, state, main_chunks[1]),
        AppTab::Users => draw_users_tab(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .divider(" ")
}

fn draw_counter_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let button_area = centered_rect(30, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Counter ")
        .title_bottom(Line::from(" Space/Enter/+ ").right_aligned());

    let label = Paragraph::new(state.counter.label())
        .alignment(Alignment::Center)
        .style(Style::default().bold())
        .block(block);
    f.render_widget(label, button_area);
}

fn draw_users_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let has_users = !state.users.is_empty();

    let mut constraints = vec![Constraint::Length(3)]; // Load button
    if state.error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    if has_users {
        constraints.push(Constraint::Length(1)); // Filter
        constraints.push(Constraint::Min(3)); // Table
    } else {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;
    let mut take = || {
        let rect = chunks[next];
        next += 1;
        rect
    };

    draw_load_button(f, state, take());

    if let Some(error) = &state.error {
        let line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        f.render_widget(line, take());
    }

    if has_users {
        draw_city_filter(f, state, take());
        draw_user_table(f, state, take());
    }
}

fn draw_load_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let (label, style) = if state.loading {
        ("Loading...", Style::default().fg(Color::DarkGray))
    } else {
        ("Load users", Style::default().fg(Color::Green).bold())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(" l/Enter ");

    let button = Paragraph::new(label).style(style).block(block);
    f.render_widget(button, area);
}

fn draw_city_filter(f: &mut Frame, state: &RenderState, area: Rect) {
    let selected = state.selected_city.as_deref();

    let mut spans = vec![Span::raw("City filter: ")];
    let options = std::iter::once(None).chain(state.cities.iter().map(|c| Some(c.as_str())));
    for (i, option) in options.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if option == selected {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default()
        };
        spans.push(Span::styled(option.unwrap_or(ALL_CITIES).to_string(), style));
    }

    if state.filter_active() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[r] Reset filter", Style::default().fg(Color::Cyan)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_user_table(f: &mut Frame, state: &RenderState, area: Rect) {
    let visible = state.visible_users();

    let header = Row::new(vec!["Name", "Email", "Phone", "Website"])
        .style(Style::default().fg(Color::Yellow).bold());

    let rows: Vec<Row> = visible
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(user.phone.clone()),
                Cell::from(Span::styled(
                    user.website.clone(),
                    Style::default().fg(Color::Blue).underlined(),
                )),
            ])
        })
        .collect();

    let link = visible
        .get(state.selected_row)
        .map(|user| format!(" {} ", user.website_url()))
        .unwrap_or_default();

    let title = match &state.selected_city {
        Some(city) => format!(" Users in {} ({}/{}) ", city, visible.len(), state.users.len()),
        None => format!(" Users ({}) ", state.users.len()),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(link).right_aligned()),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut table_state = TableState::default();
    if !visible.is_empty() {
        table_state.select(Some(state.selected_row));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.active_tab {
        AppTab::Counter => " Space:increment | Tab:switch | ?:help | q:quit ",
        AppTab::Users => " l:load | ←/→:city | r:reset | ↑/↓:row | ?:help | q:quit ",
    };

    let status = if state.loading {
        format!("{}| Loading... ", hints)
    } else if let Some(at) = state.loaded_at {
        format!(
            "{}| Loaded {} users at {} ({}ms) ",
            hints,
            state.users.len(),
            at.format("%H:%M:%S"),
            state.last_fetch_ms
        )
    } else {
        String::from(hints)
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 USER TABLE - Keyboard Shortcuts

 GENERAL
   1 / 2 / Tab        Switch tab
   ?                  Toggle this help
   q / Ctrl+C         Quit

 COUNTER
   Space / Enter / +  Increment

 USERS
   l / Enter          Load users
   ← / →              Previous / next city
   r                  Clear city filter
   ↑ / ↓              Move row highlight

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::messages::NetworkResponse;
    use crate::models::fixtures::{three_users, user};
    use crate::models::User;
    use ratatui::backend::TestBackend;

    /// Draw `state` and return the screen as text, one line per row
    fn screen(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn users_tab(users: Vec<User>) -> AppState {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Users);
        if let Some(crate::messages::NetworkCommand::FetchUsers { id }) = state.load_users() {
            state.handle_response(NetworkResponse::Users { id, users, time_ms: 12 });
        }
        state
    }

    #[test]
    fn test_counter_label() {
        let mut state = AppState::default();
        assert!(screen(&state.to_render_state()).contains("count is 0"));

        state.increment_counter();
        assert!(screen(&state.to_render_state()).contains("count is 1"));
    }

    #[test]
    fn test_initial_users_tab_has_button_only() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Users);
        let text = screen(&state.to_render_state());

        assert!(text.contains("Load users"));
        assert!(!text.contains("City filter"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_loading_label() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Users);
        state.load_users();
        let text = screen(&state.to_render_state());

        assert!(text.contains("Loading..."));
        assert!(!text.contains("Load users"));
    }

    #[test]
    fn test_status_bar_keeps_hints_while_loading() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Users);
        state.load_users();
        let text = screen(&state.to_render_state());
        let status = text.lines().last().unwrap();

        assert!(status.contains("l:load"));
        assert!(status.contains("q:quit"));
        assert!(status.contains("| Loading..."));
    }

    #[test]
    fn test_loaded_user_is_rendered() {
        let state = users_tab(vec![user(1, "Ivan Ivanov", "Moscow")]);
        let text = screen(&state.to_render_state());

        assert!(text.contains("Ivan Ivanov"));
        assert!(text.contains("ivan@example.com"));
        assert!(text.contains("City filter"));
        assert!(text.contains("http://ivan.com"));
        assert!(text.contains("Loaded 1 users"));
        assert!(!text.contains("Reset filter"));
    }

    #[test]
    fn test_error_is_rendered() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Users);
        if let Some(crate::messages::NetworkCommand::FetchUsers { id }) = state.load_users() {
            state.handle_response(NetworkResponse::Error {
                id,
                message: "Network error".into(),
                time_ms: 0,
            });
        }
        let text = screen(&state.to_render_state());

        assert!(text.contains("Network error"));
        assert!(text.contains("Load users"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_filtering_changes_rows() {
        let mut state = users_tab(three_users());

        let text = screen(&state.to_render_state());
        assert!(text.contains("Ivan Ivanov") && text.contains("John Doe") && text.contains("Jane Smith"));

        state.user_view.set_city_filter(Some("Moscow"));
        let text = screen(&state.to_render_state());
        assert!(text.contains("Ivan Ivanov") && text.contains("Jane Smith"));
        assert!(!text.contains("John Doe"));
        assert!(text.contains("Reset filter"));

        state.user_view.set_city_filter(Some("London"));
        let text = screen(&state.to_render_state());
        assert!(text.contains("John Doe"));
        assert!(!text.contains("Ivan Ivanov") && !text.contains("Jane Smith"));

        state.reset_filter();
        let text = screen(&state.to_render_state());
        assert!(text.contains("Ivan Ivanov") && text.contains("John Doe") && text.contains("Jane Smith"));
        assert!(!text.contains("Reset filter"));
    }

    #[test]
    fn test_city_options_are_static() {
        let state = users_tab(vec![user(1, "Ivan Ivanov", "Moscow")]);
        let text = screen(&state.to_render_state());
        for option in [ALL_CITIES, "Moscow", "Kulm", "London"] {
            assert!(text.contains(option), "missing option {}", option);
        }
    }

    #[test]
    fn test_help_popup() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(screen(&state.to_render_state()).contains("Keyboard Shortcuts"));
    }
}
