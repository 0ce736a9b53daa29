use crate::app::state::App;
use crossterm::event::KeyCode;

pub async fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            if app.is_filtered() {
                app.clear_search();
            } else {
                app.running = false;
            }
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('m') => app.next_mode(),
        KeyCode::Char('1') => app.set_mode(crate::ViewMode::Cluster),
        KeyCode::Char('2') => app.set_mode(crate::ViewMode::Incubator),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_at_cursor(),
        KeyCode::Char('a') => app.select_all(),
        KeyCode::Char('c') => app.clear_selection(),
        KeyCode::Char('d') => app.reset_selection(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('e') => app.export_current().await,
        _ => {}
    }
}
