use crate::app::actions::export_figure;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::domain::ViewMode;
use crate::error::RadarResult;
use crate::figure::{build_figure, Figure};
use crate::view::{Dashboard, View};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub mode: ViewMode,
    /// Picked names per view, in the order they were picked.
    selections: [Vec<String>; 2],
    cursors: [usize; 2],
    pub search_active: bool,
    pub search_query: String,
    /// Dataset indices matching the current filter; `None` when unfiltered.
    filtered_indices: Option<Vec<usize>>,
    pub show_help: bool,
    pub status_message: String,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(dashboard: Dashboard, export_dir: PathBuf) -> Self {
        let selections = ViewMode::ALL.map(|mode| dashboard.view(mode).default_selection());
        Self {
            running: true,
            dashboard,
            mode: ViewMode::Cluster,
            selections,
            cursors: [0, 0],
            search_active: false,
            search_query: String::new(),
            filtered_indices: None,
            show_help: false,
            status_message: String::new(),
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            export_dir,
        }
    }

    pub const fn view(&self) -> &View {
        self.dashboard.view(self.mode)
    }

    pub fn selection(&self) -> &[String] {
        &self.selections[self.mode.index()]
    }

    pub const fn cursor(&self) -> usize {
        self.cursors[self.mode.index()]
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection().iter().any(|selected| selected == name)
    }

    /// Dataset indices shown in the entity list.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.filtered_indices
            .clone()
            .unwrap_or_else(|| (0..self.view().dataset.entities().len()).collect())
    }

    pub fn visible_names(&self) -> Vec<&str> {
        let names = self.view().dataset.names();
        self.visible_indices()
            .into_iter()
            .filter_map(|index| names.get(index).copied())
            .collect()
    }

    pub fn cursor_name(&self) -> Option<String> {
        self.visible_names()
            .get(self.cursor())
            .map(|name| (*name).to_string())
    }

    pub fn figure(&self) -> RadarResult<Figure> {
        build_figure(self.view(), self.selection())
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.clear_search();
        self.status_message.clear();
        tracing::debug!(%mode, "switched view");
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn move_cursor_up(&mut self) {
        let len = self.visible_indices().len();
        let index = self.mode.index();
        self.cursors[index] = wrap_decrement(self.cursors[index], len);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible_indices().len();
        let index = self.mode.index();
        self.cursors[index] = wrap_increment(self.cursors[index], len);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursors[self.mode.index()] = 0;
    }

    pub fn move_cursor_end(&mut self) {
        let len = self.visible_indices().len();
        self.cursors[self.mode.index()] = len.saturating_sub(1);
    }

    /// Adds the entity under the cursor to the selection, or removes it.
    pub fn toggle_at_cursor(&mut self) {
        let Some(name) = self.cursor_name() else {
            return;
        };
        let selection = &mut self.selections[self.mode.index()];
        if let Some(position) = selection.iter().position(|selected| *selected == name) {
            selection.remove(position);
            self.status_message = format!("Removed {name}");
        } else {
            selection.push(name.clone());
            self.status_message = format!("Added {name}");
        }
    }

    pub fn select_all(&mut self) {
        let names: Vec<String> = self
            .view()
            .dataset
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let selection = &mut self.selections[self.mode.index()];
        for name in names {
            if !selection.contains(&name) {
                selection.push(name);
            }
        }
        self.status_message = "Selected all".to_string();
    }

    pub fn clear_selection(&mut self) {
        self.selections[self.mode.index()].clear();
        self.status_message = "Selection cleared".to_string();
    }

    pub fn reset_selection(&mut self) {
        self.selections[self.mode.index()] = self.view().default_selection();
        self.status_message = "Selection reset to defaults".to_string();
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_query.clear();
        self.apply_search();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.apply_search();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.apply_search();
    }

    /// Stops typing but keeps the current filter.
    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.filtered_indices = None;
        self.cursors[self.mode.index()] = 0;
    }

    pub const fn is_filtered(&self) -> bool {
        self.filtered_indices.is_some()
    }

    fn apply_search(&mut self) {
        let query = self.search_query.trim();
        let matches = if query.is_empty() {
            None
        } else {
            let matcher = SkimMatcherV2::default();
            let names = self.view().dataset.names();
            let indices: Vec<usize> = names
                .iter()
                .enumerate()
                .filter(|(_, name)| matcher.fuzzy_match(name, query).is_some())
                .map(|(index, _)| index)
                .collect();
            Some(indices)
        };
        self.filtered_indices = matches;
        self.cursors[self.mode.index()] = 0;
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
        self.status_message = if self.animation_paused {
            "Animation paused".to_string()
        } else {
            "Animation resumed".to_string()
        };
    }

    /// Writes the figure currently on screen to the export directory.
    pub async fn export_current(&mut self) {
        let figure = match self.figure() {
            Ok(figure) => figure,
            Err(e) => {
                self.status_message = format!("Error: {e}");
                return;
            }
        };
        if figure.is_empty() {
            self.status_message = "Nothing selected to export".to_string();
            return;
        }

        match export_figure(&figure, self.mode, &self.export_dir).await {
            Ok(path) => {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown");
                self.status_message = format!("Figure exported: {filename}");
            }
            Err(e) => {
                tracing::warn!(error = %e, "figure export failed");
                self.status_message = format!("Error: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetConfig;

    fn app() -> Result<App, Box<dyn std::error::Error>> {
        let dashboard = Dashboard::new(DatasetConfig::builtin()?);
        Ok(App::new(dashboard, std::env::temp_dir()))
    }

    #[test]
    fn test_starts_with_default_selections() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        assert_eq!(app.mode, ViewMode::Cluster);
        assert_eq!(app.selection(), ["Corporate-Backed", "Public/Academic-Funded"]);

        app.set_mode(ViewMode::Incubator);
        assert_eq!(app.selection(), ["Bayer Co.Lab"]);
        Ok(())
    }

    #[test]
    fn test_toggle_appends_in_pick_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.clear_selection();

        app.move_cursor_end();
        app.toggle_at_cursor();
        app.move_cursor_home();
        app.toggle_at_cursor();
        assert_eq!(app.selection(), ["Bayer Co.Lab Berlin", "Corporate-Backed"]);

        app.toggle_at_cursor();
        assert_eq!(app.selection(), ["Bayer Co.Lab Berlin"]);
        assert_eq!(app.status_message, "Removed Corporate-Backed");

        let figure = app.figure()?;
        assert_eq!(figure.traces.len(), 1);
        assert_eq!(figure.traces[0].trace.name, "Bayer Co.Lab Berlin");
        Ok(())
    }

    #[test]
    fn test_mode_switch_keeps_each_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.select_all();
        assert_eq!(app.selection().len(), 7);

        app.next_mode();
        assert_eq!(app.mode, ViewMode::Incubator);
        app.clear_selection();
        assert!(app.selection().is_empty());

        app.next_mode();
        assert_eq!(app.selection().len(), 7);

        app.reset_selection();
        assert_eq!(app.selection().len(), 2);
        Ok(())
    }

    #[test]
    fn test_cursor_wraps() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.move_cursor_up();
        assert_eq!(app.cursor(), 6);
        app.move_cursor_down();
        assert_eq!(app.cursor(), 0);
        Ok(())
    }

    #[test]
    fn test_fuzzy_filter_narrows_list() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.set_mode(ViewMode::Incubator);
        app.start_search();
        for ch in "labs".chars() {
            app.push_search_char(ch);
        }

        let visible = app.visible_names();
        assert!(visible.contains(&"J Labs"));
        assert!(visible.contains(&"BioLabs"));
        assert!(!visible.contains(&"BaseLaunch"));
        assert!(app.is_filtered());

        app.finish_search();
        assert!(!app.search_active);
        assert!(app.is_filtered());

        app.clear_search();
        assert_eq!(app.visible_names().len(), 6);
        Ok(())
    }

    #[test]
    fn test_filter_without_matches_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.start_search();
        for ch in "zzzz".chars() {
            app.push_search_char(ch);
        }
        assert!(app.visible_names().is_empty());
        assert_eq!(app.cursor_name(), None);

        let before = app.selection().to_vec();
        app.toggle_at_cursor();
        assert_eq!(app.selection(), before.as_slice());
        Ok(())
    }

    #[tokio::test]
    async fn test_export_with_empty_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.clear_selection();
        app.export_current().await;
        assert_eq!(app.status_message, "Nothing selected to export");
        Ok(())
    }
}
