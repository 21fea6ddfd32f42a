//! Main TUI application.
//!
//! Handles:
//! - Input event handling
//! - Re-scoring on every interaction
//! - Drawing the single form screen

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::application::ArtifactStore;
use crate::config::AppConfig;
use crate::PredictorError;

use super::ui::{
    form::{render_form, ApplicantFormState},
    render_footer, render_header,
    result::{render_result, ResultState},
};

/// Ticks moved by PageUp/PageDown.
const COARSE_STEP: i32 = 10;

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    /// Loaded once; every evaluation reads the cached pair
    store: ArtifactStore,

    /// Fingerprints of the loaded artifacts, for the status line
    model_fingerprint: String,
    scaler_fingerprint: String,

    /// Form state
    form_state: ApplicantFormState,

    /// Outcome for the current form values
    result_state: ResultState,
}

impl App {
    /// Create a new application, loading artifacts from the configured paths.
    ///
    /// # Errors
    /// Returns the artifact error if either file is missing or unreadable.
    /// Callers treat this as fatal.
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        Self::with_store(ArtifactStore::new(config.artifact_paths()))
    }

    /// Create application around an existing store, loading it if needed.
    ///
    /// # Errors
    /// Returns error if the artifacts cannot be loaded.
    pub fn with_store(store: ArtifactStore) -> crate::Result<Self> {
        let artifacts = store.get_or_load()?;
        let model_fingerprint = artifacts.model_fingerprint.clone();
        let scaler_fingerprint = artifacts.scaler_fingerprint.clone();

        let mut app = Self {
            should_quit: false,
            store,
            model_fingerprint,
            scaler_fingerprint,
            form_state: ApplicantFormState::default(),
            result_state: ResultState::Error("Not evaluated yet".to_string()),
        };
        app.evaluate();
        Ok(app)
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the whole screen.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),  // Header
                Constraint::Length(12), // Form: four 3-row sliders per column
                Constraint::Length(6),  // Result
                Constraint::Min(0),
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        render_header(f, chunks[0]);
        render_form(f, chunks[1], &self.form_state);
        render_result(f, chunks[2], &self.result_state);
        render_footer(
            f,
            chunks[4],
            &self.model_fingerprint,
            &self.scaler_fingerprint,
        );
    }

    /// Apply one key press and re-score.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            // Raw mode swallows SIGINT, so Ctrl+C has to quit here.
            if matches!(key, KeyCode::Char('q') | KeyCode::Char('c')) {
                self.should_quit = true;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Up | KeyCode::BackTab => self.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form_state.next_field(),
            // Left/Right also flip the research toggle
            KeyCode::Left | KeyCode::Char('h') => self.form_state.step_selected(-1),
            KeyCode::Right | KeyCode::Char('l') => self.form_state.step_selected(1),
            KeyCode::PageDown => self.form_state.step_selected(-COARSE_STEP),
            KeyCode::PageUp => self.form_state.step_selected(COARSE_STEP),
            KeyCode::Home => self.form_state.selected_to_min(),
            KeyCode::End => self.form_state.selected_to_max(),
            KeyCode::Char(' ') => self.form_state.toggle_selected(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.form_state.reset(),
            _ => return,
        }

        self.evaluate();
    }

    /// Re-run the prediction for the current control values.
    fn evaluate(&mut self) {
        let features = self.form_state.to_features();

        let outcome = self
            .store
            .get_or_load()
            .map_err(PredictorError::from)
            .and_then(|artifacts| {
                artifacts
                    .prediction_service()
                    .predict(&features)
                    .map_err(PredictorError::from)
            });

        self.result_state = match outcome {
            Ok(prediction) => ResultState::Ready(prediction),
            Err(e) => {
                tracing::warn!("Prediction failed: {e}");
                ResultState::Error(e.to_string())
            }
        };
    }

    /// Whether a quit key was pressed.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Outcome for the current control values.
    #[must_use]
    pub fn result_state(&self) -> &ResultState {
        &self.result_state
    }

    #[must_use]
    pub fn form_state(&self) -> &ApplicantFormState {
        &self.form_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::artifacts::ArtifactPaths;
    use crate::domain::{ArtifactKind, Band, Prediction};
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn sample_paths() -> ArtifactPaths {
        ArtifactPaths {
            model: PathBuf::from("models/admission_model.json"),
            scaler: PathBuf::from("models/admission_scaler.json"),
        }
    }

    fn create_test_app() -> App {
        App::with_store(ArtifactStore::new(sample_paths())).expect("App should start")
    }

    fn ready(app: &App) -> Prediction {
        match app.result_state() {
            ResultState::Ready(prediction) => *prediction,
            ResultState::Error(message) => panic!("unexpected error: {message}"),
        }
    }

    /// Render into a `width` x `height` buffer and return its cell symbols by row.
    fn screen_cells(app: &App, width: u16, height: u16) -> Vec<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| app.render(f)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol().to_string()).collect())
            .collect()
    }

    fn join_cells(cells: &[String]) -> String {
        cells.concat()
    }

    fn screen_text(app: &App) -> String {
        screen_cells(app, 110, 32)
            .iter()
            .map(|row| join_cells(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_startup_scores_defaults() {
        let app = create_test_app();
        let prediction = ready(&app);
        assert!(prediction.percentage.is_finite());
        assert_eq!(prediction.band, Band::classify(prediction.percentage));
    }

    #[test]
    fn test_missing_model_is_fatal_and_named() {
        let store = ArtifactStore::new(ArtifactPaths {
            model: PathBuf::from("models/does_not_exist.json"),
            scaler: PathBuf::from("models/admission_scaler.json"),
        });
        let err = App::with_store(store).err().expect("must fail");
        match err {
            PredictorError::Artifact(e) => assert_eq!(e.kind(), ArtifactKind::Model),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_each_interaction_rescores() {
        let mut app = create_test_app();
        let before = ready(&app);

        // GRE is focused first; jump it to the maximum.
        app.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(app.form_state().to_features().gre, 340.0);
        let after = ready(&app);
        assert!(after.percentage > before.percentage);

        // Reset returns to the exact same score.
        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(ready(&app).percentage.to_bits(), before.percentage.to_bits());
    }

    #[test]
    fn test_research_toggle_through_keys() {
        let mut app = create_test_app();
        for _ in 0..3 {
            app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(app.form_state().selected().label, "Research");

        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.form_state().to_features().research, 0.0);

        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.form_state().to_features().research, 1.0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(!app.should_quit());

        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());

        let mut app = create_test_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit());

        let mut app = create_test_app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit());
    }

    #[test]
    fn test_screen_shows_readout_and_controls() {
        let app = create_test_app();
        let prediction = ready(&app);
        let text = screen_text(&app);

        assert!(text.contains("Admission Predictor"));
        for label in ["GRE Score", "TOEFL Score", "University Rating", "Research", "SOP", "LOR", "CGPA"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains(&format!("{:.1}%", prediction.percentage)));
        assert!(text.contains(&format!("{} probability", prediction.band)));
        assert!(text.contains("8.50"));
        assert!(text.contains(&app.model_fingerprint[..12]));
    }

    #[test]
    fn test_every_control_value_visible_at_80x24() {
        let app = create_test_app();
        let prediction = ready(&app);
        let rows = screen_cells(&app, 80, 24);
        let half = 40;

        for (i, field) in app.form_state().fields.iter().enumerate() {
            let column = if i < 4 { 0..half } else { half..80 };
            let title_row = rows
                .iter()
                .position(|row| join_cells(&row[column.clone()]).contains(field.label))
                .unwrap_or_else(|| panic!("missing {}", field.label));

            // The slider row sits directly under the title border.
            let value_row = join_cells(&rows[title_row + 1][column]);
            assert!(
                value_row.contains(&field.display_value()),
                "{} shows no value: {value_row:?}",
                field.label
            );
            assert!(!value_row.contains('└'), "{} is collapsed", field.label);
        }

        let text = rows
            .iter()
            .map(|row| join_cells(row))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains(&format!("{:.1}%", prediction.percentage)));
        assert!(text.contains(&format!("{} probability", prediction.band)));
        assert!(text.contains("[Q] Quit"));
        assert!(text.contains(&app.model_fingerprint[..12]));
    }

    #[test]
    fn test_error_state_renders_message() {
        let mut app = create_test_app();
        app.result_state = ResultState::Error("model produced a non-finite value".into());
        let text = screen_text(&app);
        assert!(text.contains("Prediction failed"));
        assert!(text.contains("non-finite"));
    }
}
