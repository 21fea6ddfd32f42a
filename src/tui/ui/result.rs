//! Prediction readout: percentage, band label and progress bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::Prediction;
use crate::tui::styles::Theme;

/// Outcome of the latest evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultState {
    /// Prediction for the current control values
    Ready(Prediction),
    /// Inference failed for the current control values
    Error(String),
}

/// Render the prediction panel
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    match state {
        ResultState::Ready(prediction) => render_prediction(f, area, prediction),
        ResultState::Error(message) => render_error(f, area, message),
    }
}

fn render_prediction(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let band_style = Theme::band(prediction.band);

    let block = Block::default()
        .title(Span::styled(" Admission Probability ", Theme::text_secondary()))
        .borders(Borders::ALL)
        .border_style(band_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Percentage + label
            Constraint::Length(1), // Progress bar
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(inner);

    let readout = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{:.1}%", prediction.percentage),
            band_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} probability", prediction.band),
            band_style,
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(readout, chunks[0]);

    let progress = Gauge::default()
        .gauge_style(Theme::band_gauge(prediction.band))
        .ratio(prediction.progress_ratio())
        .label("")
        .use_unicode(true);
    f.render_widget(progress, chunks[1]);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(Span::styled("! Prediction failed", Theme::danger())),
        Line::from(Span::styled(message, Theme::text())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::danger()),
    );

    f.render_widget(content, area);
}
