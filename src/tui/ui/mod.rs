//! UI module: View components for the TUI.

pub mod form;
pub mod result;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::Theme;

/// Characters of each fingerprint shown in the status line.
const FINGERPRINT_PREFIX_LEN: usize = 12;

pub fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" 🎓 ", Theme::text()),
        Span::styled("Admission Predictor", Theme::title()),
        Span::styled(" │ Graduate admission chances", Theme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn short(fingerprint: &str) -> &str {
    fingerprint
        .get(..FINGERPRINT_PREFIX_LEN)
        .unwrap_or(fingerprint)
}

pub fn render_footer(f: &mut Frame, area: Rect, model_fp: &str, scaler_fp: &str) {
    let text = vec![
        Line::from(vec![
            Span::styled("[↑↓] ", Theme::key_hint()),
            Span::styled("Move ", Theme::key_desc()),
            Span::styled("[←→] ", Theme::key_hint()),
            Span::styled("Step ", Theme::key_desc()),
            Span::styled("[PgUp/Dn] ", Theme::key_hint()),
            Span::styled("x10 ", Theme::key_desc()),
            Span::styled("[Home/End] ", Theme::key_hint()),
            Span::styled("Ends ", Theme::key_desc()),
            Span::styled("[Spc] ", Theme::key_hint()),
            Span::styled("Y/N ", Theme::key_desc()),
            Span::styled("[R] ", Theme::key_hint()),
            Span::styled("Reset ", Theme::key_desc()),
            Span::styled("[Q] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("model ", Theme::text_muted()),
            Span::styled(short(model_fp), Theme::text_secondary()),
            Span::styled("  scaler ", Theme::text_muted()),
            Span::styled(short(scaler_fp), Theme::text_secondary()),
        ]),
    ];

    let footer = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}
