//! Applicant input form: seven sliders in two columns.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::domain::ApplicantFeatures;
use crate::tui::styles::Theme;

/// Number of fields rendered in the left column.
const LEFT_COLUMN_LEN: usize = 4;

/// Identifies which applicant feature a field feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Gre,
    Toefl,
    Rating,
    Research,
    Sop,
    Lor,
    Cgpa,
}

/// A bounded slider stored as an integer tick position.
///
/// `value = min + ticks * step`, rounded to `decimals`, so stepping back and
/// forth always lands on the same grid points.
#[derive(Debug, Clone)]
pub struct SliderField {
    pub id: FieldId,
    pub label: &'static str,
    pub min: f64,
    pub step: f64,
    pub decimals: usize,
    pub max_ticks: u32,
    pub default_ticks: u32,
    pub ticks: u32,
}

impl SliderField {
    fn new(
        id: FieldId,
        label: &'static str,
        (min, max): (f64, f64),
        default: f64,
        step: f64,
        decimals: usize,
    ) -> Self {
        let max_ticks = ((max - min) / step).round() as u32;
        let default_ticks = ((default - min) / step).round() as u32;
        Self {
            id,
            label,
            min,
            step,
            decimals,
            max_ticks,
            default_ticks,
            ticks: default_ticks,
        }
    }

    fn round(&self, raw: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        (raw * factor).round() / factor
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.round(self.min + f64::from(self.ticks) * self.step)
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.round(self.min + f64::from(self.max_ticks) * self.step)
    }

    /// Move by `delta` ticks, saturating at both ends.
    pub fn step_by(&mut self, delta: i32) {
        let ticks = i64::from(self.ticks) + i64::from(delta);
        self.ticks = ticks.clamp(0, i64::from(self.max_ticks)) as u32;
    }

    pub fn to_min(&mut self) {
        self.ticks = 0;
    }

    pub fn to_max(&mut self) {
        self.ticks = self.max_ticks;
    }

    pub fn reset(&mut self) {
        self.ticks = self.default_ticks;
    }

    /// Slider position in [0, 1].
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max_ticks == 0 {
            0.0
        } else {
            f64::from(self.ticks) / f64::from(self.max_ticks)
        }
    }

    /// Whether this field is the yes/no research toggle.
    #[must_use]
    pub fn is_toggle(&self) -> bool {
        self.id == FieldId::Research
    }

    /// Value as shown in the form.
    #[must_use]
    pub fn display_value(&self) -> String {
        if self.is_toggle() {
            let answer = if self.ticks > 0 { "Yes" } else { "No" };
            answer.to_string()
        } else {
            format!("{:.*}", self.decimals, self.value())
        }
    }

    /// Range as shown in the form.
    #[must_use]
    pub fn display_range(&self) -> String {
        if self.is_toggle() {
            "No/Yes".to_string()
        } else {
            format!(
                "{:.*}-{:.*}",
                self.decimals,
                self.min,
                self.decimals,
                self.max()
            )
        }
    }
}

/// Applicant form state
pub struct ApplicantFormState {
    pub fields: Vec<SliderField>,
    pub selected_field: usize,
}

impl Default for ApplicantFormState {
    fn default() -> Self {
        Self {
            fields: vec![
                // Left column
                SliderField::new(FieldId::Gre, "GRE Score", (260.0, 340.0), 320.0, 1.0, 0),
                SliderField::new(FieldId::Toefl, "TOEFL Score", (0.0, 120.0), 110.0, 1.0, 0),
                SliderField::new(FieldId::Rating, "University Rating", (1.0, 5.0), 3.0, 1.0, 0),
                SliderField::new(FieldId::Research, "Research", (0.0, 1.0), 1.0, 1.0, 0),
                // Right column
                SliderField::new(FieldId::Sop, "SOP", (1.0, 5.0), 4.0, 0.5, 1),
                SliderField::new(FieldId::Lor, "LOR", (1.0, 5.0), 4.0, 0.5, 1),
                SliderField::new(FieldId::Cgpa, "CGPA", (6.8, 10.0), 8.5, 0.01, 2),
            ],
            selected_field: 0,
        }
    }
}

impl ApplicantFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// The focused field
    #[must_use]
    pub fn selected(&self) -> &SliderField {
        &self.fields[self.selected_field]
    }

    fn selected_mut(&mut self) -> &mut SliderField {
        &mut self.fields[self.selected_field]
    }

    /// Step the focused field by `delta` ticks
    pub fn step_selected(&mut self, delta: i32) {
        self.selected_mut().step_by(delta);
    }

    pub fn selected_to_min(&mut self) {
        self.selected_mut().to_min();
    }

    pub fn selected_to_max(&mut self) {
        self.selected_mut().to_max();
    }

    /// Flip the focused field if it is the research toggle
    pub fn toggle_selected(&mut self) {
        let field = self.selected_mut();
        if field.is_toggle() {
            field.ticks = 1 - field.ticks.min(1);
        }
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.reset();
        }
    }

    fn value_of(&self, id: FieldId) -> f64 {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(SliderField::value)
            .unwrap_or_default()
    }

    /// Current control values in training order
    #[must_use]
    pub fn to_features(&self) -> ApplicantFeatures {
        ApplicantFeatures {
            gre: self.value_of(FieldId::Gre),
            toefl: self.value_of(FieldId::Toefl),
            rating: self.value_of(FieldId::Rating),
            sop: self.value_of(FieldId::Sop),
            lor: self.value_of(FieldId::Lor),
            cgpa: self.value_of(FieldId::Cgpa),
            research: self.value_of(FieldId::Research),
        }
    }
}

/// Render the input form
pub fn render_form(f: &mut Frame, area: Rect, state: &ApplicantFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .horizontal_margin(1)
        .split(area);

    let mid = LEFT_COLUMN_LEN.min(state.fields.len());

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[SliderField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let (border_style, title_style) = if is_selected {
            (Theme::border_focused(), Theme::focused())
        } else {
            (Theme::border(), Theme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", field.display_range()),
                    Theme::text_muted(),
                ))
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_style(border_style);

        let slider = Gauge::default()
            .block(block)
            .gauge_style(Theme::slider(is_selected))
            .ratio(field.ratio())
            .label(Span::styled(field.display_value(), Theme::title()))
            .use_unicode(true);

        f.render_widget(slider, chunks[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_contract() {
        let state = ApplicantFormState::default();
        assert_eq!(state.to_features(), ApplicantFeatures::default());

        let cgpa = &state.fields[6];
        assert_eq!(cgpa.max_ticks, 320);
        assert_eq!(cgpa.default_ticks, 170);
        assert_eq!(cgpa.display_value(), "8.50");
        assert_eq!(cgpa.display_range(), "6.80-10.00");
    }

    #[test]
    fn test_cgpa_steps_land_on_grid() {
        let mut state = ApplicantFormState::default();
        state.selected_field = 6;

        state.step_selected(1);
        assert_eq!(state.selected().value(), 8.51);

        state.step_selected(-11);
        assert_eq!(state.selected().value(), 8.4);

        for _ in 0..1000 {
            state.step_selected(1);
        }
        assert_eq!(state.selected().value(), 10.0);

        state.selected_to_min();
        assert_eq!(state.selected().value(), 6.8);
        state.step_selected(-5);
        assert_eq!(state.selected().value(), 6.8);
    }

    #[test]
    fn test_half_point_fields() {
        let mut state = ApplicantFormState::default();
        state.selected_field = 4;
        state.step_selected(1);
        assert_eq!(state.to_features().sop, 4.5);
        state.step_selected(10);
        assert_eq!(state.to_features().sop, 5.0);
        assert_eq!(state.selected().display_value(), "5.0");
    }

    #[test]
    fn test_research_toggle() {
        let mut state = ApplicantFormState::default();
        state.selected_field = 3;
        assert_eq!(state.selected().display_value(), "Yes");

        state.toggle_selected();
        assert_eq!(state.to_features().research, 0.0);
        assert_eq!(state.selected().display_value(), "No");

        state.toggle_selected();
        assert_eq!(state.to_features().research, 1.0);

        // Toggling a slider does nothing.
        state.selected_field = 0;
        state.toggle_selected();
        assert_eq!(state.to_features().gre, 320.0);
    }

    #[test]
    fn test_navigation_wraps_and_reset_restores_defaults() {
        let mut state = ApplicantFormState::default();
        state.prev_field();
        assert_eq!(state.selected_field, 6);
        state.next_field();
        assert_eq!(state.selected_field, 0);

        state.selected_to_max();
        assert_eq!(state.to_features().gre, 340.0);
        state.reset();
        assert_eq!(state.to_features(), ApplicantFeatures::default());
    }
}
