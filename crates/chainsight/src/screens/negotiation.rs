//! Supplier negotiation dashboard
//!
//! Single supplier-id input. Submitting predicts the supplier's reliability
//! and cost-effectiveness scores and applies the fixed negotiation
//! concessions to both.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use chainsight_core::model::SupplierId;

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_score;

use super::{Screen, parse_field};

pub struct NegotiationScreen;

impl NegotiationScreen {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &mut AppState) {
        state.clear_error();

        let supplier = match parse_field::<u32>(state.negotiation.supplier.value(), "supplier id")
        {
            Ok(id) => SupplierId(id),
            Err(msg) => return state.set_error(msg),
        };

        let outcome = state.negotiation_model.negotiate(supplier);
        tracing::info!(
            supplier = supplier.0,
            reliability = outcome.negotiated_reliability,
            cost_effectiveness = outcome.negotiated_cost_effectiveness,
            "negotiation outcome refreshed"
        );
        state.negotiation.outcome = Some(outcome);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title("Supplier");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        state
            .negotiation
            .supplier
            .render(frame, inner, "Supplier ID", true);
    }

    fn render_outcome(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Negotiation Estimate");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(outcome) = &state.negotiation.outcome else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Enter a supplier id and press Enter to simulate a negotiation",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(hint, inner);
            return;
        };

        let lines = vec![
            Line::from(format!("Supplier #{}", outcome.supplier)),
            Line::from(""),
            Line::from(format!(
                "Predicted reliability:          {}",
                format_score(outcome.predicted_reliability)
            )),
            Line::from(format!(
                "Predicted cost-effectiveness:   {}",
                format_score(outcome.predicted_cost_effectiveness)
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Negotiated reliability:         "),
                Span::styled(
                    format_score(outcome.negotiated_reliability),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Negotiated cost-effectiveness:  "),
                Span::styled(
                    format_score(outcome.negotiated_cost_effectiveness),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for NegotiationScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                Self::submit(state);
                EventResult::Handled
            }
            _ => {
                if state.negotiation.supplier.handle_key(key) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_form(frame, chunks[0], state);
        self.render_outcome(frame, chunks[1], state);
    }
}

impl Screen for NegotiationScreen {
    fn title(&self) -> &str {
        "Negotiation"
    }
}
