//! Real-time monitoring dashboard
//!
//! One form: product id, region and date. Submitting aggregates sales for
//! the product/region, looks up the economic indicator for the date, samples
//! one supplier and reports which alert thresholds fired.

use crossterm::event::{KeyCode, KeyEvent};
use jiff::civil::Date;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use chainsight_core::model::ProductId;
use chainsight_core::monitor;

use crate::components::{Component, EventResult};
use crate::state::{AppState, MonitoringForm};
use crate::util::format::{format_score, format_units};

use super::{Screen, parse_field, render_region_field};

const PRODUCT_FIELD: usize = 0;
const REGION_FIELD: usize = 1;
const DATE_FIELD: usize = 2;

pub struct MonitoringScreen;

impl MonitoringScreen {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &mut AppState) {
        state.clear_error();

        let product = match parse_field::<u32>(state.monitoring.product.value(), "product id") {
            Ok(id) => ProductId(id),
            Err(msg) => return state.set_error(msg),
        };
        let date = match parse_field::<Date>(state.monitoring.date.value(), "date") {
            Ok(date) => date,
            Err(msg) => return state.set_error(msg),
        };
        let region = state.monitoring.region;

        match monitor(
            &state.dataset,
            product,
            region,
            date,
            &state.thresholds,
            &mut state.rng,
        ) {
            Ok(snapshot) => {
                tracing::info!(
                    product = product.0,
                    region = region.name(),
                    alerts = snapshot.alerts.len(),
                    "monitoring snapshot refreshed"
                );
                state.monitoring.snapshot = Some(snapshot);
            }
            Err(e) => state.set_error(e.to_string()),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title("Query");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let form = &state.monitoring;
        form.product.render(
            frame,
            rows[0],
            "Product ID",
            form.focused_field == PRODUCT_FIELD,
        );
        render_region_field(frame, rows[1], form.region, form.focused_field == REGION_FIELD);
        form.date
            .render(frame, rows[2], "Date", form.focused_field == DATE_FIELD);
    }

    fn render_snapshot(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Real-Time Monitoring");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(snapshot) = &state.monitoring.snapshot else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Fill in the query and press Enter to check alerts",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(hint, inner);
            return;
        };

        let mut lines = vec![
            Line::from(format!(
                "Product {} in {} as of {}",
                snapshot.product, snapshot.region, snapshot.date
            )),
            Line::from(""),
            Line::from(format!(
                "Total sales:               {}",
                format_units(snapshot.total_sales as i64)
            )),
            Line::from(format!(
                "Economic indicator:        {}",
                format_score(snapshot.economic_indicator)
            )),
            Line::from(format!(
                "Sampled supplier:          {} (#{})",
                snapshot.supplier.name, snapshot.supplier.id
            )),
            Line::from(format!(
                "  reliability:             {}",
                format_score(snapshot.supplier.reliability)
            )),
            Line::from(format!(
                "  cost-effectiveness:      {}",
                format_score(snapshot.supplier.cost_effectiveness)
            )),
            Line::from(""),
        ];

        if snapshot.alerts.is_empty() {
            lines.push(Line::from(Span::styled(
                "No alerts",
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Alerts",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )));
            for alert in &snapshot.alerts {
                lines.push(Line::from(Span::styled(
                    format!("  ! {}", alert.label()),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for MonitoringScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Down => {
                state.monitoring.focused_field =
                    (state.monitoring.focused_field + 1) % MonitoringForm::FIELD_COUNT;
                EventResult::Handled
            }
            KeyCode::Up => {
                state.monitoring.focused_field = (state.monitoring.focused_field
                    + MonitoringForm::FIELD_COUNT
                    - 1)
                    % MonitoringForm::FIELD_COUNT;
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::submit(state);
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Right
                if state.monitoring.focused_field == REGION_FIELD =>
            {
                state.monitoring.region = if key.code == KeyCode::Left {
                    state.monitoring.region.prev()
                } else {
                    state.monitoring.region.next()
                };
                EventResult::Handled
            }
            _ => {
                let handled = match state.monitoring.focused_field {
                    PRODUCT_FIELD => state.monitoring.product.handle_key(key),
                    DATE_FIELD => state.monitoring.date.handle_key(key),
                    _ => false,
                };
                if handled {
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
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.render_form(frame, chunks[0], state);
        self.render_snapshot(frame, chunks[1], state);
    }
}

impl Screen for MonitoringScreen {
    fn title(&self) -> &str {
        "Monitoring"
    }
}
