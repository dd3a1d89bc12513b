//! Inventory cost-savings dashboard
//!
//! Form takes product id, region, current inventory and lead time; submitting
//! forecasts demand and compares holding costs before and after right-sizing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use chainsight_core::estimate_savings;
use chainsight_core::model::ProductId;

use crate::components::{Component, EventResult};
use crate::state::{AppState, InventoryForm};
use crate::util::format::{format_cost, format_units};

use super::{Screen, parse_field, render_region_field};

const PRODUCT_FIELD: usize = 0;
const REGION_FIELD: usize = 1;
const INVENTORY_FIELD: usize = 2;
const LEAD_TIME_FIELD: usize = 3;

pub struct InventoryScreen;

impl InventoryScreen {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &mut AppState) {
        state.clear_error();

        let form = &state.inventory;
        let product = match parse_field::<u32>(form.product.value(), "product id") {
            Ok(id) => ProductId(id),
            Err(msg) => return state.set_error(msg),
        };
        let inventory = match parse_field::<i64>(form.inventory.value(), "inventory") {
            Ok(v) => v,
            Err(msg) => return state.set_error(msg),
        };
        let lead_time = match parse_field::<i64>(form.lead_time.value(), "lead time") {
            Ok(v) => v,
            Err(msg) => return state.set_error(msg),
        };
        let region = form.region;

        match estimate_savings(&state.demand_model, product, region, inventory, lead_time) {
            Ok(estimate) => {
                tracing::info!(
                    product = product.0,
                    region = region.name(),
                    savings = estimate.savings,
                    "cost-savings estimate refreshed"
                );
                state.inventory.estimate = Some(estimate);
            }
            Err(e) => state.set_error(e.to_string()),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title("Position");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let form = &state.inventory;
        form.product.render(
            frame,
            rows[0],
            "Product ID",
            form.focused_field == PRODUCT_FIELD,
        );
        render_region_field(frame, rows[1], form.region, form.focused_field == REGION_FIELD);
        form.inventory.render(
            frame,
            rows[2],
            "Current inventory",
            form.focused_field == INVENTORY_FIELD,
        );
        form.lead_time.render(
            frame,
            rows[3],
            "Lead time (periods)",
            form.focused_field == LEAD_TIME_FIELD,
        );
    }

    fn render_estimate(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Cost Savings");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(estimate) = &state.inventory.estimate else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Fill in the position and press Enter to estimate savings",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(hint, inner);
            return;
        };

        let lines = vec![
            Line::from(format!(
                "Forecast demand per period:  {}",
                format_units(estimate.forecast)
            )),
            Line::from(""),
            Line::from(format!(
                "Holding cost (current):      {}",
                format_cost(estimate.holding_cost_current)
            )),
            Line::from(format!(
                "Holding cost (optimized):    {}",
                format_cost(estimate.holding_cost_optimized)
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Estimated savings:           "),
                Span::styled(
                    format_cost(estimate.savings),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for InventoryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Down => {
                state.inventory.focused_field =
                    (state.inventory.focused_field + 1) % InventoryForm::FIELD_COUNT;
                EventResult::Handled
            }
            KeyCode::Up => {
                state.inventory.focused_field = (state.inventory.focused_field
                    + InventoryForm::FIELD_COUNT
                    - 1)
                    % InventoryForm::FIELD_COUNT;
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::submit(state);
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Right if state.inventory.focused_field == REGION_FIELD => {
                state.inventory.region = if key.code == KeyCode::Left {
                    state.inventory.region.prev()
                } else {
                    state.inventory.region.next()
                };
                EventResult::Handled
            }
            _ => {
                let handled = match state.inventory.focused_field {
                    PRODUCT_FIELD => state.inventory.product.handle_key(key),
                    INVENTORY_FIELD => state.inventory.inventory.handle_key(key),
                    LEAD_TIME_FIELD => state.inventory.lead_time.handle_key(key),
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
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        self.render_form(frame, chunks[0], state);
        self.render_estimate(frame, chunks[1], state);
    }
}

impl Screen for InventoryScreen {
    fn title(&self) -> &str {
        "Inventory"
    }
}
