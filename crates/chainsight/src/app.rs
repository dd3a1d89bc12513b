//! Application shell: event loop, layout and key dispatch

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{
    inventory::InventoryScreen, monitoring::MonitoringScreen, negotiation::NegotiationScreen,
};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    monitoring_screen: MonitoringScreen,
    inventory_screen: InventoryScreen,
    negotiation_screen: NegotiationScreen,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar,
            status_bar: StatusBar,
            monitoring_screen: MonitoringScreen::new(),
            inventory_screen: InventoryScreen::new(),
            negotiation_screen: NegotiationScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("dashboard started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        tracing::info!("dashboard exited");
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Monitoring => self.monitoring_screen.render(frame, area, &self.state),
            TabId::Inventory => self.inventory_screen.render(frame, area, &self.state),
            TabId::Negotiation => self.negotiation_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                // First Esc clears an error, second quits
                if self.state.error_message.is_some() {
                    self.state.clear_error();
                } else {
                    self.state.exit = true;
                }
                return;
            }
            _ => {}
        }

        // Tab bar first, then the active screen
        if self.tab_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }

        match self.state.active_tab {
            TabId::Monitoring => self.monitoring_screen.handle_key(key_event, &mut self.state),
            TabId::Inventory => self.inventory_screen.handle_key(key_event, &mut self.state),
            TabId::Negotiation => self
                .negotiation_screen
                .handle_key(key_event, &mut self.state),
        };
    }
}
