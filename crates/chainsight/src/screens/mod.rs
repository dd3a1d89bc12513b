pub mod inventory;
pub mod monitoring;
pub mod negotiation;

use std::fmt::Display;
use std::str::FromStr;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use chainsight_core::model::Region;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Convert a raw form value at the boundary, reporting the conversion error
/// as a displayable message.
pub(crate) fn parse_field<T>(value: &str, label: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("invalid {label} {:?}: {e}", value.trim()))
}

/// Render a region choice field (`Left`/`Right` cycle the value)
pub(crate) fn render_region_field(frame: &mut Frame, area: Rect, region: Region, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = if focused {
        format!("< {} >", region.name())
    } else {
        region.name().to_string()
    };

    let line = Line::from(vec![
        Span::styled("Region: ", label_style),
        Span::raw(value),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
