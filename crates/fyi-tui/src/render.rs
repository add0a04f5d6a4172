//! Mapping dashboard state to what is drawn.
//!
//! [`render`] is pure: it turns a [`DashboardState`] into a
//! [`DashboardFrame`] without touching the terminal. [`draw`] then paints a
//! frame onto a ratatui [`Frame`], centered in the viewport.

use fyi_core::Capabilities;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::icon;
use crate::keymap::KeyMap;
use crate::state::{DashboardState, ViewState};

/// Placeholder shown while a required sample is missing.
pub const LOADING_TEXT: &str = "Loading...";

/// Header label of the ready screen.
pub const HEADER_TEXT: &str = "FYI";

/// Timestamp format of the clock line.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Content of one screen, line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Ready {
        header: String,
        time: String,
        /// Absent when metrics are disabled
        cpu: Option<String>,
        /// Absent when weather is disabled
        weather: Option<String>,
        help: String,
    },
}

impl Screen {
    pub fn view_state(&self) -> ViewState {
        match self {
            Screen::Loading => ViewState::Loading,
            Screen::Ready { .. } => ViewState::Ready,
        }
    }

    /// Lines top to bottom.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Screen::Loading => vec![LOADING_TEXT],
            Screen::Ready {
                header,
                time,
                cpu,
                weather,
                help,
            } => {
                let mut lines = vec![header.as_str(), time.as_str()];
                lines.extend(cpu.as_deref());
                lines.extend(weather.as_deref());
                lines.push(help.as_str());
                lines
            }
        }
    }
}

/// A rendered screen and the viewport it should be centered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFrame {
    pub screen: Screen,
    /// 0 means use the whole terminal
    pub width: u16,
    pub height: u16,
}

/// Build the frame for `state`.
pub fn render(state: &DashboardState, capabilities: Capabilities, keymap: &KeyMap) -> DashboardFrame {
    DashboardFrame {
        screen: render_screen(state, capabilities, keymap),
        width: state.viewport_width,
        height: state.viewport_height,
    }
}

fn render_screen(state: &DashboardState, capabilities: Capabilities, keymap: &KeyMap) -> Screen {
    if state.view_state(capabilities) == ViewState::Loading {
        return Screen::Loading;
    }

    let time = format!("Current Time: {}", state.current_time.format(TIME_FORMAT));
    let cpu = if capabilities.metrics {
        state
            .cpu_utilization
            .map(|sample| format!("CPU Usage: {:.2}%", sample.percent()))
    } else {
        None
    };
    let weather = if capabilities.weather {
        state.weather.as_ref().map(|sample| {
            format!(
                "{} {:.1} °C {}",
                sample.location_name,
                sample.temperature_celsius,
                icon::resolve(sample.condition_code, sample.is_daytime)
            )
        })
    } else {
        None
    };

    Screen::Ready {
        header: HEADER_TEXT.to_string(),
        time,
        cpu,
        weather,
        help: keymap.short_help(),
    }
}

/// Paint `view` centered in the terminal.
pub fn draw(frame: &mut Frame, view: &DashboardFrame) {
    let viewport = viewport_area(frame.area(), view.width, view.height);

    let lines: Vec<Line> = match &view.screen {
        Screen::Loading => vec![Line::from(LOADING_TEXT)],
        Screen::Ready {
            header,
            time,
            cpu,
            weather,
            help,
        } => {
            let mut lines = vec![
                Line::styled(
                    header.as_str(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Line::from(time.as_str()),
            ];
            lines.extend(cpu.as_deref().map(Line::from));
            lines.extend(weather.as_deref().map(Line::from));
            lines.push(Line::styled(help.as_str(), Style::default().fg(Color::DarkGray)));
            lines
        }
    };

    let content = centered_block(viewport, lines.len() as u16);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content);
}

/// The area to center within: the requested viewport clamped to the
/// terminal, or the whole terminal when no size is known yet.
fn viewport_area(area: Rect, width: u16, height: u16) -> Rect {
    if width == 0 || height == 0 {
        return area;
    }
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Full-width band of `rows` rows, vertically centered in `area`.
fn centered_block(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect::new(area.x, area.y + (area.height - rows) / 2, area.width, rows)
}
