use crate::state::AppState;
use crate::surface::TerminalSurface;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the overlay full-screen with a one-line status bar
pub fn render(state: &AppState, surface: &TerminalSurface, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    if surface.is_visible() {
        // Keep a one-cell margin around the text like a HUD anchor
        let overlay_area = chunks[0].inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        f.render_widget(Paragraph::new(surface.lines()), overlay_area);
    }

    f.render_widget(Paragraph::new(status_line(state)), chunks[1]);
}

fn status_line(state: &AppState) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let config = &state.config;

    Line::from(vec![
        Span::styled(" q", key),
        Span::styled(" quit ", muted),
        Span::styled(" d", key),
        Span::styled(
            format!(" overlay {} ", if config.enabled { "on" } else { "off" }),
            muted,
        ),
        Span::styled(" n", key),
        Span::styled(
            format!(" names {} ", if config.show_names { "on" } else { "off" }),
            muted,
        ),
        Span::styled(" f/F", key),
        Span::styled(format!(" float {} ", config.float_precision), muted),
        Span::styled(" v/V", key),
        Span::styled(format!(" vector {} ", config.vector_precision), muted),
        Span::styled(format!(" frame {}", state.frame), muted),
    ])
}
