use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub const WINDOW_TITLE: &str = "Internet Data Usage Monitor";

/// The three labels: upload, download, total downloaded.
pub fn draw_usage_panel(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;

    let lines = vec![
        Line::from(Span::styled(
            snapshot.upload_label(),
            Style::default().fg(upload_color(snapshot.upload_rate_kbps)),
        )),
        Line::from(Span::styled(
            snapshot.download_label(),
            Style::default().fg(download_color(snapshot.download_rate_kbps)),
        )),
        Line::from(Span::styled(
            snapshot.total_label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            format!(" \u{25C8} {} ", WINDOW_TITLE),
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(30, 50, 85)))
        .style(Style::default().bg(Color::Rgb(8, 12, 24)));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ─── Dynamic speed colors ────────────────────────────────────────────────────

/// Blue gradient based on download rate
fn download_color(kbps: f64) -> Color {
    if kbps > 8_000.0 {
        Color::Rgb(0, 255, 255)
    } else if kbps > 800.0 {
        Color::Rgb(30, 190, 255)
    } else if kbps > 80.0 {
        Color::Rgb(50, 140, 230)
    } else {
        Color::Rgb(40, 110, 200)
    }
}

/// Purple gradient based on upload rate
fn upload_color(kbps: f64) -> Color {
    if kbps > 8_000.0 {
        Color::Rgb(255, 130, 255)
    } else if kbps > 800.0 {
        Color::Rgb(210, 120, 255)
    } else if kbps > 80.0 {
        Color::Rgb(170, 100, 230)
    } else {
        Color::Rgb(140, 80, 200)
    }
}
