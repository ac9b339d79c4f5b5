use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::utils::format_uptime;

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let updated = app
        .snapshot
        .taken_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let mut spans = Vec::new();
    spans.extend(key_span("q", "Quit"));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Rgb(50, 60, 80))));
    spans.push(Span::styled(
        format!("\u{23F1} {} ", format_uptime(app.session_start.elapsed())),
        Style::default().fg(Color::Rgb(110, 120, 150)),
    ));
    spans.push(Span::styled(
        format!("updated {} ", updated),
        Style::default().fg(Color::Rgb(85, 95, 120)),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Rgb(50, 60, 80))));
    spans.push(Span::styled(
        app.data_file.display().to_string(),
        Style::default().fg(Color::Rgb(70, 80, 105)),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(14, 20, 36)));
    f.render_widget(paragraph, area);
}

fn key_span(key: &str, desc: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Rgb(255, 200, 80))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", desc),
            Style::default().fg(Color::Rgb(95, 108, 135)),
        ),
    ]
}
