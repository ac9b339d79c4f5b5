pub mod status;
pub mod usage;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Fixed widget size in cells: three labels plus the border.
const PANEL_WIDTH: u16 = 40;
const PANEL_HEIGHT: u16 = 5;

/// Master draw function: the usage panel pinned top-left, status bar at the bottom.
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let panel = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PANEL_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    usage::draw_usage_panel(f, panel[0], app);
    status::draw_status_bar(f, rows[2], app);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::types::{Snapshot, UsageState};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_the_three_labels() {
        let snapshot = Snapshot {
            upload_rate_kbps: 6.25,
            download_rate_kbps: 1500.0,
            total_received_mb: 42.0,
            taken_at: None,
        };
        let app = App::new(snapshot, PathBuf::from("data_usage.txt"));
        let screen = rendered(&app);

        assert!(screen.contains("Upload Speed: 6.25 Kbps"));
        assert!(screen.contains("Download Speed: 1.50 Mbps"));
        assert!(screen.contains("Total Downloaded: 42.00 MB"));
        assert!(screen.contains(usage::WINDOW_TITLE));
        assert!(screen.contains("--:--:--"));
    }

    #[test]
    fn initial_labels_show_restored_total() {
        let app = App::new(
            Snapshot::idle(UsageState::new(7.5), None),
            PathBuf::from("data_usage.txt"),
        );
        let screen = rendered(&app);

        assert!(screen.contains("Upload Speed: 0.00 Kbps"));
        assert!(screen.contains("Download Speed: 0.00 Kbps"));
        assert!(screen.contains("Total Downloaded: 7.50 MB"));
    }
}
