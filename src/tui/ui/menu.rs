use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 70, size);
    let block = Block::default().title("draw-poker").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block.clone(), area);
    let inner_all = inner(area);

    let banner = r#"
 ___                     ___      _
|   \ _ _ __ ___ __ __  | _ \___ | |__ ___ _ _
| |) | '_/ _` \ V  V /  |  _/ _ \| / // -_) '_|
|___/|_| \__,_|\_/\_/   |_| \___/|_\_\\___|_|
"#;

    let mut banner_lines: Vec<Line> = banner
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();
    banner_lines.push(Line::from(Span::styled(
        "♠ ♡ ♣ ♢  five-card draw against the computer",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let banner_para = Paragraph::new(banner_lines).alignment(Alignment::Center);
    f.render_widget(banner_para, rows[0]);

    let config_items = app.menu_items_display();
    let hints = [String::from("[Enter] Start  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust")];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Configuration:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    cfg_lines.push(Line::from(""));
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
