use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HAND_SIZE;
use crate::player::{Participant, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(7),                // computer
            Constraint::Min(7),                // human
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let game = &app.game;
    let header = Paragraph::new(Line::from(format!(
        "Round {}   Pot: {}   Phase: {}",
        game.round(),
        game.pot(),
        game.phase().label()
    )))
    .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_seat(f, chunks[1], app, Seat::Computer);
    render_seat(f, chunks[2], app, Seat::Human);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = vec![Line::from(game.message().to_string())];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    left_info.push(action_line(app));

    let right_keys = vec![
        Line::from(""),
        Line::from("? help • H history • M menu"),
        Line::from("X restart"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn action_line(app: &AppState) -> Line<'static> {
    let phase = app.game.phase();
    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let entries: Vec<(&str, bool)> = match phase {
        Phase::OpenCheck => vec![("O open", true), ("N decline", true)],
        Phase::Folded | Phase::Resolved => vec![("Space next round", true)],
        Phase::Refresh => vec![("1-5 mark", true), ("R refresh", true)],
        Phase::Decision => vec![("C check", true), ("B bet", app.game.can_bet())],
        Phase::GameOver => vec![("Space new game", true)],
    };
    let mut spans = vec![Span::raw("Actions: ")];
    for (i, (label, enabled)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" • "));
        }
        spans.push(Span::styled(label.to_string(), action_style(enabled)));
    }
    Line::from(spans)
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let game = &app.game;
    let p: &Participant = game.participant(seat);
    let revealed = seat == Seat::Human || app.reveal_computer();

    let mut title = seat.label().to_string();
    if game.opener() == Some(seat) && game.phase() != Phase::Folded {
        title.push_str(" [Opener]");
    }
    if p.is_broke() {
        title.push_str(" [Out]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if app.reveal_computer() && game.winners().contains(&seat) {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if seat == Seat::Human {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);

    let seat_inner = inner(area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(seat_inner);

    let category = if revealed {
        format!("{} (score {})", p.evaluation().category, p.score())
    } else {
        "--".to_string()
    };
    let lines = vec![
        Line::from(format!("Coins: {}   In pot: {}", p.coins(), game.contribution(seat))),
        Line::from(format!("Hand: {category}")),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[0]);

    let cw = split[1].width / HAND_SIZE as u16;
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..HAND_SIZE).map(|_| Constraint::Length(cw)).collect::<Vec<_>>())
        .split(split[1]);
    for (i, card) in p.hand().cards().iter().enumerate() {
        let (card, border, title) = if !revealed {
            (None, None, String::new())
        } else if seat == Seat::Human {
            let border = if app.is_selected(i) {
                Some(Color::Yellow)
            } else if p.is_valuable(i) {
                Some(Color::Green)
            } else {
                None
            };
            let mark = if app.is_selected(i) { "x" } else { "" };
            (Some(*card), border, format!("{}{mark}", i + 1))
        } else {
            let border = p.is_valuable(i).then_some(Color::Green);
            (Some(*card), border, String::new())
        };
        render_card_widget(f, card_chunks[i], card, border, title);
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            let line =
                format!("R{} {} {}{}", entry.round, entry.seat, entry.verb.label(), amount);
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: next round (new game after game over)"),
        Line::from("- O: play when someone can open"),
        Line::from("- N: decline / next round"),
        Line::from("- 1-5: mark a card to replace (up to 4)"),
        Line::from("- R: replace marked cards"),
        Line::from("- C: check"),
        Line::from("- B: bet 1-3 coins"),
        Line::from("- X: restart with fresh balances"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Bet Amount:", bold)),
        Line::from("- 1-3: set amount"),
        Line::from("- + / -: adjust"),
        Line::from("- Enter: submit, Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start, Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Green cards are worth keeping. Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Bet: {current}")),
        Line::from(format!("Range: 1-{}", app.game.max_bet())),
        Line::from("Digits or +/- to edit"),
        Line::from("Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Bet Amount").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

fn card_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    border: Option<Color>,
    title: String,
) {
    let mut block =
        Block::default().borders(Borders::ALL).title(title).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), card_style(c))),
        None => Line::from("??"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
