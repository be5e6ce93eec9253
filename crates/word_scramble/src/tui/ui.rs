//! Stateless UI rendering for the word scramble screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use word_scramble_core::{Dictionary, Rejection};

use super::app::App;

const HELP_TEXT: &str = "Enter: Submit | Ctrl+R: Reset | Esc: Quit";

/// Renders the whole screen, with the rejection alert on top if one is showing.
pub fn draw<D: Dictionary>(frame: &mut Frame, app: &App<D>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Accepted words
            Constraint::Length(3), // Score and status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(app.session().root_word())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word Scramble"));
    frame.render_widget(title, chunks[0]);

    draw_input(frame, chunks[1], app);
    draw_used_words(frame, chunks[2], app.session().used_words());

    let score = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Your point is: {}", app.session().score()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.status_message().as_str(),
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(score, chunks[3]);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(rejection) = app.alert() {
        draw_alert(frame, area, rejection);
    }
}

fn draw_input<D: Dictionary>(frame: &mut Frame, area: Rect, app: &App<D>) {
    let input = Paragraph::new(app.input().as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Enter word"));
    frame.render_widget(input, area);

    if app.alert().is_none() {
        let typed = u16::try_from(app.input().chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_used_words(frame: &mut Frame, area: Rect, used_words: &[String]) {
    let items: Vec<ListItem> = used_words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2} ", word.chars().count()),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Words ({})", used_words.len())),
    );
    frame.render_widget(list, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, rejection: &Rejection) {
    let width = area.width.saturating_sub(4).min(60);
    let popup = center_rect(area, width, 8);

    let text = vec![
        Line::from(rejection.message().as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Continue]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let alert = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    rejection.title().as_str(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(alert, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
