use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::Tier;

use super::TerminalView;

pub fn render(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let Some(result) = view.result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let color = tier_color(result.tier);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(view.title().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", result.score, result.total),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(tier_message(result.tier), Style::default().fg(color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("enter back to categories  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Perfect => "Perfect! You're a genius!",
        Tier::Mid => "Great job! Almost there!",
        Tier::Low => "Thanks for playing!",
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Perfect => Color::Red,
        Tier::Mid => Color::Yellow,
        Tier::Low => Color::Blue,
    }
}
