use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::Category;

use super::TerminalView;

pub fn render(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let list_height = Category::ALL.len() as u16 + 4;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(list_height),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[1]);
    render_categories(frame, chunks[2], view.category_cursor());
    if let Some(notice) = view.notice() {
        render_notice(frame, chunks[3], notice);
    }
    render_controls(frame, chunks[5]);
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Pick a category · 10 questions · 10 seconds each".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_categories(frame: &mut Frame, area: Rect, cursor: usize) {
    let lines: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let is_selected = index == cursor;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{}. ", index + 1), style),
                Span::styled(category.label(), style),
            ])
        })
        .collect();

    let [column] = Layout::horizontal([Constraint::Length(36)])
        .flex(Flex::Center)
        .areas(area);

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, column);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let widget = Paragraph::new(notice)
        .alignment(Alignment::Center)
        .fg(Color::Red)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter or 1-6 start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
