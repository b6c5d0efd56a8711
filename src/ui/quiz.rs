use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::CHOICE_COUNT;
use crate::session::TIME_LIMIT_SECS;

use super::{Highlight, TerminalView};

const OPTION_LABELS: [char; CHOICE_COUNT] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let Some(question) = view.question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], view.title(), question.number, question.total);
    render_timer(frame, chunks[1], view.remaining_secs());
    render_question_text(frame, chunks[2], &question.text);
    render_options(
        frame,
        chunks[3],
        &question.choices,
        view.selected_option(),
        view.highlight(),
        view.choices_enabled(),
    );
    if let Some(is_correct) = view.visible_judge() {
        render_judge(frame, chunks[4], is_correct);
    }
    render_controls(frame, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, number: usize, total: usize) {
    let [title_area, progress_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);

    frame.render_widget(
        Paragraph::new(title).fg(Color::Cyan).bold(),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(format!("Question {} of {}", number, total))
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        progress_area,
    );
}

fn timer_color(remaining_secs: u32) -> Color {
    match remaining_secs {
        0..=3 => Color::Red,
        4..=6 => Color::Yellow,
        _ => Color::Green,
    }
}

fn render_timer(frame: &mut Frame, area: Rect, remaining_secs: u32) {
    let filled = remaining_secs.min(TIME_LIMIT_SECS) as usize;
    let empty = TIME_LIMIT_SECS as usize - filled;
    let color = timer_color(remaining_secs);

    let line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {:>2}s", remaining_secs), Style::default().fg(color).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn option_style(index: usize, selected: usize, highlight: Option<Highlight>, enabled: bool) -> Style {
    if let Some(highlight) = highlight {
        if index == highlight.correct {
            return Style::default().fg(Color::Black).bg(Color::Green).bold();
        }
        if highlight.wrong == Some(index) {
            return Style::default().fg(Color::Black).bg(Color::Red).bold();
        }
    }

    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if index == selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; CHOICE_COUNT],
    selected: usize,
    highlight: Option<Highlight>,
    enabled: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let style = option_style(index, selected, highlight, enabled);
        let marker = if enabled && index == selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_judge(frame: &mut Frame, area: Rect, is_correct: bool) {
    let (mark, color) = if is_correct {
        ("○  Correct!", Color::Green)
    } else {
        ("×  Wrong", Color::Red)
    };
    let widget = Paragraph::new(mark)
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter or 1-4 answer  ·  esc categories  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
