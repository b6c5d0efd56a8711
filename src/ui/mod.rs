mod category;
mod quiz;
mod result;
mod view;

use ratatui::{prelude::*, widgets::Block};

use crate::session::Screen;

pub use view::{Highlight, QuestionView, ResultView, TerminalView};

pub fn render(frame: &mut Frame, view: &TerminalView) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match view.screen() {
        Screen::Category => category::render(frame, area, view),
        Screen::Quiz => quiz::render(frame, area, view),
        Screen::Result => result::render(frame, area, view),
    }
}
