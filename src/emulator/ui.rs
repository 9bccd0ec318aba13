//! Terminal rendering of the handset

use super::{Emulator, UssdTransport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const KEYPAD_ROWS: [&str; 4] = ["1   2   3", "4   5   6", "7   8   9", "*   0   #"];

/// Everything the view needs besides the emulator itself
pub struct ViewContext<'a> {
    pub url: &'a str,
    pub busy: bool,
}

pub fn render<T: UssdTransport>(f: &mut Frame, emu: &Emulator<T>, view: &ViewContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(f, view, chunks[0]);
    render_screen(f, emu, chunks[1]);
    render_input(f, emu, view, chunks[2]);
    render_keypad(f, chunks[3]);
    render_status_bar(f, emu, chunks[4]);
}

fn render_header(f: &mut Frame, view: &ViewContext<'_>, area: Rect) {
    let header = Paragraph::new(format!("USSD Emulator | {}", view.url))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_screen<T: UssdTransport>(f: &mut Frame, emu: &Emulator<T>, area: Rect) {
    let screen = Paragraph::new(emu.display())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Screen"));
    f.render_widget(screen, area);
}

fn render_input<T: UssdTransport>(
    f: &mut Frame,
    emu: &Emulator<T>,
    view: &ViewContext<'_>,
    area: Rect,
) {
    let text = if view.busy {
        "Sending...".to_string()
    } else {
        emu.input().to_string()
    };
    let input = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Input"));
    f.render_widget(input, area);
}

fn render_keypad(f: &mut Frame, area: Rect) {
    let keypad = Paragraph::new(KEYPAD_ROWS.join("\n"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Keypad"));
    f.render_widget(keypad, area);
}

fn render_status_bar<T: UssdTransport>(f: &mut Frame, emu: &Emulator<T>, area: Rect) {
    let session = match emu.session_id() {
        Some(id) => format!("Session: {id}"),
        None => "No active session".to_string(),
    };
    let status = Paragraph::new(format!(
        "{session}\nEnter: send | Backspace: delete | Ctrl+N: new session | Esc: quit"
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
