//! Terminal USSD handset emulator
//!
//! Usage: `ussd-emulator [URL]`. Falls back to `USSD_URL`, then
//! `http://localhost:3000/api/ussd`.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::runtime::Runtime;
use ussd_sim::config::EmulatorConfig;
use ussd_sim::emulator::ui::{render, ViewContext};
use ussd_sim::emulator::{Emulator, HttpTransport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EmulatorConfig::from_env(std::env::args().nth(1));
    let transport = HttpTransport::new(config.url.clone())?;
    let mut emu = Emulator::new(transport, config.phone_number, config.entry_code);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &mut emu, &runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    emu: &mut Emulator<HttpTransport>,
    runtime: &Runtime,
) -> io::Result<()> {
    let url = emu.transport().url().to_string();

    loop {
        let view = ViewContext {
            url: &url,
            busy: false,
        };
        terminal.draw(|f| render(f, emu, &view))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Char('c') if ctrl => return Ok(()),
            KeyCode::Char('n') if ctrl => emu.reset(),
            KeyCode::Char(c) => {
                emu.press(c);
            }
            KeyCode::Backspace => emu.backspace(),
            KeyCode::Enter => {
                let view = ViewContext {
                    url: &url,
                    busy: true,
                };
                terminal.draw(|f| render(f, emu, &view))?;
                runtime.block_on(emu.send());
            }
            _ => {}
        }
    }
}
