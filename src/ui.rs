use crate::{
    api::spawn_fetch,
    app::{ App, State },
};
use tui::{
    backend::Backend,
    Terminal,
    Frame,
    widgets::{ Paragraph, Wrap },
    layout::{ Layout, Constraint, Direction, Alignment },
    text::Span,
    style::{ Style, Color, Modifier },
};
use std::time::{ Duration, Instant };

const LOADING_TEXT: &str = "Loading fact ...";
const HINT_TEXT: &str = "press enter for another fact · q to quit";

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration
) -> std::io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        app.poll();
        terminal.draw(|f| draw_ui(f, &app))?;

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if crossterm::event::poll(timeout)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                use crossterm::event::KeyCode::*;
                match key.code {
                    Char('q') | Esc => {
                        return Ok(());
                    }
                    Enter | Char(' ') | Char('r') => {
                        if app.on_tap() {
                            spawn_fetch(app.sender());
                        }
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

pub fn draw_ui<B: Backend>(f: &mut Frame<B>, app: &App) {
    let full_area = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(full_area);

    let text = match app.state {
        State::Loading => LOADING_TEXT,
        State::Idle => app.content.as_str(),
    };

    // Center vertically: pad the top with half the unused height.
    let wrap_width = (chunks[0].width.saturating_sub(4) as usize).max(1);
    let line_count = textwrap::wrap(text, wrap_width).len() as u16;
    let pad = chunks[0].height.saturating_sub(line_count) / 2;

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pad), Constraint::Min(0)])
        .split(chunks[0]);

    let fact = Paragraph::new(
        Span::styled(text, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(fact, content_chunks[1]);

    // The hint disappears while a request is running.
    if let State::Idle = app.state {
        let hint = Paragraph::new(
            Span::styled(HINT_TEXT, Style::default().fg(Color::DarkGray))
        ).alignment(Alignment::Center);

        f.render_widget(hint, chunks[1]);
    }
}
