//! Terminal setup and the event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use wayfinder_engine::SearchSession;

use crate::app::{App, AppOptions, BrowseOutcome};

/// Construct an [`App`] over the session and run it to completion.
pub fn run(session: SearchSession<'_>, options: AppOptions) -> Result<BrowseOutcome> {
    let mut app = App::new(session, options);
    app.run()
}

impl App<'_> {
    /// Pump the terminal event loop until the user quits, then report
    /// everywhere the run navigated.
    pub fn run(&mut self) -> Result<BrowseOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(stdout(), EnableMouseCapture)?;

        let result = self.event_loop(&mut terminal);

        ratatui::restore();
        execute!(stdout(), DisableMouseCapture)?;

        result?;
        Ok(BrowseOutcome {
            visits: std::mem::take(&mut self.visits),
        })
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }
}
