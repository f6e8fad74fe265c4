use std::io::{self, Stdout};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use bookfinder::controller::{QueryController, DEBOUNCE_QUIET};
use bookfinder::Volume;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use eyre::WrapErr;
use log::{trace, warn};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::ui;

/// Messages from background search threads.
enum BgMessage {
    SearchComplete(Vec<Volume>),
    SearchError(bookfinder::Error),
}

pub struct App {
    pub controller: QueryController,
    // Every search thread reports to this one channel, so overlapping
    // searches are applied in arrival order: the last to resolve wins.
    bg_sender: Sender<BgMessage>,
    bg_receiver: Receiver<BgMessage>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = channel();

        Self {
            controller: QueryController::new(),
            bg_sender: tx,
            bg_receiver: rx,
            should_quit: false,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> eyre::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if let Some(query) = self.controller.take_debounced_change(DEBOUNCE_QUIET) {
                    self.start_search(query);
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Backspace => {
                let mut query = self.controller.query().to_owned();
                if query.pop().is_some() {
                    self.controller.set_query(query);
                }
            }
            KeyCode::Char(c) => {
                let mut query = self.controller.query().to_owned();
                query.push(c);
                self.controller.set_query(query);
            }
            _ => {}
        }
    }

    fn start_search(&self, query: String) {
        trace!("Dispatching search for '{query}'");
        let tx = self.bg_sender.clone();

        // One best-effort attempt per search; in-flight searches are never
        // cancelled when a newer one starts.
        thread::spawn(move || {
            let msg = match bookfinder::search_volumes(&query) {
                Ok(volumes) => BgMessage::SearchComplete(volumes),
                Err(err) => BgMessage::SearchError(err),
            };
            let _ = tx.send(msg);
        });
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            match msg {
                BgMessage::SearchComplete(volumes) => self.controller.finish_search(volumes),
                BgMessage::SearchError(err) => {
                    // No user-visible error surface: the loading indicator
                    // stays up until the next keystroke cycle.
                    warn!("Search failed: {err}");
                }
            }
        }
    }
}

/// Runs the search screen on the alternate screen, restoring the terminal
/// on the way out even when the event loop fails.
pub fn run_interactive() -> eyre::Result<()> {
    let mut terminal = setup_terminal()?;
    let res = App::new().run(&mut terminal);
    restore_terminal(&mut terminal)?;
    res
}

fn setup_terminal() -> eyre::Result<Terminal<CrosstermBackend<Stdout>>> {
    crossterm::terminal::enable_raw_mode().wrap_err("enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).wrap_err("enter alt screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).wrap_err("create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> eyre::Result<()> {
    crossterm::terminal::disable_raw_mode().wrap_err("disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .wrap_err("leave alt screen")?;
    Ok(())
}
