//! Main TUI application state and logic

use crate::engine::delay::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::engine::{Algorithm, Controller, EngineEvent, RunStats, RunStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::ThreadRng;
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 160;
pub const DEFAULT_SIZE: usize = 50;
const SIZE_STEP: usize = 10;

// Bar value range, matching the visual proportions the bars were tuned for.
const VALUE_MIN: u32 = 20;
const VALUE_MAX: u32 = 330;

/// The main application state
pub struct App {
    controller: Controller,
    events: Receiver<EngineEvent>,
    rng: ThreadRng,

    /// Last published array state (or the freshly generated array).
    pub values: Vec<u32>,

    /// Index roles from the most recent frame
    pub compared: Vec<usize>,
    pub touched: Vec<usize>,
    pub finalized: Vec<usize>,

    pub stats: RunStats,
    pub status: RunStatus,
    pub status_message: String,

    pub algorithm: Algorithm,
    pub size: usize,
    pub speed: u8,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app with a freshly generated array of `size` values.
    pub fn new(size: usize) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut app = App {
            controller: Controller::new(sender),
            events: receiver,
            rng: rand::thread_rng(),
            values: Vec::new(),
            compared: Vec::new(),
            touched: Vec::new(),
            finalized: Vec::new(),
            stats: RunStats::new(),
            status: RunStatus::Idle,
            status_message: String::from("Ready"),
            algorithm: Algorithm::Bubble,
            size: size.clamp(MIN_SIZE, MAX_SIZE),
            speed: DEFAULT_SPEED,
            should_quit: false,
        };
        app.generate_array();
        app.status_message = String::from("Ready");
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.drain_events();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so engine events keep flowing while idle.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply everything the engine published since the last tick.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                EngineEvent::Step(frame) => {
                    self.values = frame.values;
                    self.compared = frame.compared;
                    self.touched = frame.touched;
                    self.finalized = frame.finalized;
                }
                EngineEvent::Stats(stats) => self.stats = stats,
                EngineEvent::Status(status) => self.apply_status(status),
            }
        }
    }

    fn apply_status(&mut self, status: RunStatus) {
        self.status = status;
        self.status_message = String::from(match status {
            RunStatus::Idle => "Ready",
            RunStatus::Running => "Sorting...",
            RunStatus::Stopped => "Stopped",
            RunStatus::Done => "Done",
        });
        if matches!(status, RunStatus::Stopped | RunStatus::Done) {
            self.compared.clear();
            self.touched.clear();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_info_pane(
            frame,
            chunks[0],
            self.algorithm,
            self.status,
            &self.status_message,
            self.stats,
            self.size,
            self.speed,
        );

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            &self.values,
            &self.compared,
            &self.touched,
            &self.finalized,
            self.algorithm.label(),
        );

        super::panes::render_status_bar(frame, chunks[2], self.status);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let running = self.controller.is_running();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start_run();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if running {
                    self.controller.stop();
                    self.status_message = String::from("Stopping...");
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.generate_array();
            }
            KeyCode::Tab => {
                if !running {
                    self.select_algorithm(self.algorithm.next());
                }
            }
            KeyCode::BackTab => {
                if !running {
                    self.select_algorithm(self.algorithm.prev());
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                if !running {
                    let idx = c.to_digit(10).unwrap() as usize - 1;
                    self.select_algorithm(Algorithm::ALL[idx]);
                }
            }
            KeyCode::Left => {
                if !running && self.speed > MIN_SPEED {
                    self.speed -= 1;
                }
            }
            KeyCode::Right => {
                if !running && self.speed < MAX_SPEED {
                    self.speed += 1;
                }
            }
            KeyCode::Up => {
                if !running && self.size < MAX_SIZE {
                    self.size = (self.size + SIZE_STEP).min(MAX_SIZE);
                    self.generate_array();
                }
            }
            KeyCode::Down => {
                if !running && self.size > MIN_SIZE {
                    self.size = self.size.saturating_sub(SIZE_STEP).max(MIN_SIZE);
                    self.generate_array();
                }
            }
            _ => {}
        }
    }

    /// Start a run over the current array. The controller silently rejects
    /// this while a run is active or the array is empty.
    fn start_run(&mut self) {
        if self.controller.is_running() || self.values.is_empty() {
            return;
        }
        self.compared.clear();
        self.touched.clear();
        self.finalized.clear();
        self.controller.start(&self.values, self.algorithm, self.speed);
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.compared.clear();
        self.touched.clear();
        self.finalized.clear();
        self.status = RunStatus::Idle;
        self.status_message = String::from("Ready");
    }

    /// Replace the working array with fresh random values. Inert while a
    /// run is active.
    fn generate_array(&mut self) {
        if self.controller.is_running() {
            return;
        }
        self.values = (0..self.size)
            .map(|_| self.rng.gen_range(VALUE_MIN..=VALUE_MAX))
            .collect();
        self.compared.clear();
        self.touched.clear();
        self.finalized.clear();
        self.stats = RunStats::new();
        self.status = RunStatus::Idle;
        self.status_message = String::from("New array");
    }
}
