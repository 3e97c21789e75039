// App state and main event loop.
// Manages pages, the project pass lifecycle, and keyboard input handling.

use std::io;
use std::sync::Arc;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

use crate::aggregate::{Aggregator, Pass};
use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::github::{GitHubClient, RateLimit};
use crate::records::{Timeline, load_timeline};
use crate::state::{ModalState, ProjectsState, SidebarState};
use crate::ui;

/// Active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Portfolio,
    Resume,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Portfolio, Page::Resume];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Portfolio => "Portfolio",
            Page::Resume => "Resume",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Page::Portfolio => Page::Resume,
            Page::Resume => Page::Portfolio,
        }
    }

    pub fn prev(&self) -> Self {
        // Two pages: previous and next coincide
        self.next()
    }
}

/// Main application state.
pub struct App {
    /// Currently active page.
    pub active_page: Page,
    pub projects: ProjectsState,
    pub timeline: Timeline,
    pub sidebar: SidebarState,
    pub modal: ModalState,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    config: Config,
    client: Arc<GitHubClient>,
    aggregator: Arc<Aggregator>,
    runtime: Handle,
    pass_tx: UnboundedSender<Result<Pass>>,
    pass_rx: UnboundedReceiver<Result<Pass>>,
}

impl App {
    pub fn new(
        config: Config,
        client: Arc<GitHubClient>,
        aggregator: Arc<Aggregator>,
        runtime: Handle,
    ) -> Self {
        let (pass_tx, pass_rx) = mpsc::unbounded_channel();
        let timeline = load_timeline(&config.data_dir);

        Self {
            active_page: Page::default(),
            projects: ProjectsState::new(),
            timeline,
            sidebar: SidebarState::default(),
            modal: ModalState::default(),
            show_help: false,
            should_quit: false,
            config,
            client,
            aggregator,
            runtime,
            pass_tx,
            pass_rx,
        }
    }

    /// GitHub quota as of the last response.
    pub fn rate_limit(&self) -> RateLimit {
        self.client.rate_limit()
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.start_pass();
        while !self.should_quit {
            self.receive_pass();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Start an aggregation pass in the background unless one is running.
    pub fn start_pass(&mut self) {
        if self.aggregator.is_running() {
            info!("Ignoring reload: a pass is already running");
            return;
        }

        self.projects.set_loading();
        let aggregator = self.aggregator.clone();
        let projects_path = self.config.projects_path();
        let store = self.config.store();
        let ttl = self.config.ttl;
        let tx = self.pass_tx.clone();

        self.runtime.spawn(async move {
            let result = aggregator
                .run_pass(&projects_path, store, ttl, Utc::now())
                .await;
            let _ = tx.send(result);
        });
    }

    /// Install a finished pass, if one arrived.
    fn receive_pass(&mut self) {
        while let Ok(result) = self.pass_rx.try_recv() {
            match result {
                Ok(pass) => self.projects.apply_pass(&pass, Utc::now()),
                Err(FolioError::PassInFlight) => info!("Pass already in flight"),
                Err(e) => {
                    error!("Project pass failed: {}", e);
                    self.projects.apply_failure(&e);
                }
            }
            self.modal.close();
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.modal.open {
            if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.modal.close();
            }
            return;
        }

        if self.projects.select.open {
            match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.projects.select.move_cursor(&self.projects.filter, false)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.projects.select.move_cursor(&self.projects.filter, true)
                }
                KeyCode::Enter => self.projects.choose_from_select(),
                KeyCode::Esc | KeyCode::Char('f') => self.projects.select.open = false,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('s') => self.sidebar.toggle(),
            KeyCode::Tab => self.active_page = self.active_page.next(),
            KeyCode::BackTab => self.active_page = self.active_page.prev(),
            _ if self.active_page == Page::Portfolio => self.handle_portfolio_key(code),
            _ => {}
        }
    }

    fn handle_portfolio_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.projects.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.projects.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.projects.prev_filter(),
            KeyCode::Right | KeyCode::Char('l') => self.projects.next_filter(),
            KeyCode::Char('f') => self.projects.select.toggle(&self.projects.filter),
            KeyCode::Enter => self.modal.show(self.projects.selected_node()),
            KeyCode::Char('r') => self.start_pass(),
            _ => {}
        }
    }
}
