//! TUI Renderer for the inventory browser
//!
//! This module implements the TUI event loop and screen rendering.
//!
//! ## Design:
//! - Renderer owns UI state through components (selection, row expansion)
//! - Renderer does NOT own data: every frame starts from a store snapshot
//! - Uses View widgets to render the screen
//! - Routes keyboard input by the navigator's current route

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};
use shelf_core::DateClassifier;
use shelf_runtime::{InventoryStore, Navigator, Route, StoreEvent};

use crate::presentation::presenters::{present_capture_screen, present_inventory_screen};
use crate::presentation::view_models::CaptureScreenViewModel;
use crate::presentation::views::tui::components::InventoryListComponent;
use crate::presentation::views::tui::{CaptureView, HeaderView, StatusBarView};

const TICK: Duration = Duration::from_millis(100);

pub struct InventoryTui {
    store: InventoryStore,
    navigator: Navigator,
    classifier: DateClassifier,

    /// Store notifications, drained once per tick
    store_events: Receiver<StoreEvent>,

    /// Inventory list component (owns selection and expand state)
    list: InventoryListComponent,

    capture: CaptureScreenViewModel,

    should_quit: bool,
}

impl InventoryTui {
    pub fn new(store: InventoryStore, navigator: Navigator, classifier: DateClassifier) -> Self {
        let store_events = store.subscribe();
        let list = InventoryListComponent::mount(&store, &navigator);

        Self {
            store,
            navigator,
            classifier,
            store_events,
            list,
            capture: present_capture_screen(),
            should_quit: false,
        }
    }

    /// Show the inventory screen; its focus listener starts the first fetch.
    pub fn start(&self) {
        self.navigator.navigate(Route::Inventory);
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up terminal in raw mode
    /// 2. Focuses the inventory screen
    /// 3. Handles keyboard input and store notifications
    /// 4. Cleans up terminal on exit
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Set up Ctrl+C handler to restore terminal
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        self.start();
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.drain_store_events();

            terminal.draw(|f| self.render(f))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn drain_store_events(&mut self) {
        while let Ok(store_event) = self.store_events.try_recv() {
            tracing::trace!(?store_event, "store event");
        }
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.navigator.current() {
            Some(Route::Camera) => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q')
                ) {
                    self.navigator.go_back();
                }
            }
            _ => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {
                    if let Some(action) = self.list.handle_input(key) {
                        tracing::debug!(?action, "inventory action");
                    }
                }
            },
        }
    }

    /// Render the current route using Views
    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        if self.navigator.current() == Some(Route::Camera) {
            f.render_widget(CaptureView::new(&self.capture), size);
            return;
        }

        let snapshot = self.store.snapshot();
        self.list.sync(&snapshot.inventory);
        let list = &self.list;
        let screen = present_inventory_screen(&snapshot, &self.classifier, |id| {
            list.is_expanded(id)
        });

        // Main layout: [Header | Product list | Status bar]
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(size);

        f.render_widget(HeaderView::new(&screen), chunks[0]);
        self.list.render(f, chunks[1], &screen);
        f.render_widget(StatusBarView::new(&screen), chunks[2]);
    }
}
