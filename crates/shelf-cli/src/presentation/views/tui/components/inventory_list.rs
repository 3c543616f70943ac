//! Inventory List Component
//!
//! Owns the selection and the per-row expand state. Mounting registers a
//! focus listener that refetches the inventory each time the list screen
//! becomes visible; dropping the component removes it.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListState, Paragraph},
};
use shelf_runtime::{FocusSubscription, InventoryStore, Navigator, Route};
use shelf_types::InventoryCollection;

use crate::presentation::view_models::InventoryScreenViewModel;
use crate::presentation::views::tui::ProductItemView;

const PAGE_SIZE: usize = 5;

/// UI state of one product row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemViewState {
    pub expanded: bool,
}

/// Row states keyed by product id.
#[derive(Debug, Default)]
pub struct RowStates {
    states: HashMap<String, ItemViewState>,
}

impl RowStates {
    /// Flip the expand flag of `id` and return the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let state = self.states.entry(id.to_string()).or_default();
        state.expanded = !state.expanded;
        state.expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.states.get(id).is_some_and(|state| state.expanded)
    }

    /// Forget rows whose product left the collection.
    pub fn retain_present(&mut self, inventory: &InventoryCollection) {
        self.states.retain(|id, _| inventory.contains_id(id));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Actions the list reports to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryAction {
    Refresh,
    ScanProduct,
    Toggled { id: String, expanded: bool },
}

pub struct InventoryListComponent {
    state: ListState,
    rows: RowStates,
    row_ids: Vec<String>,
    store: InventoryStore,
    navigator: Navigator,
    _focus: FocusSubscription,
}

impl InventoryListComponent {
    /// Create the component and subscribe it to inventory focus events.
    pub fn mount(store: &InventoryStore, navigator: &Navigator) -> Self {
        let focus_store = store.clone();
        let focus = navigator.on_focus(Route::Inventory, move || {
            focus_store.fetch_inventory();
        });

        Self {
            state: ListState::default(),
            rows: RowStates::default(),
            row_ids: Vec::new(),
            store: store.clone(),
            navigator: navigator.clone(),
            _focus: focus,
        }
    }

    /// Align UI state with the latest collection.
    pub fn sync(&mut self, inventory: &InventoryCollection) {
        self.rows.retain_present(inventory);
        self.row_ids = inventory.ids().map(str::to_string).collect();

        if self.row_ids.is_empty() {
            self.state.select(None);
            return;
        }

        let last = self.row_ids.len() - 1;
        match self.state.selected() {
            Some(idx) if idx > last => self.state.select(Some(last)),
            Some(_) => {}
            None => self.state.select(Some(0)),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.rows.is_expanded(id)
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<InventoryAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::PageUp => {
                self.move_selection(-(PAGE_SIZE as isize));
                None
            }
            KeyCode::PageDown => {
                self.move_selection(PAGE_SIZE as isize);
                None
            }
            KeyCode::Home => {
                if !self.row_ids.is_empty() {
                    self.state.select(Some(0));
                }
                None
            }
            KeyCode::End => {
                if !self.row_ids.is_empty() {
                    self.state.select(Some(self.row_ids.len() - 1));
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self.state.selected().and_then(|idx| self.row_ids.get(idx))?.clone();
                let expanded = self.rows.toggle(&id);
                Some(InventoryAction::Toggled { id, expanded })
            }
            KeyCode::Char('r') => {
                self.store.fetch_inventory();
                Some(InventoryAction::Refresh)
            }
            KeyCode::Char('s') => {
                self.navigator.navigate(Route::Camera);
                Some(InventoryAction::ScanProduct)
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, screen: &InventoryScreenViewModel) {
        let block = Block::default().borders(Borders::ALL);

        if screen.rows.is_empty() {
            let empty = Paragraph::new("No products to show.").block(block);
            f.render_widget(empty, area);
            return;
        }

        // Index safety
        if let Some(idx) = self.state.selected()
            && idx >= screen.rows.len()
        {
            self.state.select(Some(screen.rows.len() - 1));
        }

        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<_> = screen
            .rows
            .iter()
            .map(|row| ProductItemView::new(row).list_item(width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.row_ids.is_empty() {
            return;
        }
        let last = self.row_ids.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
    }
}
