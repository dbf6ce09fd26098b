//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::SortField;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Keys typed into the search box are
/// handled by the search input before these bindings are consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Vim-style and arrow navigation
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::MoveDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::MoveUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::MoveDown);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::MoveUp);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::MoveToTop);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::MoveToTop);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::MoveToBottom);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::MoveToBottom);

        // Page navigation
        bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Selection and focus
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::OpenDetail);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CloseDetail);
        bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::CloseDetail);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Subcommand filter
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextFilter);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevFilter);
        bind(KeyCode::Char('0'), KeyModifiers::NONE, KeyAction::ResetFilter);

        // Sorting
        bind(
            KeyCode::Char('t'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Timestamp),
        );
        bind(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Command),
        );
        bind(
            KeyCode::Char('u'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Subcommand),
        );
        bind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Args),
        );
        bind(
            KeyCode::Char('d'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Duration),
        );
        bind(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Status),
        );

        // Application controls
        bind(KeyCode::Char('v'), KeyModifiers::NONE, KeyAction::ToggleChart);
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Reload);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);

        Self { bindings }
    }
}
