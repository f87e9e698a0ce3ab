//! Keyboard routing for the catalog screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Dialog, Focus};

impl App {
    /// Route a key press to the focused component.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        self.mark_dirty();

        if self.dialog.as_ref().is_some_and(Dialog::is_modal) {
            self.handle_dialog_key(key);
            return;
        }
        // Any key dismisses a toast early and is then handled normally.
        if self.dialog.is_some() {
            self.dialog = None;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Insert pasted text into the code input.
    pub fn paste(&mut self, text: &str) {
        self.focus = Focus::Input;
        let raw = format!("{}{}", self.product_code, text);
        self.on_input_change(&raw);
        self.mark_dirty();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let confirming = matches!(self.dialog, Some(Dialog::ConfirmDelete { .. }));
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter if confirming => {
                self.resolve_confirmation(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc if confirming => {
                self.resolve_confirmation(false);
            }
            KeyCode::Enter | KeyCode::Esc => self.dismiss_dialog(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_product(),
            KeyCode::Esc => self.clear_form(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Tab | KeyCode::Down => self.toggle_focus(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.type_char(c);
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.toggle_focus(),
            KeyCode::Up if self.selected == 0 => self.toggle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_selected(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
