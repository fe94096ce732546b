/// Keys the menu responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Previous item.
    ArrowUp,
    /// Previous item.
    ArrowLeft,
    /// Next item.
    ArrowDown,
    /// Next item.
    ArrowRight,
    /// Reload the active item.
    Enter,
    /// Reload the active item.
    Space,
}

impl NavKey {
    /// Map a DOM-style key name (`"ArrowUp"`, `"Enter"`, `" "`) to a menu key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowDown" => Self::ArrowDown,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " | "Space" => Self::Space,
            _ => return None,
        })
    }
}

/// What the page should do in response to menu input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Load and transition to the named section.
    Load(String),
}

/// Active and hovered menu items.
///
/// The cursor marker follows the hovered item and falls back to the active one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    sections: Vec<String>,
    active: Option<usize>,
    hovered: Option<usize>,
}

impl MenuState {
    /// Menu over `sections` with `initial` marked active when present.
    pub fn new(sections: Vec<String>, initial: &str) -> Self {
        let active = sections.iter().position(|s| s == initial);
        Self {
            sections,
            active,
            hovered: None,
        }
    }

    /// Section ids in menu order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Id of the active section.
    pub fn active_section(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    /// Item showing the cursor marker.
    pub fn cursor_index(&self) -> Option<usize> {
        self.hovered.or(self.active)
    }

    /// Activate item `index`. Clicking the active item reloads it.
    pub fn click(&mut self, index: usize) -> Option<NavAction> {
        let section = self.sections.get(index)?.clone();
        self.active = Some(index);
        self.hovered = None;
        Some(NavAction::Load(section))
    }

    /// Pointer entered item `index`.
    pub fn hover_enter(&mut self, index: usize) {
        if index < self.sections.len() {
            self.hovered = Some(index);
        }
    }

    /// Pointer left item `index`.
    pub fn hover_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Arrow keys move the active item (clamped at both ends); Enter/Space reload it.
    ///
    /// Returns `None` when nothing should load, including arrows pressed at the ends.
    pub fn handle_key(&mut self, key: NavKey) -> Option<NavAction> {
        let last = self.sections.len().checked_sub(1)?;
        match key {
            NavKey::ArrowUp | NavKey::ArrowLeft => {
                let next = self.active.map_or(0, |i| i.saturating_sub(1));
                self.move_to(next)
            }
            NavKey::ArrowDown | NavKey::ArrowRight => {
                let next = self.active.map_or(0, |i| (i + 1).min(last));
                self.move_to(next)
            }
            NavKey::Enter | NavKey::Space => self.active.and_then(|i| self.click(i)),
        }
    }

    fn move_to(&mut self, next: usize) -> Option<NavAction> {
        if self.active == Some(next) {
            return None;
        }
        self.click(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/menu.rs"]
mod tests;
