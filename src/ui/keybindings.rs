//! Keyboard shortcuts registry.
//!
//! Single source of truth for the browser's shortcuts. The help dialog and
//! the footer hints both read from `SHORTCUTS`.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g. an arrow key)
    pub alt_key: Option<KeyCode>,
    pub description: &'static str,
    pub category: ShortcutCategory,
    pub context: ShortcutContext,
}

/// Categories for grouping in the help dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    History,
}

/// Where a shortcut is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Sidebar or component list focused
    Browse,
    /// Search box focused
    Search,
    /// Detail page open
    Detail,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::History => "History",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::History,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Browse => "Browsing",
            ShortcutContext::Search => "In Search",
            ShortcutContext::Detail => "On Detail Page",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Browse,
            ShortcutContext::Search,
            ShortcutContext::Detail,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g. "q", "Tab", "j/↓")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Key column for the help dialog
    pub fn key_display_padded(&self) -> String {
        format!("{:<9}", self.key_display())
    }

    /// Does this shortcut fire for `code`?
    pub fn matches(&self, code: KeyCode) -> bool {
        self.key == code || self.alt_key == Some(code)
    }
}

fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Browse ===
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "Quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char('?'),
        alt_key: None,
        description: "Toggle help",
        category: ShortcutCategory::General,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char('/'),
        alt_key: None,
        description: "Search components",
        category: ShortcutCategory::General,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Tab,
        alt_key: Some(KeyCode::BackTab),
        description: "Switch between panels",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char('j'),
        alt_key: Some(KeyCode::Down),
        description: "Move down",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char('k'),
        alt_key: Some(KeyCode::Up),
        description: "Move up",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: None,
        description: "Select category / open component",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char('['),
        alt_key: None,
        description: "Back",
        category: ShortcutCategory::History,
        context: ShortcutContext::Browse,
    },
    Shortcut {
        key: KeyCode::Char(']'),
        alt_key: None,
        description: "Forward",
        category: ShortcutCategory::History,
        context: ShortcutContext::Browse,
    },
    // === Search ===
    Shortcut {
        key: KeyCode::Enter,
        alt_key: Some(KeyCode::Tab),
        description: "Jump to results",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Search,
    },
    Shortcut {
        key: KeyCode::Esc,
        alt_key: None,
        description: "Clear search, then leave search",
        category: ShortcutCategory::General,
        context: ShortcutContext::Search,
    },
    // === Detail ===
    Shortcut {
        key: KeyCode::Esc,
        alt_key: Some(KeyCode::Backspace),
        description: "Back to category",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Detail,
    },
    Shortcut {
        key: KeyCode::Char('['),
        alt_key: None,
        description: "Back",
        category: ShortcutCategory::History,
        context: ShortcutContext::Detail,
    },
    Shortcut {
        key: KeyCode::Char(']'),
        alt_key: None,
        description: "Forward",
        category: ShortcutCategory::History,
        context: ShortcutContext::Detail,
    },
];

/// Shortcuts active in a context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Grouped shortcuts by category
pub type GroupedByCategory = Vec<(ShortcutCategory, Vec<&'static Shortcut>)>;

/// Shortcuts for a context grouped by category, empty groups skipped
pub fn shortcuts_by_category_for_context(context: ShortcutContext) -> GroupedByCategory {
    ShortcutCategory::all()
        .iter()
        .filter_map(|category| {
            let shortcuts: Vec<&Shortcut> = shortcuts_for_context(context)
                .filter(|s| s.category == *category)
                .collect();
            (!shortcuts.is_empty()).then_some((*category, shortcuts))
        })
        .collect()
}

/// One-line footer hint for a context, e.g. "q Quit  ? Toggle help"
pub fn footer_hint(context: ShortcutContext) -> String {
    shortcuts_for_context(context)
        .map(|s| format!("{} {}", s.key_display(), s.description))
        .collect::<Vec<_>>()
        .join("  ")
}
