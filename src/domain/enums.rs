use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Category tag owned by an item, controls its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Health,
    Learning,
    Errands,
}

impl Default for Category {
    fn default() -> Self {
        Self::Personal
    }
}

impl Category {
    /// Display color for this category
    pub fn color(&self) -> Color {
        match self {
            Self::Work => Color::Blue,
            Self::Personal => Color::Magenta,
            Self::Health => Color::Green,
            Self::Learning => Color::Yellow,
            Self::Errands => Color::Cyan,
        }
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Learning => "Learning",
            Self::Errands => "Errands",
        }
    }

    /// Get all categories as a list
    pub fn all() -> &'static [Category] {
        &[
            Category::Work,
            Category::Personal,
            Category::Health,
            Category::Learning,
            Category::Errands,
        ]
    }

    /// Next category in display order (wraps around)
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous category in display order (wraps around)
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    TaskForm,
    ItemForm,
}

/// Which pane receives navigation keys in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Items,
    Tasks,
}
