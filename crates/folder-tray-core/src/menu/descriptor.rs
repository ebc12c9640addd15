use crate::MenuAction;

/// Glyph shown next to a menu entry. Hosts pick the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    /// Open in file manager.
    Folder,
    /// Open in editor.
    Code,
    /// Open in terminal.
    Terminal,
    /// Remove bookmark.
    Remove,
    /// Add new folder.
    Add,
    /// Close app.
    Close,
}

/// A clickable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Visible text.
    pub label: String,
    /// Optional glyph.
    pub icon: Option<MenuIcon>,
    /// Click handler binding.
    pub action: Option<MenuAction>,
    /// Whether the entry accepts clicks.
    pub enabled: bool,
}

impl MenuItem {
    /// Enabled item bound to `action`.
    pub fn new(label: impl Into<String>, icon: MenuIcon, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            icon: Some(icon),
            action: Some(action),
            enabled: true,
        }
    }
}

/// A nested menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    /// Visible text.
    pub label: String,
    /// Child entries.
    pub entries: Vec<MenuEntry>,
}

/// One row of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable item.
    Item(MenuItem),
    /// Nested menu.
    Submenu(Submenu),
    /// Horizontal rule.
    Separator,
}

/// Complete tray menu, regenerated on every rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDescriptor {
    /// Top-level entries in display order.
    pub entries: Vec<MenuEntry>,
}

impl MenuDescriptor {
    /// Every bound action, depth first.
    pub fn actions(&self) -> Vec<MenuAction> {
        fn collect(entries: &[MenuEntry], out: &mut Vec<MenuAction>) {
            for entry in entries {
                match entry {
                    MenuEntry::Item(item) => out.extend(item.action),
                    MenuEntry::Submenu(sub) => collect(&sub.entries, out),
                    MenuEntry::Separator => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.entries, &mut out);
        out
    }

    /// Top-level bookmark submenus.
    pub fn submenus(&self) -> impl Iterator<Item = &Submenu> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Submenu(sub) => Some(sub),
            _ => None,
        })
    }
}
