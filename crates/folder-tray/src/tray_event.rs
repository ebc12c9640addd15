use tray_icon::menu::MenuEvent;

/// Events forwarded into the main event loop.
///
/// Menu clicks arrive on the toolkit's callback and are re-posted through
/// the loop proxy so every handler runs on the thread that owns the tray.
#[derive(Debug)]
pub enum TrayEvent {
    /// A tray menu item was clicked.
    Menu(MenuEvent),
}
