//! System tray icon that renders bookmark menu descriptors.
//!
//! Every attach builds a brand new native menu and swaps it in. Item ids are
//! the string form of their [`MenuAction`] so click events can be routed
//! without keeping a lookup table.

use crate::{AppError, AppResult, menu_icons};

use std::panic::Location;

use error_location::ErrorLocation;
use folder_tray_core::{CoreError, CoreResult, MenuAction, MenuDescriptor, MenuEntry, MenuSink};
use tracing::{debug, info, instrument};
use tray_icon::menu::{IconMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TOOLTIP: &str = "Folder Tray";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
}

impl TrayManager {
    /// Create the tray icon with an empty menu.
    ///
    /// Must run on the event loop thread after the loop has started.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let icon = Self::load_icon()?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP)
            .with_menu(Box::new(Menu::new()))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self { tray_icon })
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon() -> AppResult<Icon> {
        let png_bytes: &[u8] = include_bytes!("../resources/icons/tray.png");

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl MenuSink for TrayManager {
    #[instrument(skip(self, menu), fields(entries = menu.entries.len()))]
    fn attach(&mut self, menu: MenuDescriptor) -> CoreResult<()> {
        let native = Menu::new();

        for entry in &menu.entries {
            let item = build_entry(entry)?;
            native
                .append(item.as_ref())
                .map_err(|e| attach_failed(format!("Failed to append menu entry: {}", e)))?;
        }

        self.tray_icon.set_menu(Some(Box::new(native)));

        debug!("Tray menu replaced");

        Ok(())
    }
}

fn build_entry(entry: &MenuEntry) -> CoreResult<Box<dyn IsMenuItem>> {
    match entry {
        MenuEntry::Separator => Ok(Box::new(PredefinedMenuItem::separator())),
        MenuEntry::Item(item) => {
            let id = item
                .action
                .as_ref()
                .map(MenuAction::menu_id)
                .unwrap_or_else(|| item.label.clone());

            match item.icon.and_then(menu_icons::menu_icon) {
                Some(icon) => Ok(Box::new(IconMenuItem::with_id(
                    id,
                    &item.label,
                    item.enabled,
                    Some(icon),
                    None,
                ))),
                None => Ok(Box::new(MenuItem::with_id(
                    id,
                    &item.label,
                    item.enabled,
                    None,
                ))),
            }
        }
        MenuEntry::Submenu(sub) => {
            let native = Submenu::new(&sub.label, true);
            for child in &sub.entries {
                let item = build_entry(child)?;
                native.append(item.as_ref()).map_err(|e| {
                    attach_failed(format!("Failed to append to '{}': {}", sub.label, e))
                })?;
            }
            Ok(Box::new(native))
        }
    }
}

#[track_caller]
fn attach_failed(reason: String) -> CoreError {
    CoreError::MenuAttachFailed {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
