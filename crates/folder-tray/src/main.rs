//! Folder Tray: bookmark folders and open them from the system tray.

mod app;
mod config;
mod error;
mod folder_picker;
mod menu_icons;
mod notifier;
mod tray_event;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    folder_picker::RfdFolderPicker,
    notifier::{DesktopNotifier, Notifier},
    tray_event::TrayEvent,
    tray_manager::TrayManager,
};

use crate::config::Config;

use folder_tray_core::{
    ActionDispatcher, AppContext, BookmarkStore, JsonFileStore, Outcome, Platform, SystemLauncher,
};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tray_icon::menu::MenuEvent;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("folder_tray=debug,folder_tray_core=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayEvent>::with_user_event().build();

    // Menu clicks are delivered on the toolkit's callback; re-post them so
    // handlers run inside the loop, one at a time.
    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_proxy.send_event(TrayEvent::Menu(event));
    }));

    // Created on Init: the tray icon must be built after the loop starts and
    // stays on this thread (TrayIcon is !Send).
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let store_path = match Config::store_path() {
                    Ok(p) => p,
                    Err(e) => {
                        error!("Failed to resolve store path: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let tray_manager = match TrayManager::new() {
                    Ok(tm) => tm,
                    Err(e) => {
                        error!("Failed to create TrayManager: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let ctx = AppContext::new(
                    BookmarkStore::new(JsonFileStore::new(store_path)),
                    RfdFolderPicker,
                    ActionDispatcher::new(config.command_table(), SystemLauncher),
                    tray_manager,
                    Platform::current(),
                );

                let mut started = App::new(ctx, DesktopNotifier, &config);
                if let Err(e) = started.start() {
                    error!("Failed to build tray menu: {:?}", e);
                    std::process::exit(1);
                }
                app = Some(started);
            }
            Event::UserEvent(TrayEvent::Menu(event)) => {
                if let Some(app) = app.as_mut()
                    && app.handle_menu_event(&event.id.0) == Outcome::Quit
                {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            _ => {}
        }
    });
}
