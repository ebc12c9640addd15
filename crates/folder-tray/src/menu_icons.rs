//! Small generated glyphs for tray menu entries.

use folder_tray_core::MenuIcon;
use tray_icon::menu::Icon;

const SIZE: u32 = 16;

/// RGBA fill colour for each glyph.
fn colour(icon: MenuIcon) -> [u8; 4] {
    match icon {
        MenuIcon::Folder => [0xf2, 0xb1, 0x34, 0xff],
        MenuIcon::Code => [0x8e, 0x44, 0xad, 0xff],
        MenuIcon::Terminal => [0x34, 0x3a, 0x40, 0xff],
        MenuIcon::Remove => [0xd6, 0x33, 0x3a, 0xff],
        MenuIcon::Add => [0x2e, 0xa0, 0x43, 0xff],
        MenuIcon::Close => [0x86, 0x8e, 0x96, 0xff],
    }
}

/// Filled disc in the glyph's colour, transparent outside.
pub(crate) fn rgba(icon: MenuIcon) -> Vec<u8> {
    let [r, g, b, a] = colour(icon);
    let centre = (SIZE as f32 - 1.0) / 2.0;
    let radius = SIZE as f32 / 2.0 - 1.0;

    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - centre;
            let dy = y as f32 - centre;
            if dx * dx + dy * dy <= radius * radius {
                pixels.extend_from_slice(&[r, g, b, a]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    pixels
}

/// Menu icon for `icon`, or `None` if the platform rejects the bitmap.
pub(crate) fn menu_icon(icon: MenuIcon) -> Option<Icon> {
    Icon::from_rgba(rgba(icon), SIZE, SIZE).ok()
}
