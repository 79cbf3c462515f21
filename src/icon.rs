use crate::layout::{IconLayout, Rect};
use image::{Rgba, RgbaImage};

/// Professional blue, also used for the handle cut-out.
pub const BACKGROUND: Rgba<u8> = Rgba([41, 128, 185, 255]);
pub const DRAWER_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const DISPLAY_FILL: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Render the point-of-sale icon at the given square size: a white cash
/// drawer near the bottom with a handle cut out of its center, and a gray
/// display panel at the top, on a blue background.
pub fn render_pos_icon(size: u32) -> RgbaImage {
    let layout = IconLayout::new(size);
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    // Cash drawer body, outlined in black.
    fill_rect(&mut img, layout.drawer, DRAWER_FILL);
    outline_rect(&mut img, layout.drawer, layout.outline_px, OUTLINE);

    // Handle, filled with the background color so it reads as a cut-out.
    fill_rect(&mut img, layout.handle, BACKGROUND);

    // Display panel.
    fill_rect(&mut img, layout.display, DISPLAY_FILL);
    outline_rect(&mut img, layout.display, layout.outline_px, OUTLINE);

    img
}

/// Fill a rectangle, clamped to the canvas bounds.
fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let x1 = rect.right().min(img.width());
    let y1 = rect.bottom().min(img.height());
    for y in rect.y..y1 {
        for x in rect.x..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw a border of the given thickness growing inward from the
/// rectangle's edges.
fn outline_rect(img: &mut RgbaImage, rect: Rect, thickness: u32, color: Rgba<u8>) {
    let t = thickness.min(rect.w).min(rect.h);

    fill_rect(img, Rect::new(rect.x, rect.y, rect.w, t), color);
    fill_rect(img, Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
    fill_rect(img, Rect::new(rect.x, rect.y, t, rect.h), color);
    fill_rect(img, Rect::new(rect.right() - t, rect.y, t, rect.h), color);
}
