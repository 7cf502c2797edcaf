use image::{GrayImage, Luma};
use imageproc::drawing::draw_hollow_circle_mut;

/// Draw a circle outline `thickness` pixels wide, centred on `radius`.
///
/// Pixels whose rounded distance from the centre falls in
/// `[radius - thickness / 2, radius - thickness / 2 + thickness)` are set.
/// Parts outside the image are clipped.
pub fn draw_circle_outline_mut(
    image: &mut GrayImage,
    center: (i32, i32),
    radius: i32,
    thickness: i32,
    value: u8,
) {
    if thickness <= 1 {
        draw_hollow_circle_mut(image, center, radius.max(0), Luma([value]));
        return;
    }

    let inner = (radius - thickness / 2).max(0);
    let outer = radius - thickness / 2 + thickness;
    let (width, height) = (image.width() as i32, image.height() as i32);
    let (cx, cy) = center;

    for y in (cy - outer).max(0)..=(cy + outer).min(height - 1) {
        for x in (cx - outer).max(0)..=(cx + outer).min(width - 1) {
            let (dx, dy) = ((x - cx) as f32, (y - cy) as f32);
            let d = (dx * dx + dy * dy).sqrt().round() as i32;
            if d >= inner && d < outer {
                image.put_pixel(x as u32, y as u32, Luma([value]));
            }
        }
    }
}
