//! Tiny software rasteriser for placeholder art. Coverage is sampled at
//! pixel centres; everything is clipped to the image.

use image::{Rgba, RgbaImage};

pub type Rgba8 = [u8; 4];

/// 0xRRGGBB -> opaque RGBA.
pub const fn hex(rgb: u32) -> Rgba8 {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255]
}

pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba8) {
    let (iw, ih) = (img.width() as i32, img.height() as i32);
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(iw);
    let y1 = (y + h).min(ih);
    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px as u32, py as u32, Rgba(color));
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba8) {
    let r2 = r * r;
    for (px, py, p) in img.enumerate_pixels_mut() {
        let dx = px as f32 + 0.5 - cx;
        let dy = py as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= r2 {
            *p = Rgba(color);
        }
    }
}

/// Solid triangle (any winding).
pub fn fill_triangle(img: &mut RgbaImage, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba8) {
    fn edge(p: (f32, f32), q: (f32, f32), x: f32, y: f32) -> f32 {
        (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
    }
    let area = edge(a, b, c.0, c.1);
    if area.abs() < f32::EPSILON {
        return;
    }
    for (px, py, p) in img.enumerate_pixels_mut() {
        let (x, y) = (px as f32 + 0.5, py as f32 + 0.5);
        let w0 = edge(b, c, x, y) / area;
        let w1 = edge(c, a, x, y) / area;
        let w2 = edge(a, b, x, y) / area;
        if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
            *p = Rgba(color);
        }
    }
}

/// Disc lit from the upper left: darkens toward the rim and adds a specular spot.
pub fn shade_sphere(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, base: Rgba8) {
    let light = (-0.45_f32, -0.55_f32);
    for (px, py, p) in img.enumerate_pixels_mut() {
        let dx = (px as f32 + 0.5 - cx) / r;
        let dy = (py as f32 + 0.5 - cy) / r;
        let d2 = dx * dx + dy * dy;
        if d2 > 1.0 {
            continue;
        }
        let rim = 1.0 - 0.35 * d2;
        let sx = dx - light.0;
        let sy = dy - light.1;
        let highlight = (1.0 - (sx * sx + sy * sy) / 0.12).max(0.0).powi(2);
        let shade = |c: u8| -> u8 {
            let v = c as f32 * rim + 255.0 * highlight * 0.8;
            v.clamp(0.0, 255.0) as u8
        };
        *p = Rgba([shade(base[0]), shade(base[1]), shade(base[2]), base[3]]);
    }
}
