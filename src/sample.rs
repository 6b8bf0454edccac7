use image::{Rgba, RgbaImage};

// Deterministic placeholder artwork: a teal-to-indigo disc with a white rounded badge
// in the middle, transparent outside the disc.
pub fn render_sample(size: u32) -> RgbaImage {
    let s = size as f32;
    let c = s * 0.5;
    let radius = s * 0.46;
    let badge_half = s * 0.18;
    let badge_corner = s * 0.06;

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dist = ((px - c).powi(2) + (py - c).powi(2)).sqrt();
        if dist > radius {
            return Rgba([0, 0, 0, 0]);
        }
        if in_rounded_square(px - c, py - c, badge_half, badge_corner) {
            return Rgba([255, 255, 255, 255]);
        }
        // diagonal blend, darkened towards the rim
        let t = ((px + py) / (2.0 * s)).clamp(0.0, 1.0);
        let shade = 1.0 - 0.35 * (dist / radius);
        Rgba([
            (lerp(20.0, 80.0, t) * shade) as u8,
            (lerp(170.0, 60.0, t) * shade) as u8,
            (lerp(160.0, 210.0, t) * shade) as u8,
            255,
        ])
    })
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn in_rounded_square(dx: f32, dy: f32, half: f32, corner: f32) -> bool {
    let qx = dx.abs() - (half - corner);
    let qy = dy.abs() - (half - corner);
    if qx <= 0.0 || qy <= 0.0 {
        return qx <= corner && qy <= corner;
    }
    qx * qx + qy * qy <= corner * corner
}
