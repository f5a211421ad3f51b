//! Window icon generator.
//!
//! Produces a procedural icon: a folder (the data directory) with a
//! capacity gauge across its front. Rendered at an arbitrary resolution as
//! RGBA pixel data suitable for use as a window icon.

/// Generate the icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Folder body and the tab sticking out of its upper-left edge.
    let body = RoundRect::new(s * 0.08, s * 0.28, s * 0.92, s * 0.86, s * 0.07);
    let tab = RoundRect::new(s * 0.08, s * 0.18, s * 0.46, s * 0.36, s * 0.05);
    // Capacity gauge: track and the "free" fill.
    let track = RoundRect::new(s * 0.18, s * 0.62, s * 0.82, s * 0.74, s * 0.06);
    let fill_right = s * (0.18 + 0.64 * 0.62);

    let tab_col = [0xd8, 0xb0, 0x5a];
    let body_top = [0xf9, 0xe2, 0xaf];
    let body_bottom = [0xe8, 0xc0, 0x70];
    let track_col = [0x1e, 0x1e, 0x2e];
    let fill_col = [0xa6, 0xe3, 0xa1];

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut col = [0u8; 3];
            let mut alpha = 0.0f32;

            let a_tab = tab.coverage(px, py);
            if a_tab > 0.0 {
                col = tab_col;
                alpha = a_tab;
            }

            let a_body = body.coverage(px, py);
            if a_body > 0.0 {
                // Vertical gradient, lighter at the top.
                let t = ((py - body.y0) / (body.y1 - body.y0)).clamp(0.0, 1.0);
                let shade = [
                    lerp_c(body_top[0], body_bottom[0], t),
                    lerp_c(body_top[1], body_bottom[1], t),
                    lerp_c(body_top[2], body_bottom[2], t),
                ];
                col = blend(col, shade, a_body);
                alpha = alpha + (1.0 - alpha) * a_body;
            }

            let a_track = track.coverage(px, py);
            if a_track > 0.0 {
                let c = if px < fill_right { fill_col } else { track_col };
                col = blend(col, c, a_track);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = col[0];
            pixels[idx + 1] = col[1];
            pixels[idx + 2] = col[2];
            pixels[idx + 3] = (alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Axis-aligned rectangle with rounded corners.
struct RoundRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    r: f32,
}

impl RoundRect {
    fn new(x0: f32, y0: f32, x1: f32, y1: f32, r: f32) -> Self {
        Self { x0, y0, x1, y1, r }
    }

    /// Anti-aliased coverage of the pixel centred at (`px`, `py`), 0..=1.
    fn coverage(&self, px: f32, py: f32) -> f32 {
        // Signed distance to the rounded rectangle.
        let cx = (self.x0 + self.x1) * 0.5;
        let cy = (self.y0 + self.y1) * 0.5;
        let hx = (self.x1 - self.x0) * 0.5 - self.r;
        let hy = (self.y1 - self.y0) * 0.5 - self.r;
        let qx = (px - cx).abs() - hx;
        let qy = (py - cy).abs() - hy;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        let dist = outside + inside - self.r;
        (0.5 - dist).clamp(0.0, 1.0)
    }
}

fn blend(under: [u8; 3], over: [u8; 3], t: f32) -> [u8; 3] {
    [
        lerp_c(under[0], over[0], t),
        lerp_c(under[1], over[1], t),
        lerp_c(under[2], over[2], t),
    ]
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
