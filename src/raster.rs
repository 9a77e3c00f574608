// The persistent pixel buffer strokes are committed to, plus the software
// drawing primitives that commit them.
// Visual effects provided here:
// 1) Thick round-capped stroke segments (the brush).
// 2) Filled dots (degenerate strokes and the guide dots).
// 3) The per-frame content shift that produces the drift smear.

use crate::palette::Rgb;

/// The raster surface: one `u32` per pixel, 0x00RRGGBB, row-major.
/// This is the only persistent mutable state in the whole program.
#[derive(Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Raster {
    /// A surface filled with `background`. Dimensions are validated by the
    /// config layer before this is reached.
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.pack(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw buffer in the layout minifb presents directly.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x,y), or None outside the surface.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Blank the whole surface to one color.
    /// Visual: everything painted so far disappears.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.pack());
    }

    /// Put a pixel if (x,y) is inside bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    /// Filled disc centered at (cx,cy).
    /// Visual: a solid round dot; this is what a click-without-drag leaves.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        let r = radius.max(1);
        let r2 = r * r;
        let packed = color.pack();
        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(x, y, packed);
                }
            }
        }
    }

    /// Thick stroke segment from (x0,y0) to (x1,y1) with round caps,
    /// stamped as discs roughly every pixel along the segment.
    /// Visual: a solid painted line; a zero-length segment collapses to the
    /// same dot `fill_disc` draws, so it is still visible.
    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: u32, color: Rgb) {
        let radius = ((width / 2) as i32).max(1);
        let dx = x1 - x0;
        let dy = y1 - y0;
        let dist = (dx * dx + dy * dy).sqrt();
        let steps = dist.ceil().max(1.0) as i32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (x0 + dx * t).round() as i32;
            let y = (y0 + dy * t).round() as i32;
            self.fill_disc(x, y, radius, color);
        }
    }

    /// Translate the whole content by (dx,dy); vacated pixels become
    /// `background`. One call per frame is the drift pass.
    /// Visual: the image creeps across the surface, one step per call.
    pub fn shift(&mut self, dx: i32, dy: i32, background: Rgb) {
        let bg = background.pack();
        let w = self.width as i32;
        let h = self.height as i32;
        if dx.abs() >= w || dy.abs() >= h {
            self.pixels.fill(bg);
            return;
        }

        // Horizontal extent of each copied row.
        let row_len = (w - dx.abs()) as usize;
        let (src_x, dst_x) = if dx >= 0 { (0usize, dx as usize) } else { ((-dx) as usize, 0usize) };

        // Copy rows in an order that never reads a row already overwritten.
        // `copy_within` is a memmove, so the dy == 0 overlap is fine too.
        let rows: Vec<i32> = if dy > 0 {
            (dy..h).rev().collect()
        } else {
            (0..h + dy).collect()
        };
        for dst_y in rows {
            let src_y = dst_y - dy;
            let src = (src_y as usize) * self.width + src_x;
            let dst = (dst_y as usize) * self.width + dst_x;
            self.pixels.copy_within(src..src + row_len, dst);
            // Vacated horizontal strip of this row
            let row_start = (dst_y as usize) * self.width;
            if dx > 0 {
                self.pixels[row_start..row_start + dx as usize].fill(bg);
            } else if dx < 0 {
                self.pixels[row_start + row_len..row_start + self.width].fill(bg);
            }
        }

        // Fully vacated rows at the edge the content moved away from.
        if dy > 0 {
            self.pixels[..(dy as usize) * self.width].fill(bg);
        } else if dy < 0 {
            let start = ((h + dy) as usize) * self.width;
            self.pixels[start..].fill(bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const RED: Rgb = Rgb::new(0xef, 0x13, 0x0b);

    fn blank(w: usize, h: usize) -> Raster {
        Raster::new(w, h, WHITE)
    }

    #[test]
    fn new_surface_is_background() {
        let r = blank(8, 4);
        assert!(r.pixels().iter().all(|&p| p == WHITE.pack()));
        assert_eq!(r.get(7, 3), Some(WHITE.pack()));
        assert_eq!(r.get(8, 3), None);
        assert_eq!(r.get(-1, 0), None);
    }

    #[test]
    fn disc_is_visible_and_bounded() {
        let mut r = blank(20, 20);
        r.fill_disc(10, 10, 2, RED);
        assert_eq!(r.get(10, 10), Some(RED.pack()));
        assert_eq!(r.get(12, 10), Some(RED.pack()));
        assert_eq!(r.get(13, 10), Some(WHITE.pack()));
    }

    #[test]
    fn disc_clips_at_surface_edge() {
        let mut r = blank(10, 10);
        r.fill_disc(0, 0, 3, RED);
        assert_eq!(r.get(0, 0), Some(RED.pack()));
        assert_eq!(r.get(9, 9), Some(WHITE.pack()));
    }

    #[test]
    fn stroke_covers_both_endpoints() {
        let mut r = blank(100, 40);
        r.stroke_line(10.0, 20.0, 80.0, 20.0, 10, RED);
        assert_eq!(r.get(10, 20), Some(RED.pack()));
        assert_eq!(r.get(45, 20), Some(RED.pack()));
        assert_eq!(r.get(80, 20), Some(RED.pack()));
        // Round cap extends half a width past the endpoint
        assert_eq!(r.get(84, 20), Some(RED.pack()));
        assert_eq!(r.get(90, 20), Some(WHITE.pack()));
    }

    #[test]
    fn zero_length_stroke_draws_a_dot() {
        let mut r = blank(40, 40);
        r.stroke_line(20.0, 20.0, 20.0, 20.0, 10, RED);
        assert_eq!(r.get(20, 20), Some(RED.pack()));
        assert_eq!(r.get(24, 20), Some(RED.pack()));
        assert_eq!(r.get(26, 20), Some(WHITE.pack()));
    }

    #[test]
    fn shift_displaces_content_by_exactly_n_steps() {
        let mut r = blank(50, 30);
        r.put_pixel(5, 7, RED.pack());
        for _ in 0..12 {
            r.shift(1, 0, WHITE);
        }
        assert_eq!(r.get(17, 7), Some(RED.pack()));
        assert_eq!(r.get(5, 7), Some(WHITE.pack()));
        // Exactly one red pixel survives
        let red_count = r.pixels().iter().filter(|&&p| p == RED.pack()).count();
        assert_eq!(red_count, 1);
    }

    #[test]
    fn shift_drops_content_off_the_far_edge() {
        let mut r = blank(10, 10);
        r.put_pixel(8, 4, RED.pack());
        for _ in 0..3 {
            r.shift(1, 0, WHITE);
        }
        assert!(r.pixels().iter().all(|&p| p == WHITE.pack()));
    }

    #[test]
    fn shift_handles_negative_and_vertical_vectors() {
        let mut r = blank(20, 20);
        r.put_pixel(10, 10, RED.pack());
        r.shift(-3, 0, WHITE);
        assert_eq!(r.get(7, 10), Some(RED.pack()));
        r.shift(0, 4, WHITE);
        assert_eq!(r.get(7, 14), Some(RED.pack()));
        r.shift(0, -5, WHITE);
        assert_eq!(r.get(7, 9), Some(RED.pack()));
        let red_count = r.pixels().iter().filter(|&&p| p == RED.pack()).count();
        assert_eq!(red_count, 1);
    }

    #[test]
    fn shift_larger_than_surface_blanks_it() {
        let mut r = blank(6, 6);
        r.put_pixel(3, 3, RED.pack());
        r.shift(6, 0, WHITE);
        assert!(r.pixels().iter().all(|&p| p == WHITE.pack()));
    }

    #[test]
    fn fill_blanks_everything() {
        let mut r = blank(30, 30);
        r.stroke_line(2.0, 2.0, 28.0, 28.0, 8, RED);
        r.fill(WHITE);
        assert!(r.pixels().iter().all(|&p| p == WHITE.pack()));
    }
}
