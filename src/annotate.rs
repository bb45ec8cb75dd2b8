//! Frame overlays for scanned detections.
//!
//! Each detection gets a hollow bounding rectangle and its decoded payload
//! drawn horizontally centered above the bounding region. Non-matching codes
//! and the code matching the scan target use distinct colors so an operator
//! watching the live preview can tell them apart at a glance.
//!
//! Labels are rasterized from a built-in 5x7 glyph set (digits, uppercase
//! letters, and a few separators); lowercase label text is uppercased before
//! drawing. Payload comparison elsewhere is case-insensitive, so the label
//! case does not affect matching.

use crate::decode::Detection;
use crate::frame::Frame;

/// Visual style of a detection overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// The detection's payload equals the scan target.
    Matched,
    /// Any other decoded code.
    Unmatched,
}

impl Style {
    pub fn color(self) -> [u8; 3] {
        match self {
            Style::Matched => [0, 255, 0],
            Style::Unmatched => [255, 191, 0],
        }
    }
}

const RECT_THICKNESS: u32 = 2;
const GLYPH_SCALE: u32 = 2;
const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Pixels between the label baseline and the top of the bounding region.
const LABEL_GAP: u32 = 10;

/// Draw the bounding rectangle and centered payload label for one detection.
pub fn draw_detection(frame: &mut Frame, detection: &Detection, style: Style) {
    let color = style.color();
    let b = detection.bounds;
    draw_rect(frame, b.x, b.y, b.w, b.h, color);

    let label = detection.payload.to_uppercase();
    let text_w = text_width(&label);
    // Horizontally centered over the bounding region; clamped to the frame.
    let center = b.x + b.w / 2;
    let text_x = center.saturating_sub(text_w / 2);
    let text_y = b.y.saturating_sub(LABEL_GAP + GLYPH_H * GLYPH_SCALE);
    draw_text(frame, &label, text_x, text_y, color);
}

fn draw_rect(frame: &mut Frame, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
    if w == 0 || h == 0 {
        return;
    }
    for t in 0..RECT_THICKNESS {
        for dx in 0..w {
            frame.set_pixel(x + dx, y + t, color);
            frame.set_pixel(x + dx, (y + h).saturating_sub(1 + t), color);
        }
        for dy in 0..h {
            frame.set_pixel(x + t, y + dy, color);
            frame.set_pixel((x + w).saturating_sub(1 + t), y + dy, color);
        }
    }
}

/// Width in pixels of a rendered label (glyphs plus 1-column spacing).
pub fn text_width(text: &str) -> u32 {
    let glyphs = text.chars().count() as u32;
    if glyphs == 0 {
        return 0;
    }
    glyphs * (GLYPH_W + 1) * GLYPH_SCALE - GLYPH_SCALE
}

fn draw_text(frame: &mut Frame, text: &str, x: u32, y: u32, color: [u8; 3]) {
    let mut pen_x = x;
    for ch in text.chars() {
        draw_glyph(frame, ch, pen_x, y, color);
        pen_x += (GLYPH_W + 1) * GLYPH_SCALE;
    }
}

fn draw_glyph(frame: &mut Frame, ch: char, x: u32, y: u32, color: [u8; 3]) {
    let rows = glyph_rows(ch);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                continue;
            }
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    frame.set_pixel(
                        x + col * GLYPH_SCALE + dx,
                        y + row as u32 * GLYPH_SCALE + dy,
                        color,
                    );
                }
            }
        }
    }
}

/// 5x7 glyph bitmaps, one 5-bit row per entry, MSB leftmost.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        ' ' => [0x00; 7],
        // Unknown characters render as a hollow box.
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Bounds;

    fn blank_frame(w: u32, h: u32) -> Frame {
        Frame::new(1, w, h, vec![0u8; (w * h * 3) as usize]).unwrap()
    }

    fn detection(x: u32, y: u32, w: u32, h: u32, payload: &str) -> Detection {
        Detection {
            payload: payload.to_string(),
            bounds: Bounds::new(x, y, w, h),
        }
    }

    #[test]
    fn rectangle_corners_take_style_color() {
        let mut frame = blank_frame(64, 64);
        let det = detection(10, 30, 20, 20, "A");
        draw_detection(&mut frame, &det, Style::Matched);

        let green = [0, 255, 0];
        assert_eq!(frame.pixel(10, 30), Some(green));
        assert_eq!(frame.pixel(29, 49), Some(green));
        // Interior stays untouched.
        assert_eq!(frame.pixel(20, 40), Some([0, 0, 0]));
    }

    #[test]
    fn styles_use_distinct_colors() {
        assert_ne!(Style::Matched.color(), Style::Unmatched.color());
    }

    #[test]
    fn label_is_centered_over_bounds() {
        let mut frame = blank_frame(200, 120);
        let det = detection(50, 60, 100, 40, "AB");
        draw_detection(&mut frame, &det, Style::Unmatched);

        let text_w = text_width("AB");
        let text_x = 100 - text_w / 2;
        let text_y = 60 - LABEL_GAP - GLYPH_H * GLYPH_SCALE;
        // 'A' has its top row set in columns 1..4 (0x0E).
        assert_eq!(
            frame.pixel(text_x + GLYPH_SCALE, text_y),
            Some(Style::Unmatched.color())
        );
        // Left of the label the frame is untouched.
        assert_eq!(frame.pixel(text_x - 2, text_y), Some([0, 0, 0]));
    }

    #[test]
    fn drawing_near_edges_does_not_panic() {
        let mut frame = blank_frame(32, 32);
        // Bounds at the very top: no room for the label above.
        let det = detection(0, 0, 32, 32, "EDGE-CASE");
        draw_detection(&mut frame, &det, Style::Matched);
    }

    #[test]
    fn text_width_accounts_for_spacing() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), GLYPH_W * GLYPH_SCALE);
        assert_eq!(text_width("AB"), (2 * (GLYPH_W + 1) - 1) * GLYPH_SCALE);
    }
}
