//! HUD text overlay: a built-in 5x7 bitmap font rendered to a texture
//! atlas at startup, plus a builder that lays out text quads in screen
//! space. Good enough for lives/round counters and the game-over banner
//! without pulling in a font stack.

use bytemuck::{Pod, Zeroable};

/// Vertex for HUD quads
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct OverlayVertex {
    /// NDC position (x, y) in -1..1
    pub position: [f32; 2],
    /// UV into the font atlas; negative x marks a solid-color quad
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl OverlayVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Atlas layout: 16 columns x 4 rows of 6x8 pixel cells, ASCII 32..=95
/// (digits, uppercase, punctuation). Lowercase input is uppercased.
const FONT_COLS: u32 = 16;
const FONT_ROWS: u32 = 4;
const CELL_W: u32 = 6;
const CELL_H: u32 = 8;
const FIRST_CHAR: u32 = 32;
const GLYPH_COUNT: u32 = FONT_COLS * FONT_ROWS;

/// Glyph cell size in screen pixels at scale 1.0
pub const GLYPH_W: f32 = CELL_W as f32;
pub const GLYPH_H: f32 = CELL_H as f32;

/// Builds indexed HUD geometry in pixel coordinates, converting to NDC
/// against a fixed logical screen size
pub struct OverlayTextBuilder {
    pub vertices: Vec<OverlayVertex>,
    pub indices: Vec<u32>,
    screen_w: f32,
    screen_h: f32,
}

impl OverlayTextBuilder {
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            screen_w,
            screen_h,
        }
    }

    fn px_to_ndc(&self, px: f32, py: f32) -> [f32; 2] {
        [
            (px / self.screen_w) * 2.0 - 1.0,
            1.0 - (py / self.screen_h) * 2.0,
        ]
    }

    fn push_quad(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, uv: [[f32; 2]; 2], color: [f32; 4]) {
        let tl = self.px_to_ndc(x0, y0);
        let br = self.px_to_ndc(x1, y1);
        let [u0, v0] = uv[0];
        let [u1, v1] = uv[1];
        let base = self.vertices.len() as u32;
        self.vertices.push(OverlayVertex {
            position: [tl[0], tl[1]],
            tex_coords: [u0, v0],
            color,
        });
        self.vertices.push(OverlayVertex {
            position: [br[0], tl[1]],
            tex_coords: [u1, v0],
            color,
        });
        self.vertices.push(OverlayVertex {
            position: [br[0], br[1]],
            tex_coords: [u1, v1],
            color,
        });
        self.vertices.push(OverlayVertex {
            position: [tl[0], br[1]],
            tex_coords: [u0, v1],
            color,
        });
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Solid-color rectangle in pixel coordinates
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        // Sentinel UV: the fragment shader skips the atlas for these
        self.push_quad(x, y, x + w, y + h, [[-1.0, -1.0], [-1.0, -1.0]], color);
    }

    /// Text at pixel position (x, y). `scale` 1.0 draws 6x8 px glyphs.
    pub fn add_text(&mut self, x: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) {
        let gw = GLYPH_W * scale;
        let gh = GLYPH_H * scale;
        let mut cx = x;
        for ch in text.chars() {
            let code = ch.to_ascii_uppercase() as u32;
            if code < FIRST_CHAR || code >= FIRST_CHAR + GLYPH_COUNT {
                cx += gw;
                continue;
            }
            let idx = code - FIRST_CHAR;
            let col = (idx % FONT_COLS) as f32;
            let row = (idx / FONT_COLS) as f32;
            let u0 = col / FONT_COLS as f32;
            let v0 = row / FONT_ROWS as f32;
            let u1 = (col + 1.0) / FONT_COLS as f32;
            let v1 = (row + 1.0) / FONT_ROWS as f32;
            self.push_quad(cx, y, cx + gw, y + gh, [[u0, v0], [u1, v1]], color);
            cx += gw;
        }
    }

    /// Text centered horizontally around pixel x
    pub fn add_text_centered(&mut self, cx: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) {
        let width = text.chars().count() as f32 * GLYPH_W * scale;
        self.add_text(cx - width / 2.0, y, text, scale, color);
    }
}

/// Rasterize the font into an `R8Unorm` byte buffer.
/// Returns (pixels, width, height).
pub fn generate_font_atlas() -> (Vec<u8>, u32, u32) {
    let atlas_w = FONT_COLS * CELL_W;
    let atlas_h = FONT_ROWS * CELL_H;
    let mut pixels = vec![0u8; (atlas_w * atlas_h) as usize];

    for (idx, glyph) in FONT_5X7.iter().enumerate() {
        let base_x = (idx as u32 % FONT_COLS) * CELL_W;
        let base_y = (idx as u32 / FONT_COLS) * CELL_H;
        for (gy, bits) in glyph.iter().enumerate() {
            for gx in 0..5u32 {
                if (bits >> (4 - gx)) & 1 != 0 {
                    let px = base_x + gx;
                    let py = base_y + gy as u32;
                    pixels[(py * atlas_w + px) as usize] = 255;
                }
            }
        }
    }

    (pixels, atlas_w, atlas_h)
}

/// 5x7 bitmaps for ASCII 32..=95. One byte per row, 5 MSBs used,
/// bit 4 is the leftmost pixel.
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; GLYPH_COUNT as usize] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // 32 ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // 33 '!'
    [0x0A,0x0A,0x00,0x00,0x00,0x00,0x00], // 34 '"'
    [0x0A,0x1F,0x0A,0x0A,0x1F,0x0A,0x00], // 35 '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // 36 '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // 37 '%'
    [0x08,0x14,0x14,0x08,0x15,0x12,0x0D], // 38 '&'
    [0x04,0x04,0x00,0x00,0x00,0x00,0x00], // 39 '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // 40 '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // 41 ')'
    [0x04,0x15,0x0E,0x1F,0x0E,0x15,0x04], // 42 '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // 43 '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // 44 ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // 45 '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // 46 '.'
    [0x01,0x01,0x02,0x04,0x08,0x10,0x10], // 47 '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 48 '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 49 '1'
    [0x0E,0x11,0x01,0x06,0x08,0x10,0x1F], // 50 '2'
    [0x0E,0x11,0x01,0x06,0x01,0x11,0x0E], // 51 '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 52 '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 53 '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 54 '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 55 '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 56 '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 57 '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // 58 ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // 59 ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // 60 '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // 61 '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // 62 '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // 63 '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // 64 '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 65 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 66 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 67 'C'
    [0x1E,0x11,0x11,0x11,0x11,0x11,0x1E], // 68 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 69 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 70 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 71 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 72 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 73 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 74 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 75 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 76 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 77 'M'
    [0x11,0x19,0x15,0x13,0x11,0x11,0x11], // 78 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 79 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 80 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 81 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 82 'R'
    [0x0E,0x11,0x10,0x0E,0x01,0x11,0x0E], // 83 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 84 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 85 'U'
    [0x11,0x11,0x11,0x11,0x0A,0x0A,0x04], // 86 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 87 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 88 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 89 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 90 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // 91 '['
    [0x10,0x10,0x08,0x04,0x02,0x01,0x01], // 92 '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // 93 ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // 94 '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // 95 '_'
];
