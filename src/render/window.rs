//! minifbを使用したシーンのラスタライザ。
//!
//! 表示側コラボレータのデモ実装。キャンバス座標 (1920x1080) の
//! プリミティブをウィンドウ解像度へスケールして描画する。
//! テキストのグリフ描画は持たないため、ラベルは背景帯のみ描画し
//! 本文はログに出す。

use anyhow::Result;
use minifb::{Key, Window, WindowOptions};

use crate::render::primitive::{Color, DrawPrimitive, Scene};
use crate::viewer::SceneSink;

/// ラベル背景帯の1行あたりの高さ（ピクセル、キャンバス座標）
const LABEL_LINE_HEIGHT: f32 = 18.0;
/// ラベル背景帯の1文字あたりの幅
const LABEL_CHAR_WIDTH: f32 = 8.0;

pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    /// キャンバス座標 → ウィンドウ座標のスケール
    scale_x: f32,
    scale_y: f32,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(
        title: &str,
        width: usize,
        height: usize,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; width * height];

        Ok(Self {
            window,
            buffer,
            width,
            height,
            scale_x: width as f32 / canvas_width,
            scale_y: height as f32 / canvas_height,
        })
    }

    /// ウィンドウが開いているか
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// バッファを黒でクリア
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// シーン全体を描画順どおりにラスタライズ
    pub fn draw_scene(&mut self, scene: &Scene) {
        for primitive in scene.iter() {
            self.draw_primitive(primitive);
        }
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }

    fn draw_primitive(&mut self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Line {
                p0,
                p1,
                color,
                thickness,
            } => {
                let (x0, y0) = self.to_window(*p0);
                let (x1, y1) = self.to_window(*p1);
                let radius = ((thickness * self.scale_x).max(1.0) as i32 - 1) / 2;
                self.draw_line(x0, y0, x1, y1, *color, radius);
            }
            DrawPrimitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let (cx, cy) = self.to_window(*center);
                let r = (radius * self.scale_x).max(1.0) as i32;
                self.draw_filled_circle(cx, cy, r, *fill);
                if let Some((stroke_color, stroke_width)) = stroke {
                    let sw = (stroke_width * self.scale_x).max(1.0) as i32;
                    self.draw_circle_outline(cx, cy, r, sw, *stroke_color);
                }
            }
            DrawPrimitive::Rect {
                left,
                top,
                width,
                height,
                stroke,
                thickness,
            } => {
                let (x0, y0) = self.to_window((*left, *top));
                let (x1, y1) = self.to_window((*left + *width, *top + *height));
                let radius = ((thickness * self.scale_x).max(1.0) as i32 - 1) / 2;
                self.draw_line(x0, y0, x1, y0, *stroke, radius);
                self.draw_line(x1, y0, x1, y1, *stroke, radius);
                self.draw_line(x1, y1, x0, y1, *stroke, radius);
                self.draw_line(x0, y1, x0, y0, *stroke, radius);
            }
            DrawPrimitive::Label {
                left,
                top,
                text,
                background,
                ..
            } => {
                self.draw_label_background(*left, *top, text, *background);
                log::debug!("label at ({:.0}, {:.0}): {}", left, top, text);
            }
        }
    }

    fn to_window(&self, point: (f32, f32)) -> (i32, i32) {
        (
            (point.0 * self.scale_x) as i32,
            (point.1 * self.scale_y) as i32,
        )
    }

    /// Bresenhamのアルゴリズムで線を描画（radiusで太らせる）
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, radius: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            if radius > 0 {
                self.draw_filled_circle(x, y, radius, color);
            } else {
                self.set_pixel(x, y, color);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 円を描画（塗りつぶし）
    fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// 円の輪郭のみ描画
    fn draw_circle_outline(&mut self, cx: i32, cy: i32, radius: i32, width: i32, color: Color) {
        let outer = radius + width;
        for dy in -outer..=outer {
            for dx in -outer..=outer {
                let d2 = dx * dx + dy * dy;
                if d2 > radius * radius && d2 <= outer * outer {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// ラベルの背景帯。サイズはテキストの行数と最長行から概算する。
    fn draw_label_background(&mut self, left: f32, top: f32, text: &str, background: Color) {
        let lines = text.lines().count().max(1);
        let max_chars = text
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        let (x0, y0) = self.to_window((left, top));
        let (x1, y1) = self.to_window((
            left + max_chars as f32 * LABEL_CHAR_WIDTH,
            top + lines as f32 * LABEL_LINE_HEIGHT,
        ));

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, background);
            }
        }
    }

    /// ピクセルをセット（境界チェックとアルファブレンド付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }

        let index = y as usize * self.width + x as usize;
        if color.a == 255 {
            self.buffer[index] = color.to_u32();
        } else {
            // src-over ブレンド
            let dst = self.buffer[index];
            let a = color.a as u32;
            let inv = 255 - a;
            let r = (color.r as u32 * a + ((dst >> 16) & 0xFF) * inv) / 255;
            let g = (color.g as u32 * a + ((dst >> 8) & 0xFF) * inv) / 255;
            let b = (color.b as u32 * a + (dst & 0xFF) * inv) / 255;
            self.buffer[index] = (r << 16) | (g << 8) | b;
        }
    }
}

impl SceneSink for MinifbRenderer {
    fn publish(&mut self, scene: Scene) {
        self.clear();
        self.draw_scene(&scene);
    }
}
