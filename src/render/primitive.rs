//! 描画プリミティブ。
//!
//! パイプラインの出力は純粋な値のリストで、フレームごとに丸ごと
//! 作り直して表示側へ渡す（差分更新はしない）。

/// RGBA カラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// minifb バッファ用の 0x00RRGGBB 値
    pub fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// 1フレームで描画する図形
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line {
        p0: (f32, f32),
        p1: (f32, f32),
        color: Color,
        thickness: f32,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        fill: Color,
        /// 輪郭線（色, 太さ）。None なら塗りのみ。
        stroke: Option<(Color, f32)>,
    },
    Rect {
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        stroke: Color,
        thickness: f32,
    },
    Label {
        left: f32,
        top: f32,
        text: String,
        foreground: Color,
        background: Color,
    },
}

/// キャンバスに描くプリミティブの列。順序 = 描画順。
pub type Scene = Vec<DrawPrimitive>;
