use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    /// プリミティブ座標系のキャンバス幅（ピクセル）
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,
    /// プリミティブ座標系のキャンバス高さ（ピクセル）
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
    /// 表示ウィンドウの幅
    #[serde(default = "default_window_width")]
    pub window_width: usize,
    /// 表示ウィンドウの高さ
    #[serde(default = "default_window_height")]
    pub window_height: usize,
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_canvas_width() -> f32 { 1920.0 }
fn default_canvas_height() -> f32 { 1080.0 }
fn default_window_width() -> usize { 960 }
fn default_window_height() -> usize { 540 }
fn default_window_title() -> String { "Kinect Viewer".to_string() }

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_title: default_window_title(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルがない・壊れている場合はデフォルト設定
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "config {} unavailable ({}), using defaults",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
}
