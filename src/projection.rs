//! カメラ空間 → キャンバス座標への射影。
//!
//! 3D→2D 変換そのものはセンサー側の座標マッパーが行う。ここでは
//! 結果の有効性チェックと、深度画像解像度からキャンバス解像度への
//! スケーリングだけを担当する。

/// 深度画像のネイティブ解像度（センサー仕様で固定）
pub const DEPTH_WIDTH: f32 = 512.0;
pub const DEPTH_HEIGHT: f32 = 424.0;

/// センサーの座標マッピング機能。
///
/// カメラ空間の3D点を深度画像空間 (512x424) の2D点へ変換する。
/// マッピング不能な点では NaN / Infinity を返しうる。
pub trait CoordinateMapper {
    fn map_camera_point(&self, position: [f32; 3]) -> (f32, f32);
}

/// 深度空間 → キャンバス空間のスケーラ付きプロジェクタ
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    canvas_width: f32,
    canvas_height: f32,
}

impl Projector {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
        }
    }

    /// カメラ空間点をキャンバス座標へ射影する。
    ///
    /// マッパーの出力が非有限なら None（その点に依存する図形は
    /// 描画しない）。スケーリングは軸ごとに独立した線形変換で、
    /// アスペクト比は保存しない。
    pub fn project(
        &self,
        mapper: &dyn CoordinateMapper,
        position: [f32; 3],
    ) -> Option<(f32, f32)> {
        let (depth_x, depth_y) = mapper.map_camera_point(position);

        if !depth_x.is_finite() || !depth_y.is_finite() {
            return None;
        }

        Some((
            depth_x * self.canvas_width / DEPTH_WIDTH,
            depth_y * self.canvas_height / DEPTH_HEIGHT,
        ))
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }
}
