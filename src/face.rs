//! 顔トラッキング結果のデータ型。
//!
//! 顔フレームはボディフレームとは独立した周期で届くため、
//! 結果は古い場合も欠落している場合もある。

/// 検出可能な顔プロパティ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum FaceProperty {
    Happy = 0,
    Engaged = 1,
    WearingGlasses = 2,
    LeftEyeClosed = 3,
    RightEyeClosed = 4,
    MouthOpen = 5,
    MouthMoved = 6,
    LookingAway = 7,
}

impl FaceProperty {
    pub const COUNT: usize = 8;
}

/// プロパティ判定の三値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionResult {
    Unknown,
    No,
    Yes,
}

/// カラー画像空間の顔バウンディングボックス（ピクセル単位）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl FaceBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// 幅。座標が反転していても負にはならない。
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    /// 高さ。座標が反転していても負にはならない。
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    /// どちらの軸にも広がりがない（センサーの空プレースホルダ）
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 && self.height() <= 0.0
    }
}

/// 1スロット分の顔トラッキング結果
#[derive(Debug, Clone)]
pub struct FaceResult {
    /// カラー画像空間のバウンディングボックス
    pub bounding_box: FaceBox,
    /// 顔の向き（単位クォータニオン: x, y, z, w）
    pub rotation: [f32; 4],
    /// プロパティ判定（FaceProperty でインデックス）
    pub properties: [DetectionResult; FaceProperty::COUNT],
}

impl FaceResult {
    pub fn new(bounding_box: FaceBox, rotation: [f32; 4]) -> Self {
        Self {
            bounding_box,
            rotation,
            properties: [DetectionResult::Unknown; FaceProperty::COUNT],
        }
    }

    pub fn property(&self, prop: FaceProperty) -> DetectionResult {
        self.properties[prop as usize]
    }

    pub fn set_property(&mut self, prop: FaceProperty, result: DetectionResult) {
        self.properties[prop as usize] = result;
    }
}
