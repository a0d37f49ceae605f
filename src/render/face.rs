//! 顔オーバーレイのプリミティブ生成。
//!
//! バウンディングボックスの矩形と、プロパティタグ + 顔の向き
//! （pitch/yaw/roll）を合成したラベルを発行する。

use crate::face::{DetectionResult, FaceProperty, FaceResult};
use crate::render::primitive::{Color, DrawPrimitive, Scene};
use crate::rotation::quaternion_to_euler_degrees;

/// 顔ボックスの枠色（黄）
pub const FACE_BOX_COLOR: Color = Color::rgba(255, 255, 0, 255);
pub const FACE_BOX_THICKNESS: f32 = 3.0;

pub const LABEL_FOREGROUND: Color = Color::rgba(255, 255, 0, 255);
pub const LABEL_BACKGROUND: Color = Color::rgba(0, 0, 0, 128);
/// ラベルはボックス左上のこのピクセル数だけ上に置く
pub const LABEL_OFFSET_Y: f32 = 40.0;

/// Yes判定時に付けるタグ（順序固定）
const PROPERTY_TAGS: [(FaceProperty, &str); 4] = [
    (FaceProperty::Happy, "😊 Happy "),
    (FaceProperty::Engaged, "👀 Engaged "),
    (FaceProperty::WearingGlasses, "👓 Glasses "),
    (FaceProperty::MouthOpen, "😮 Mouth Open "),
];

/// 顔結果1件をプリミティブへ変換してsceneに追加する。
/// ボックスに広がりがない（空プレースホルダ）場合は何も発行しない。
pub fn build_face(result: &FaceResult, scene: &mut Scene) {
    let face_box = &result.bounding_box;
    if face_box.is_degenerate() {
        return;
    }

    scene.push(DrawPrimitive::Rect {
        left: face_box.left,
        top: face_box.top,
        width: face_box.width(),
        height: face_box.height(),
        stroke: FACE_BOX_COLOR,
        thickness: FACE_BOX_THICKNESS,
    });

    scene.push(DrawPrimitive::Label {
        left: face_box.left,
        top: face_box.top - LABEL_OFFSET_Y,
        text: face_info_text(result),
        foreground: LABEL_FOREGROUND,
        background: LABEL_BACKGROUND,
    });
}

/// プロパティタグと回転角を合成したラベル文字列
pub fn face_info_text(result: &FaceResult) -> String {
    let mut info = String::new();

    for (prop, tag) in PROPERTY_TAGS.iter() {
        if result.property(*prop) == DetectionResult::Yes {
            info.push_str(tag);
        }
    }

    // どちらかの目が閉じていれば1タグにまとめる
    if result.property(FaceProperty::LeftEyeClosed) == DetectionResult::Yes
        || result.property(FaceProperty::RightEyeClosed) == DetectionResult::Yes
    {
        info.push_str("😉 Eye Closed ");
    }

    let (pitch, yaw, roll) = quaternion_to_euler_degrees(&result.rotation);
    info.push_str(&format!("\nP:{:.0}° Y:{:.0}° R:{:.0}°", pitch, yaw, roll));

    info
}
