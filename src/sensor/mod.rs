//! センサーコラボレータとの境界。
//!
//! フレーム取得はすべて「最新のみ・非ブロッキング」。生産側が
//! 消費側を追い越した場合、中間フレームは黙って捨てられる
//! （キューイングも再配送もしない）。

pub mod latest;
pub mod scripted;

use crate::body::BodyFrame;
use crate::face::FaceResult;

pub use latest::{latest_channel, LatestReceiver, LatestSender};
pub use scripted::{PinholeDepthMapper, ScriptedSensor};

/// ボディフレームの供給元
pub trait BodyFrameSource {
    /// 未消費の最新フレームがあれば返す。なければ None（待たない）。
    fn try_acquire_latest(&mut self) -> Option<BodyFrame>;
}

/// スロットごとの顔トラッキング結果の供給元
pub trait FaceResultSource {
    /// 指定スロットの未消費の最新結果があれば返す。
    fn try_acquire_latest(&mut self, slot: usize) -> Option<FaceResult>;
}

impl BodyFrameSource for LatestReceiver<BodyFrame> {
    fn try_acquire_latest(&mut self) -> Option<BodyFrame> {
        self.poll()
    }
}

/// スロット配列の顔結果レシーバをまとめたもの
pub struct SlotFaceSources {
    receivers: Vec<LatestReceiver<FaceResult>>,
}

impl SlotFaceSources {
    pub fn new(receivers: Vec<LatestReceiver<FaceResult>>) -> Self {
        Self { receivers }
    }
}

impl FaceResultSource for SlotFaceSources {
    fn try_acquire_latest(&mut self, slot: usize) -> Option<FaceResult> {
        self.receivers.get_mut(slot)?.poll()
    }
}
