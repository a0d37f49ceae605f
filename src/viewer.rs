//! ボディ/顔フレームの集約とシーン組み立て。
//!
//! ボディフレーム到着ごとに、顔スロットの束縛を更新してから
//! スケルトンと顔オーバーレイのプリミティブを1本のリストへ平坦化し、
//! 表示側へ丸ごと差し替えで渡す。すべて制御スレッド上で同期的に
//! 実行され、途中状態のシーンが観測されることはない。

use crate::body::{BodyFrame, MAX_BODIES};
use crate::face::FaceResult;
use crate::projection::{CoordinateMapper, Projector};
use crate::render::primitive::Scene;
use crate::render::{face as face_overlay, skeleton};
use crate::sensor::{BodyFrameSource, FaceResultSource};

/// 組み立て済みシーンの受け手（表示側コラボレータ）
pub trait SceneSink {
    /// フレーム構築完了ごとに1回呼ばれる。前のシーンは丸ごと破棄する。
    fn publish(&mut self, scene: Scene);
}

/// ボディ配列インデックスに1:1対応する顔トラッカースロット
#[derive(Debug, Clone, Default)]
pub struct FaceSlot {
    /// 束縛中のトラッキングID。未束縛なら None。
    pub bound_tracking_id: Option<u64>,
    /// 最後に取得できた顔結果。束縛解除時に破棄する。
    pub latest_result: Option<FaceResult>,
}

/// フレーム集約器
pub struct Viewer {
    projector: Projector,
    slots: [FaceSlot; MAX_BODIES],
}

impl Viewer {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            slots: Default::default(),
        }
    }

    pub fn face_slot(&self, index: usize) -> &FaceSlot {
        &self.slots[index]
    }

    /// 制御スレッドの1ティック。
    /// 新しいボディフレームがあればシーンを組み立てて publish する。
    /// フレームがなければ何もせず false を返す。
    pub fn tick(
        &mut self,
        bodies: &mut dyn BodyFrameSource,
        faces: &mut dyn FaceResultSource,
        mapper: &dyn CoordinateMapper,
        sink: &mut dyn SceneSink,
    ) -> bool {
        let Some(frame) = bodies.try_acquire_latest() else {
            return false;
        };

        let scene = self.build_scene(&frame, faces, mapper);
        sink.publish(scene);
        true
    }

    /// 1フレーム分のシーンを組み立てる。
    /// 束縛更新 → 顔結果の取得 → ボディ描画 → 顔描画の順。
    pub fn build_scene(
        &mut self,
        bodies: &BodyFrame,
        faces: &mut dyn FaceResultSource,
        mapper: &dyn CoordinateMapper,
    ) -> Scene {
        self.update_bindings(bodies);
        self.pull_face_results(faces);

        let mut scene = Scene::new();

        for body in bodies.iter().flatten() {
            if body.is_tracked {
                skeleton::build_body(body, mapper, &self.projector, &mut scene);
            }
        }

        for slot in self.slots.iter() {
            if let Some(result) = &slot.latest_result {
                face_overlay::build_face(result, &mut scene);
            }
        }

        scene
    }

    /// 顔スロットの束縛を更新する。
    ///
    /// 束縛はインデックス固定: index i のボディは index i のスロット
    /// にしか束縛できない。空きスロット探索はしない（ボディ数が
    /// スロット数を超えたときの挙動が変わってしまうため）。
    fn update_bindings(&mut self, bodies: &BodyFrame) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let tracked = bodies[index].as_ref().filter(|b| b.is_tracked);

            match tracked {
                Some(body) => {
                    if slot.bound_tracking_id.is_none() {
                        slot.bound_tracking_id = Some(body.tracking_id);
                        log::debug!("face slot {} bound to tracking id {}", index, body.tracking_id);
                    }
                }
                None => {
                    if let Some(id) = slot.bound_tracking_id.take() {
                        // 束縛解除時に古い顔結果も破棄する
                        slot.latest_result = None;
                        log::debug!("face slot {} unbound from tracking id {}", index, id);
                    }
                }
            }
        }
    }

    /// 束縛中の各スロットについて最新の顔結果を取得する。
    /// 新着がなければ前回の結果を保持する。
    fn pull_face_results(&mut self, faces: &mut dyn FaceResultSource) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.bound_tracking_id.is_none() {
                continue;
            }
            if let Some(result) = faces.try_acquire_latest(index) {
                slot.latest_result = Some(result);
            }
        }
    }
}
