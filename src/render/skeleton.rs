//! ボディ1体分のスケルトン描画プリミティブ生成。
//!
//! 発行順はボーン → 関節 → 手インジケータ。この順序が重なり順
//! （z-stacking）を決めるので変更しないこと。

use crate::body::{Body, HandState, Joint, JointType, TrackingState};
use crate::projection::{CoordinateMapper, Projector};
use crate::render::primitive::{Color, DrawPrimitive, Scene};

/// 骨格の接続定義 (開始関節, 終了関節)
pub const BONES: [(JointType, JointType); 24] = [
    // 体幹
    (JointType::Head, JointType::Neck),
    (JointType::Neck, JointType::SpineShoulder),
    (JointType::SpineShoulder, JointType::SpineMid),
    (JointType::SpineMid, JointType::SpineBase),
    (JointType::SpineShoulder, JointType::ShoulderRight),
    (JointType::SpineShoulder, JointType::ShoulderLeft),
    (JointType::SpineBase, JointType::HipRight),
    (JointType::SpineBase, JointType::HipLeft),
    // 右腕
    (JointType::ShoulderRight, JointType::ElbowRight),
    (JointType::ElbowRight, JointType::WristRight),
    (JointType::WristRight, JointType::HandRight),
    (JointType::HandRight, JointType::HandTipRight),
    (JointType::WristRight, JointType::ThumbRight),
    // 左腕
    (JointType::ShoulderLeft, JointType::ElbowLeft),
    (JointType::ElbowLeft, JointType::WristLeft),
    (JointType::WristLeft, JointType::HandLeft),
    (JointType::HandLeft, JointType::HandTipLeft),
    (JointType::WristLeft, JointType::ThumbLeft),
    // 右脚
    (JointType::HipRight, JointType::KneeRight),
    (JointType::KneeRight, JointType::AnkleRight),
    (JointType::AnkleRight, JointType::FootRight),
    // 左脚
    (JointType::HipLeft, JointType::KneeLeft),
    (JointType::KneeLeft, JointType::AnkleLeft),
    (JointType::AnkleLeft, JointType::FootLeft),
];

/// 追跡中関節の色
pub const TRACKED_JOINT_COLOR: Color = Color::rgba(68, 192, 68, 255);
/// 推定関節の色（黄）
pub const INFERRED_JOINT_COLOR: Color = Color::rgba(255, 255, 0, 255);
/// 関節円の半径
pub const JOINT_RADIUS: f32 = 4.0;

/// 両端が追跡中のボーン（強調表示: 不透明・太め）
pub const TRACKED_BONE_COLOR: Color = Color::rgba(0, 255, 0, 255);
pub const TRACKED_BONE_THICKNESS: f32 = 4.0;
/// 片端が推定のボーン（控えめ表示）
pub const INFERRED_BONE_COLOR: Color = Color::rgba(128, 128, 0, 255);
pub const INFERRED_BONE_THICKNESS: f32 = 2.0;

/// 手インジケータの輪郭（白）
pub const HAND_STROKE: (Color, f32) = (Color::rgba(255, 255, 255, 255), 2.0);
pub const HAND_OPEN_COLOR: Color = Color::rgba(0, 255, 0, 180);
pub const HAND_OPEN_RADIUS: f32 = 20.0;
pub const HAND_CLOSED_COLOR: Color = Color::rgba(255, 0, 0, 180);
pub const HAND_CLOSED_RADIUS: f32 = 15.0;
pub const HAND_LASSO_COLOR: Color = Color::rgba(0, 0, 255, 180);
pub const HAND_LASSO_RADIUS: f32 = 17.5;

/// 追跡中のボディ1体をプリミティブへ変換してsceneに追加する
pub fn build_body(
    body: &Body,
    mapper: &dyn CoordinateMapper,
    projector: &Projector,
    scene: &mut Scene,
) {
    // ボーン
    for (joint_a, joint_b) in BONES.iter() {
        build_bone(body, *joint_a, *joint_b, mapper, projector, scene);
    }

    // 関節
    for joint in body.joints.iter() {
        build_joint(joint, mapper, projector, scene);
    }

    // 手インジケータ
    build_hand(
        body.hand_left_state,
        body.joint(JointType::HandLeft),
        mapper,
        projector,
        scene,
    );
    build_hand(
        body.hand_right_state,
        body.joint(JointType::HandRight),
        mapper,
        projector,
        scene,
    );
}

fn build_bone(
    body: &Body,
    joint_type_a: JointType,
    joint_type_b: JointType,
    mapper: &dyn CoordinateMapper,
    projector: &Projector,
    scene: &mut Scene,
) {
    let joint_a = body.joint(joint_type_a);
    let joint_b = body.joint(joint_type_b);

    // どちらかが未追跡ならボーンごとスキップ
    if joint_a.state == TrackingState::NotTracked || joint_b.state == TrackingState::NotTracked {
        return;
    }

    let Some(p0) = projector.project(mapper, joint_a.position) else {
        return;
    };
    let Some(p1) = projector.project(mapper, joint_b.position) else {
        return;
    };

    let (color, thickness) =
        if joint_a.state == TrackingState::Tracked && joint_b.state == TrackingState::Tracked {
            (TRACKED_BONE_COLOR, TRACKED_BONE_THICKNESS)
        } else {
            (INFERRED_BONE_COLOR, INFERRED_BONE_THICKNESS)
        };

    scene.push(DrawPrimitive::Line {
        p0,
        p1,
        color,
        thickness,
    });
}

fn build_joint(
    joint: &Joint,
    mapper: &dyn CoordinateMapper,
    projector: &Projector,
    scene: &mut Scene,
) {
    if joint.state == TrackingState::NotTracked {
        return;
    }

    let Some(center) = projector.project(mapper, joint.position) else {
        return;
    };

    let fill = if joint.state == TrackingState::Tracked {
        TRACKED_JOINT_COLOR
    } else {
        INFERRED_JOINT_COLOR
    };

    scene.push(DrawPrimitive::Circle {
        center,
        radius: JOINT_RADIUS,
        fill,
        stroke: None,
    });
}

fn build_hand(
    hand_state: HandState,
    hand_joint: &Joint,
    mapper: &dyn CoordinateMapper,
    projector: &Projector,
    scene: &mut Scene,
) {
    if hand_joint.state == TrackingState::NotTracked {
        return;
    }

    let (fill, radius) = match hand_state {
        HandState::Open => (HAND_OPEN_COLOR, HAND_OPEN_RADIUS),
        HandState::Closed => (HAND_CLOSED_COLOR, HAND_CLOSED_RADIUS),
        HandState::Lasso => (HAND_LASSO_COLOR, HAND_LASSO_RADIUS),
        // 不明・未追跡の手は何も描かない
        HandState::Unknown | HandState::NotTracked => return,
    };

    let Some(center) = projector.project(mapper, hand_joint.position) else {
        return;
    };

    scene.push(DrawPrimitive::Circle {
        center,
        radius,
        fill,
        stroke: Some(HAND_STROKE),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// カメラ空間XYをそのまま深度座標として返すテスト用マッパー
    struct PassthroughMapper;

    impl CoordinateMapper for PassthroughMapper {
        fn map_camera_point(&self, position: [f32; 3]) -> (f32, f32) {
            (position[0], position[1])
        }
    }

    /// z < 0 の点でNaNを返すマッパー（マッピング不能の再現）
    struct FailingMapper;

    impl CoordinateMapper for FailingMapper {
        fn map_camera_point(&self, position: [f32; 3]) -> (f32, f32) {
            if position[2] < 0.0 {
                (f32::NAN, f32::NAN)
            } else {
                (position[0], position[1])
            }
        }
    }

    fn projector() -> Projector {
        Projector::new(1920.0, 1080.0)
    }

    /// 全関節がTrackedのボディを作る。関節ごとに位置をずらす。
    fn make_tracked_body(tracking_id: u64) -> Body {
        let mut body = Body::new(tracking_id);
        for i in 0..JointType::COUNT {
            let joint_type = JointType::from_index(i).unwrap();
            body.set_joint(
                joint_type,
                Joint::new([10.0 + i as f32, 20.0 + i as f32, 2.0], TrackingState::Tracked),
            );
        }
        body
    }

    fn count_lines(scene: &Scene) -> usize {
        scene
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count()
    }

    fn count_circles(scene: &Scene) -> usize {
        scene
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Circle { .. }))
            .count()
    }

    #[test]
    fn test_bone_table_size() {
        assert_eq!(BONES.len(), 24);
    }

    #[test]
    fn test_fully_tracked_body_emits_all_primitives() {
        let body = make_tracked_body(1);
        let mut scene = Scene::new();
        build_body(&body, &PassthroughMapper, &projector(), &mut scene);

        // ボーン24本 + 関節25個。手はUnknownなのでインジケータなし。
        assert_eq!(count_lines(&scene), 24);
        assert_eq!(count_circles(&scene), 25);
    }

    #[test]
    fn test_not_tracked_joint_skips_circle_and_bones() {
        let mut body = make_tracked_body(1);
        body.set_joint(
            JointType::Head,
            Joint::new([0.0, 0.0, 2.0], TrackingState::NotTracked),
        );

        let mut scene = Scene::new();
        build_body(&body, &PassthroughMapper, &projector(), &mut scene);

        // Head-Neck ボーンが1本消え、Head の円も消える
        assert_eq!(count_lines(&scene), 23);
        assert_eq!(count_circles(&scene), 24);
    }

    #[test]
    fn test_invalid_projection_skips_dependent_primitives() {
        let mut body = make_tracked_body(1);
        // Head だけマッピング不能な位置 (z < 0)
        body.set_joint(
            JointType::Head,
            Joint::new([0.0, 0.0, -1.0], TrackingState::Tracked),
        );

        let mut scene = Scene::new();
        build_body(&body, &FailingMapper, &projector(), &mut scene);

        assert_eq!(count_lines(&scene), 23);
        assert_eq!(count_circles(&scene), 24);
    }

    #[test]
    fn test_bone_styling_all_state_combinations() {
        // 強調表示は両端Trackedのときのみ
        let cases = [
            (TrackingState::Tracked, TrackingState::Tracked, true),
            (TrackingState::Tracked, TrackingState::Inferred, false),
            (TrackingState::Inferred, TrackingState::Tracked, false),
            (TrackingState::Inferred, TrackingState::Inferred, false),
        ];

        for (state_a, state_b, expect_strong) in cases {
            let mut body = make_tracked_body(1);
            body.set_joint(JointType::Head, Joint::new([1.0, 1.0, 2.0], state_a));
            body.set_joint(JointType::Neck, Joint::new([1.0, 2.0, 2.0], state_b));

            let mut scene = Scene::new();
            build_bone(
                &body,
                JointType::Head,
                JointType::Neck,
                &PassthroughMapper,
                &projector(),
                &mut scene,
            );

            assert_eq!(scene.len(), 1);
            match &scene[0] {
                DrawPrimitive::Line {
                    color, thickness, ..
                } => {
                    if expect_strong {
                        assert_eq!(*color, TRACKED_BONE_COLOR);
                        assert_eq!(*thickness, TRACKED_BONE_THICKNESS);
                    } else {
                        assert_eq!(*color, INFERRED_BONE_COLOR);
                        assert_eq!(*thickness, INFERRED_BONE_THICKNESS);
                    }
                }
                other => panic!("expected Line, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_inferred_joint_color() {
        let joint = Joint::new([5.0, 5.0, 2.0], TrackingState::Inferred);
        let mut scene = Scene::new();
        build_joint(&joint, &PassthroughMapper, &projector(), &mut scene);

        match &scene[0] {
            DrawPrimitive::Circle { fill, .. } => assert_eq!(*fill, INFERRED_JOINT_COLOR),
            other => panic!("expected Circle, got {:?}", other),
        }
    }

    #[test]
    fn test_hand_states_emit_expected_indicator() {
        let joint = Joint::new([5.0, 5.0, 2.0], TrackingState::Tracked);
        let cases = [
            (HandState::Open, Some((HAND_OPEN_COLOR, HAND_OPEN_RADIUS))),
            (HandState::Closed, Some((HAND_CLOSED_COLOR, HAND_CLOSED_RADIUS))),
            (HandState::Lasso, Some((HAND_LASSO_COLOR, HAND_LASSO_RADIUS))),
            (HandState::Unknown, None),
            (HandState::NotTracked, None),
        ];

        for (state, expected) in cases {
            let mut scene = Scene::new();
            build_hand(state, &joint, &PassthroughMapper, &projector(), &mut scene);

            match expected {
                Some((color, radius)) => {
                    assert_eq!(scene.len(), 1, "state {:?}", state);
                    match &scene[0] {
                        DrawPrimitive::Circle {
                            fill,
                            radius: r,
                            stroke,
                            ..
                        } => {
                            assert_eq!(*fill, color);
                            assert_eq!(*r, radius);
                            assert_eq!(*stroke, Some(HAND_STROKE));
                        }
                        other => panic!("expected Circle, got {:?}", other),
                    }
                }
                None => assert!(scene.is_empty(), "state {:?} should emit nothing", state),
            }
        }
    }

    #[test]
    fn test_hand_indicator_skipped_when_hand_joint_not_tracked() {
        // 手関節が未追跡なら手の状態がOpenでも描かない
        let joint = Joint::new([5.0, 5.0, 2.0], TrackingState::NotTracked);
        let mut scene = Scene::new();
        build_hand(
            HandState::Open,
            &joint,
            &PassthroughMapper,
            &projector(),
            &mut scene,
        );
        assert!(scene.is_empty());
    }

    #[test]
    fn test_emission_order_bones_joints_hands() {
        let mut body = make_tracked_body(1);
        body.hand_left_state = HandState::Open;

        let mut scene = Scene::new();
        build_body(&body, &PassthroughMapper, &projector(), &mut scene);

        // 先頭24個がライン、続いて関節円25個、最後に手インジケータ
        assert_eq!(scene.len(), 24 + 25 + 1);
        assert!(scene[..24]
            .iter()
            .all(|p| matches!(p, DrawPrimitive::Line { .. })));
        assert!(scene[24..49]
            .iter()
            .all(|p| matches!(p, DrawPrimitive::Circle { stroke: None, .. })));
        assert!(matches!(
            scene[49],
            DrawPrimitive::Circle {
                stroke: Some(_),
                ..
            }
        ));
    }
}
