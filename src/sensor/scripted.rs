//! 実機なしでパイプラインを動かすための合成センサー。
//!
//! 左右に揺れる1体のボディと、首を振る顔結果を生成する。
//! デモバイナリと結合テストで使用。

use crate::body::{Body, BodyFrame, HandState, Joint, JointType, TrackingState};
use crate::face::{DetectionResult, FaceBox, FaceProperty, FaceResult};
use crate::projection::{CoordinateMapper, DEPTH_HEIGHT, DEPTH_WIDTH};

/// Kinect v2 深度カメラの焦点距離（ピクセル）
const DEPTH_FOCAL: f32 = 365.6;

/// ピンホールモデルの深度空間マッパー。
/// カメラ後方 (z <= 0) の点はマッピング不能として NaN を返す。
pub struct PinholeDepthMapper;

impl CoordinateMapper for PinholeDepthMapper {
    fn map_camera_point(&self, position: [f32; 3]) -> (f32, f32) {
        let [x, y, z] = position;
        if z <= 0.0 {
            return (f32::NAN, f32::NAN);
        }
        (
            DEPTH_WIDTH / 2.0 + x / z * DEPTH_FOCAL,
            DEPTH_HEIGHT / 2.0 - y / z * DEPTH_FOCAL,
        )
    }
}

/// 直立姿勢での胴体中心からの関節オフセット（メートル）
fn rest_offset(joint_type: JointType) -> [f32; 3] {
    use JointType::*;
    match joint_type {
        SpineBase => [0.0, 0.0, 0.0],
        SpineMid => [0.0, 0.3, 0.0],
        SpineShoulder => [0.0, 0.55, 0.0],
        Neck => [0.0, 0.65, 0.0],
        Head => [0.0, 0.8, 0.0],
        ShoulderLeft => [-0.2, 0.55, 0.0],
        ElbowLeft => [-0.3, 0.3, 0.0],
        WristLeft => [-0.35, 0.05, 0.0],
        HandLeft => [-0.36, 0.0, 0.0],
        HandTipLeft => [-0.37, -0.05, 0.0],
        ThumbLeft => [-0.32, 0.0, 0.0],
        ShoulderRight => [0.2, 0.55, 0.0],
        ElbowRight => [0.3, 0.3, 0.0],
        WristRight => [0.35, 0.05, 0.0],
        HandRight => [0.36, 0.0, 0.0],
        HandTipRight => [0.37, -0.05, 0.0],
        ThumbRight => [0.32, 0.0, 0.0],
        HipLeft => [-0.1, -0.05, 0.0],
        KneeLeft => [-0.12, -0.5, 0.0],
        AnkleLeft => [-0.13, -0.95, 0.0],
        FootLeft => [-0.18, -1.0, 0.1],
        HipRight => [0.1, -0.05, 0.0],
        KneeRight => [0.12, -0.5, 0.0],
        AnkleRight => [0.13, -0.95, 0.0],
        FootRight => [0.18, -1.0, 0.1],
    }
}

pub struct ScriptedSensor {
    tick: u64,
}

impl ScriptedSensor {
    const TRACKING_ID: u64 = 1001;

    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// 次のボディフレームとスロット0の顔結果を生成する
    pub fn next_frame(&mut self) -> (BodyFrame, FaceResult) {
        self.tick += 1;
        let t = self.tick as f32 / 30.0;

        let mut frame: BodyFrame = Default::default();
        frame[0] = Some(self.make_body(t));
        let face = self.make_face(t);

        (frame, face)
    }

    fn make_body(&self, t: f32) -> Body {
        // 胴体中心: 左右にゆっくり揺れる
        let center = [0.4 * (t * 0.5).sin(), 0.2, 2.5];

        let mut body = Body::new(Self::TRACKING_ID);
        for i in 0..JointType::COUNT {
            let joint_type = JointType::from_index(i).unwrap();
            let offset = rest_offset(joint_type);
            body.set_joint(
                joint_type,
                Joint::new(
                    [
                        center[0] + offset[0],
                        center[1] + offset[1],
                        center[2] + offset[2],
                    ],
                    TrackingState::Tracked,
                ),
            );
        }

        // 手の状態を周期的に切り替える
        body.hand_left_state = match (self.tick / 60) % 3 {
            0 => HandState::Open,
            1 => HandState::Closed,
            _ => HandState::Lasso,
        };
        body.hand_right_state = HandState::Open;

        body
    }

    fn make_face(&self, t: f32) -> FaceResult {
        // 頭の位置からカラー空間のボックスを合成する
        let head = [0.4 * (t * 0.5).sin(), 1.0, 2.5];
        let mapper = PinholeDepthMapper;
        let (depth_x, depth_y) = mapper.map_camera_point(head);
        let color_x = depth_x * 1920.0 / DEPTH_WIDTH;
        let color_y = depth_y * 1080.0 / DEPTH_HEIGHT;

        let half = 90.0;
        let mut result = FaceResult::new(
            FaceBox::new(color_x - half, color_y - half, color_x + half, color_y + half),
            yaw_quaternion((t * 0.8).sin() * 0.5),
        );
        result.set_property(FaceProperty::Happy, DetectionResult::Yes);
        result.set_property(FaceProperty::Engaged, DetectionResult::Yes);
        result.set_property(
            FaceProperty::MouthOpen,
            if (self.tick / 90) % 2 == 0 {
                DetectionResult::No
            } else {
                DetectionResult::Yes
            },
        );
        result
    }
}

impl Default for ScriptedSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Y軸回転のクォータニオン
fn yaw_quaternion(yaw_rad: f32) -> [f32; 4] {
    let half = yaw_rad / 2.0;
    [0.0, half.sin(), 0.0, half.cos()]
}
