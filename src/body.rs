//! Kinect v2 のボディフレームデータ型。
//!
//! センサーが毎フレーム生成するスナップショット。関節は25個固定で、
//! ボディ配列は最大 `MAX_BODIES` スロット（欠番あり）。

/// 同時追跡できるボディの最大数（センサー仕様で固定）
pub const MAX_BODIES: usize = 6;

/// Kinect v2 の 25 関節インデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum JointType {
    SpineBase = 0,
    SpineMid = 1,
    Neck = 2,
    Head = 3,
    ShoulderLeft = 4,
    ElbowLeft = 5,
    WristLeft = 6,
    HandLeft = 7,
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    HandRight = 11,
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,
    SpineShoulder = 20,
    HandTipLeft = 21,
    ThumbLeft = 22,
    HandTipRight = 23,
    ThumbRight = 24,
}

impl JointType {
    pub const COUNT: usize = 25;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::SpineBase),
            1 => Some(Self::SpineMid),
            2 => Some(Self::Neck),
            3 => Some(Self::Head),
            4 => Some(Self::ShoulderLeft),
            5 => Some(Self::ElbowLeft),
            6 => Some(Self::WristLeft),
            7 => Some(Self::HandLeft),
            8 => Some(Self::ShoulderRight),
            9 => Some(Self::ElbowRight),
            10 => Some(Self::WristRight),
            11 => Some(Self::HandRight),
            12 => Some(Self::HipLeft),
            13 => Some(Self::KneeLeft),
            14 => Some(Self::AnkleLeft),
            15 => Some(Self::FootLeft),
            16 => Some(Self::HipRight),
            17 => Some(Self::KneeRight),
            18 => Some(Self::AnkleRight),
            19 => Some(Self::FootRight),
            20 => Some(Self::SpineShoulder),
            21 => Some(Self::HandTipLeft),
            22 => Some(Self::ThumbLeft),
            23 => Some(Self::HandTipRight),
            24 => Some(Self::ThumbRight),
            _ => None,
        }
    }
}

/// 関節の追跡状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    NotTracked,
    Inferred,
    Tracked,
}

/// 手の開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    Unknown,
    NotTracked,
    Open,
    Closed,
    Lasso,
}

/// 単一関節のスナップショット
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// カメラ空間座標 (x, y, z) メートル
    pub position: [f32; 3],
    pub state: TrackingState,
}

impl Joint {
    pub fn new(position: [f32; 3], state: TrackingState) -> Self {
        Self { position, state }
    }
}

impl Default for Joint {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            state: TrackingState::NotTracked,
        }
    }
}

/// 1フレーム分のボディスナップショット
///
/// 同一人物のフレームをまたいだ同定は `tracking_id` のみで行う。
/// 配列インデックスは別の人物に再利用されうる。
#[derive(Debug, Clone)]
pub struct Body {
    /// 追跡中のみ有効な安定ID
    pub tracking_id: u64,
    pub is_tracked: bool,
    /// 全25関節（欠けなし）
    pub joints: [Joint; JointType::COUNT],
    pub hand_left_state: HandState,
    pub hand_right_state: HandState,
}

impl Body {
    pub fn new(tracking_id: u64) -> Self {
        Self {
            tracking_id,
            is_tracked: true,
            joints: [Joint::default(); JointType::COUNT],
            hand_left_state: HandState::Unknown,
            hand_right_state: HandState::Unknown,
        }
    }

    /// インデックスで関節を取得
    pub fn joint(&self, joint_type: JointType) -> &Joint {
        &self.joints[joint_type as usize]
    }

    pub fn set_joint(&mut self, joint_type: JointType, joint: Joint) {
        self.joints[joint_type as usize] = joint;
    }
}

/// ボディフレーム: 固定スロット配列。欠番は None。
pub type BodyFrame = [Option<Body>; MAX_BODIES];

/// 全スロット空のフレーム
pub fn empty_frame() -> BodyFrame {
    Default::default()
}
