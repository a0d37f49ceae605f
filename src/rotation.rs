//! クォータニオン → オイラー角変換。

/// 単位クォータニオン (x, y, z, w) を (pitch, yaw, roll) 度に変換する。
///
/// yaw の asin 引数は浮動小数点誤差でわずかに [-1, 1] を外れることが
/// あるためクランプする。クランプしないと NaN になる。
pub fn quaternion_to_euler_degrees(rotation: &[f32; 4]) -> (f32, f32, f32) {
    let [x, y, z, w] = *rotation;

    let pitch = f32::atan2(2.0 * (y * z + w * x), w * w - x * x - y * y + z * z).to_degrees();
    let yaw = (2.0 * (w * y - x * z)).clamp(-1.0, 1.0).asin().to_degrees();
    let roll = f32::atan2(2.0 * (x * y + w * z), w * w + x * x - y * y - z * z).to_degrees();

    (pitch, yaw, roll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_quaternion() {
        let (pitch, yaw, roll) = quaternion_to_euler_degrees(&[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(pitch, 0.0);
        assert_eq!(yaw, 0.0);
        assert_eq!(roll, 0.0);
    }

    #[test]
    fn test_yaw_90_degrees() {
        // Y軸まわり90度回転: (0, sin45°, 0, cos45°)
        let half = std::f32::consts::FRAC_PI_4;
        let (pitch, yaw, roll) =
            quaternion_to_euler_degrees(&[0.0, half.sin(), 0.0, half.cos()]);
        assert!((yaw - 90.0).abs() < 1e-3, "yaw = {}", yaw);
        assert!(pitch.abs() < 1e-3, "pitch = {}", pitch);
        assert!(roll.abs() < 1e-3, "roll = {}", roll);
    }

    #[test]
    fn test_pitch_90_degrees() {
        // X軸まわり90度回転: (sin45°, 0, 0, cos45°)
        let half = std::f32::consts::FRAC_PI_4;
        let (pitch, yaw, roll) =
            quaternion_to_euler_degrees(&[half.sin(), 0.0, 0.0, half.cos()]);
        assert!((pitch - 90.0).abs() < 1e-3, "pitch = {}", pitch);
        assert!(yaw.abs() < 1e-3, "yaw = {}", yaw);
        assert!(roll.abs() < 1e-3, "roll = {}", roll);
    }

    #[test]
    fn test_asin_argument_clamped() {
        // 単位長をわずかに超えるクォータニオン。
        // 2*(w*y - x*z) が 1.0 を超えるが、クランプにより 90 度で有限になる。
        let v = 0.70711;
        let (pitch, yaw, roll) = quaternion_to_euler_degrees(&[0.0, v, 0.0, v]);
        assert!(yaw.is_finite());
        assert!((yaw - 90.0).abs() < 1e-3, "yaw = {}", yaw);
        assert!(pitch.is_finite());
        assert!(roll.is_finite());
    }

    #[test]
    fn test_small_rotation_sign() {
        // 小さい正のyaw回転は正のyawを返す
        let half = 0.1_f32; // ラジアン
        let (_, yaw, _) = quaternion_to_euler_degrees(&[0.0, half.sin(), 0.0, half.cos()]);
        assert!(yaw > 0.0);
        assert!((yaw - (2.0 * half).to_degrees()).abs() < 1e-2);
    }
}
