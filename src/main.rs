use anyhow::Result;
use std::thread;
use std::time::{Duration, Instant};

use kinect_viewer::body::MAX_BODIES;
use kinect_viewer::config::Config;
use kinect_viewer::projection::Projector;
use kinect_viewer::render::MinifbRenderer;
use kinect_viewer::sensor::{latest_channel, PinholeDepthMapper, ScriptedSensor, SlotFaceSources};
use kinect_viewer::viewer::Viewer;

const CONFIG_PATH: &str = "config.toml";

/// 合成センサーのフレーム周期（約30fps）
const SENSOR_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    env_logger::init();

    println!("Kinect Viewer {}", env!("GIT_VERSION"));
    println!("Press ESC to exit");

    let config = Config::load_or_default(CONFIG_PATH);

    // センサー → 制御スレッドのチャネル（最新のみ保持）
    let (body_tx, mut body_rx) = latest_channel();
    let mut face_txs = Vec::with_capacity(MAX_BODIES);
    let mut face_rxs = Vec::with_capacity(MAX_BODIES);
    for _ in 0..MAX_BODIES {
        let (tx, rx) = latest_channel();
        face_txs.push(tx);
        face_rxs.push(rx);
    }
    let mut faces = SlotFaceSources::new(face_rxs);

    // 合成センサーの生産側スレッド
    thread::spawn(move || {
        let mut sensor = ScriptedSensor::new();
        loop {
            let (frame, face) = sensor.next_frame();
            body_tx.publish(frame);
            face_txs[0].publish(face);
            thread::sleep(SENSOR_INTERVAL);
        }
    });

    let projector = Projector::new(config.render.canvas_width, config.render.canvas_height);
    let mut viewer = Viewer::new(projector);
    let mapper = PinholeDepthMapper;

    let mut renderer = MinifbRenderer::new(
        &config.render.window_title,
        config.render.window_width,
        config.render.window_height,
        config.render.canvas_width,
        config.render.canvas_height,
    )?;

    // FPS計測用
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    // メインループ
    while renderer.is_open() {
        if viewer.tick(&mut body_rx, &mut faces, &mapper, &mut renderer) {
            frame_count += 1;
        } else {
            // 新フレームなし。少し待ってポーリングを続ける。
            thread::sleep(Duration::from_millis(1));
        }

        renderer.update()?;

        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            println!("FPS: {:.1}", frame_count as f32 / elapsed);
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    println!("Shutting down...");
    Ok(())
}
