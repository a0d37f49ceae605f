//! 最新値のみを保持する1スロットチャネル。
//!
//! 生産側スレッドが書き込み、制御スレッドがポーリングする。
//! 読み出し前に複数回書き込まれた場合は最後の値だけが残る。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

struct Shared<T> {
    value: Mutex<Option<T>>,
    /// 書き込みごとにインクリメント。未消費判定に使う。
    seq: AtomicU64,
}

/// 生産側ハンドル
pub struct LatestSender<T> {
    shared: Arc<Shared<T>>,
}

/// 消費側ハンドル
pub struct LatestReceiver<T> {
    shared: Arc<Shared<T>>,
    last_seen: u64,
}

/// チャネルを作成
pub fn latest_channel<T: Clone>() -> (LatestSender<T>, LatestReceiver<T>) {
    let shared = Arc::new(Shared {
        value: Mutex::new(None),
        seq: AtomicU64::new(0),
    });

    (
        LatestSender {
            shared: shared.clone(),
        },
        LatestReceiver {
            shared,
            last_seen: 0,
        },
    )
}

impl<T> LatestSender<T> {
    /// 値を上書きする。前の未消費値は破棄される。
    pub fn publish(&self, value: T) {
        *self.shared.value.lock().unwrap() = Some(value);
        self.shared.seq.fetch_add(1, Ordering::Release);
    }
}

impl<T: Clone> LatestReceiver<T> {
    /// 未消費の最新値があれば返す。なければ None（待たない）。
    pub fn poll(&mut self) -> Option<T> {
        let seq = self.shared.seq.load(Ordering::Acquire);
        if seq == self.last_seen {
            return None;
        }
        self.last_seen = seq;
        self.shared.value.lock().unwrap().clone()
    }
}
