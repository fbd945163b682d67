//! 帧时钟
//!
//! 为动画驱动层提供每帧的时间增量（秒）。

use std::time::Instant;

/// 单帧最大时间步长（秒）
///
/// 窗口失焦或调试器暂停后，第一帧的时间增量可能非常大，
/// 直接代入物理积分会让粒子瞬移。超过该值的步长会被截断。
const MAX_FRAME_STEP: f32 = 0.25;

/// 帧时钟
///
/// 记录上一帧的时间点，每帧调用 [`FrameClock::tick`] 获取时间增量。
pub struct FrameClock {
    last_frame: Instant,
    max_step: f32,
}

impl FrameClock {
    /// 创建帧时钟，第一次 `tick` 返回自创建以来的时间
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_step: MAX_FRAME_STEP,
        }
    }

    /// 创建帧时钟并指定最大步长
    pub fn with_max_step(max_step: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_step,
        }
    }

    /// 推进时钟，返回距上一帧的时间增量（秒，已截断到最大步长）
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta.min(self.max_step)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
