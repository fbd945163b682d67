//! 粒子系统驱动层
//!
//! 把发射器、活跃粒子集合和共享对象池接成每帧一次的更新循环：
//! 发射 → 积分 → 回收。池通过 `Arc` 注入，多个系统可以共享同
//! 一个进程级的池实例。

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::particles::emitter::ParticleEmitter;
use crate::particles::particle::{Particle, ParticleInstance};
use crate::particles::pool::ParticlePool;

/// 粒子系统
///
/// 拥有活跃粒子集合；粒子的生死由本系统裁决，过期粒子整批归
/// 还池。渲染方只通过 [`ParticleSystem::instances`] 读取快照。
pub struct ParticleSystem {
    /// 共享对象池
    pool: Arc<ParticlePool>,
    /// 发射器
    emitter: ParticleEmitter,
    /// 活跃粒子
    active: Vec<Particle>,
    /// 活跃粒子上限
    max_active: usize,
    rng: StdRng,
}

impl ParticleSystem {
    /// 创建粒子系统
    ///
    /// # 参数
    ///
    /// * `pool` - 共享对象池句柄
    /// * `emitter` - 发射器配置
    /// * `max_active` - 活跃粒子上限，达到后本帧不再发射
    pub fn new(pool: Arc<ParticlePool>, emitter: ParticleEmitter, max_active: usize) -> Self {
        tracing::info!(
            target: "particles",
            max_active,
            emission_rate = emitter.emission_rate,
            "particle system created"
        );

        Self {
            pool,
            emitter,
            active: Vec::with_capacity(max_active),
            max_active,
            rng: StdRng::from_entropy(),
        }
    }

    /// 每帧更新
    ///
    /// # 参数
    ///
    /// * `delta_time` - 时间增量（秒，调用方保证非负）
    ///
    /// 顺序：按发射速率生成新粒子（受活跃上限约束）→ 推进所有
    /// 活跃粒子的物理状态 → 过期粒子批量归还池。
    pub fn update(&mut self, delta_time: f32) {
        let headroom = self.max_active.saturating_sub(self.active.len());
        let to_emit = (self.emitter.particles_to_emit(delta_time) as usize).min(headroom);
        for _ in 0..to_emit {
            let mut particle = self.pool.acquire();
            self.emitter.init_particle(&mut particle, &mut self.rng);
            self.active.push(particle);
        }

        let gravity = self.emitter.gravity;
        for particle in &mut self.active {
            particle.update(delta_time, gravity);
        }

        self.recycle_expired();
    }

    /// 立即爆发生成一批粒子（受活跃上限约束）
    ///
    /// 用于点按触发的一次性特效，绕过发射速率累积。
    pub fn burst(&mut self, count: usize) {
        let headroom = self.max_active.saturating_sub(self.active.len());
        let count = count.min(headroom);
        for _ in 0..count {
            let mut particle = self.pool.acquire();
            self.emitter.init_particle(&mut particle, &mut self.rng);
            self.active.push(particle);
        }

        tracing::debug!(target: "particles", count, "burst emitted");
    }

    // 用 swap_remove 压缩活跃集合，死亡粒子整批归还
    fn recycle_expired(&mut self) {
        let mut expired = Vec::new();
        let mut index = 0;
        while index < self.active.len() {
            if self.active[index].is_alive() {
                index += 1;
            } else {
                expired.push(self.active.swap_remove(index));
            }
        }

        if !expired.is_empty() {
            self.pool.release_all(expired);
        }
    }

    /// 生成渲染实例快照
    ///
    /// 活跃粒子都未过期（回收发生在每次更新的末尾），快照按
    /// 当前存储顺序排列。
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.active.iter().map(Particle::instance).collect()
    }

    /// 当前活跃粒子数量
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// 活跃粒子上限
    pub fn max_active(&self) -> usize {
        self.max_active
    }

    /// 发射器（可变引用，用于运行时调整参数）
    pub fn emitter_mut(&mut self) -> &mut ParticleEmitter {
        &mut self.emitter
    }

    /// 停止并清空：所有活跃粒子归还池，发射器累积清零
    pub fn clear(&mut self) {
        let drained: Vec<Particle> = self.active.drain(..).collect();
        if !drained.is_empty() {
            self.pool.release_all(drained);
        }
        self.emitter.reset();
    }
}
