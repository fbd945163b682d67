//! 粒子对象池 - 减少每帧内存分配和释放的开销
//!
//! 有界的空闲列表，由单个互斥锁保护，可通过 `Arc` 在渲染线程和
//! 后台任务之间共享。所有操作都是短临界区，不做任何 I/O，
//! 除了锁本身不会阻塞。

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::particles::particle::Particle;

/// 锁内状态：空闲列表和统计计数
struct PoolInner {
    available: VecDeque<Particle>,
    /// 统计：总获取次数
    allocations: usize,
    /// 统计：总归还次数
    releases: usize,
    /// 统计：从空闲列表命中的次数
    cache_hits: usize,
}

/// 粒子对象池
///
/// 粒子在池的空闲列表和调用方的活跃集合之间转移所有权：
/// `acquire` 把粒子交给调用方，`release` 收回。池满时归还的
/// 粒子直接丢弃；池空时获取会透明地构造新粒子。两种情况都
/// 不是错误。
///
/// 池不校验归还的粒子是否来自本池，也不检测重复归还，
/// 这是调用方的约定。
pub struct ParticlePool {
    inner: Mutex<PoolInner>,
    max_size: usize,
}

impl ParticlePool {
    /// 创建对象池并预填充
    ///
    /// # 参数
    ///
    /// * `initial_size` - 预填充的粒子数（超过 `max_size` 会被截断）
    /// * `max_size` - 空闲列表保留的最大粒子数
    pub fn new(initial_size: usize, max_size: usize) -> Self {
        let initial_size = initial_size.min(max_size);
        let mut available = VecDeque::with_capacity(initial_size);
        for _ in 0..initial_size {
            available.push_back(Particle::new());
        }

        tracing::debug!(
            target: "particles",
            initial_size,
            max_size,
            "particle pool created"
        );

        Self {
            inner: Mutex::new(PoolInner {
                available,
                allocations: 0,
                releases: 0,
                cache_hits: 0,
            }),
            max_size,
        }
    }

    /// 从配置创建对象池
    pub fn from_config(config: &crate::config::ParticleConfig) -> Self {
        Self::new(config.initial_pool_size, config.max_pool_size)
    }

    // 粒子状态随时可重建，锁中毒后空闲列表仍然是合法的空闲列表
    fn lock(&self) -> MutexGuard<'_, PoolInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 从池中获取粒子
    ///
    /// 空闲列表非空时返回其中一个（已重置），否则构造新的默认
    /// 粒子。永不失败，除锁以外不阻塞。
    pub fn acquire(&self) -> Particle {
        let mut inner = self.lock();
        inner.allocations += 1;

        match inner.available.pop_front() {
            Some(mut particle) => {
                inner.cache_hits += 1;
                particle.reset();
                particle
            }
            None => Particle::new(),
        }
    }

    /// 将粒子归还到池中
    ///
    /// 空闲列表未达上限时重置并保留粒子，否则直接丢弃。
    pub fn release(&self, particle: Particle) {
        let mut inner = self.lock();
        inner.releases += 1;
        Self::retain(&mut inner, self.max_size, particle);
    }

    /// 批量归还粒子
    ///
    /// 与逐个调用 [`ParticlePool::release`] 等价，但整批只获取
    /// 一次锁。
    pub fn release_all<I>(&self, particles: I)
    where
        I: IntoIterator<Item = Particle>,
    {
        let mut inner = self.lock();
        for particle in particles {
            inner.releases += 1;
            Self::retain(&mut inner, self.max_size, particle);
        }
    }

    fn retain(inner: &mut PoolInner, max_size: usize, mut particle: Particle) {
        if inner.available.len() < max_size {
            particle.reset();
            inner.available.push_back(particle);
        }
        // 池已满：粒子被丢弃
    }

    /// 预热池 - 将空闲列表补充到指定数量（不超过上限）
    pub fn warm_up(&self, count: usize) {
        let mut inner = self.lock();
        let target = count.min(self.max_size);
        while inner.available.len() < target {
            inner.available.push_back(Particle::new());
        }
    }

    /// 清空空闲列表
    ///
    /// 已被调用方持有的粒子不受影响。
    pub fn clear(&self) {
        let mut inner = self.lock();
        let dropped = inner.available.len();
        inner.available.clear();
        tracing::debug!(target: "particles", dropped, "particle pool cleared");
    }

    /// 当前空闲粒子数量
    ///
    /// 在锁内读取，返回调用瞬间的一致快照；并发场景下返回后
    /// 即可能过期，仅供参考。
    pub fn available_count(&self) -> usize {
        self.lock().available.len()
    }

    /// 空闲列表的最大保留数量
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// 获取池统计信息
    pub fn stats(&self) -> PoolStats {
        let inner = self.lock();
        PoolStats {
            allocations: inner.allocations,
            releases: inner.releases,
            cache_hits: inner.cache_hits,
            available: inner.available.len(),
            max_size: self.max_size,
        }
    }
}

/// 对象池统计信息
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolStats {
    /// 总获取次数
    pub allocations: usize,
    /// 总归还次数
    pub releases: usize,
    /// 从空闲列表命中的次数
    pub cache_hits: usize,
    /// 当前空闲粒子数
    pub available: usize,
    /// 空闲列表上限
    pub max_size: usize,
}

impl PoolStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f32 {
        if self.allocations == 0 {
            0.0
        } else {
            self.cache_hits as f32 / self.allocations as f32
        }
    }
}
