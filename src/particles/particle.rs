//! 粒子状态与物理积分
//!
//! 单个粒子只是一段可变的运动学/视觉状态，每帧由动画驱动层
//! 原地积分一次。粒子不拥有任何资源，可以被对象池无限复用。

use glam::{Vec2, Vec4};

/// 粒子生命周期的下限（秒）
///
/// 生命周期小于等于该值的粒子视为立即死亡，跳过透明度除法，
/// 避免除零产生非有限的 alpha。
pub const MIN_LIFETIME: f32 = 1e-6;

/// 粒子重置后的默认生命周期（秒）
pub const DEFAULT_LIFETIME: f32 = 1.0;

/// 粒子
///
/// 描述一个动画视觉元素的运动学和视觉状态。字段全部公开，
/// 发射器在获取粒子后直接改写初始状态。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// 位置（屏幕坐标，y 向下）
    pub position: Vec2,
    /// 速度（单位/秒）
    pub velocity: Vec2,
    /// 旋转角（弧度）
    pub rotation: f32,
    /// 旋转速度（弧度/秒）
    pub rotation_speed: f32,
    /// 缩放系数
    pub scale: f32,
    /// 透明度（随年龄线性衰减）
    pub alpha: f32,
    /// 颜色（RGBA）
    pub color: Vec4,
    /// 总生命周期（秒）
    pub lifetime: f32,
    /// 已存活时间（秒）
    pub age: f32,
}

impl Particle {
    /// 创建处于规范默认状态的粒子
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            alpha: 1.0,
            color: Vec4::ONE,
            lifetime: DEFAULT_LIFETIME,
            age: 0.0,
        }
    }

    /// 重置到规范默认状态
    ///
    /// 位置/速度归零、缩放和透明度回满、年龄清零、生命周期和
    /// 颜色恢复默认。池在获取和归还时都会调用。
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 推进模拟
    ///
    /// # 参数
    ///
    /// * `delta_time` - 时间增量（秒，调用方保证非负）
    /// * `gravity` - 重力加速度，只作用于垂直速度
    ///
    /// 更新顺序：年龄 → 位置 → 垂直速度 → 旋转 → 透明度。
    /// 位置积分使用本帧开始时的速度，重力在位置更新之后才累积。
    /// 死亡之后继续调用会让 alpha 变为负值，渲染方必须先用
    /// [`Particle::is_alive`] 过滤。
    pub fn update(&mut self, delta_time: f32, gravity: f32) {
        self.age += delta_time;
        self.position += self.velocity * delta_time;
        self.velocity.y += gravity * delta_time;
        self.rotation += self.rotation_speed * delta_time;

        if self.lifetime > MIN_LIFETIME {
            self.alpha = 1.0 - self.age / self.lifetime;
        } else {
            // 生命周期非正：视为立即死亡，跳过除法
            self.alpha = 0.0;
        }
    }

    /// 存活判定：年龄尚未达到生命周期
    pub fn is_alive(&self) -> bool {
        self.lifetime > MIN_LIFETIME && self.age < self.lifetime
    }

    /// 生成渲染实例快照
    ///
    /// 透明度衰减乘入颜色的 alpha 通道，并截断到 [0, 1]。
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            rotation: self.rotation,
            scale: self.scale,
            color: [
                self.color.x,
                self.color.y,
                self.color.z,
                self.color.w * self.alpha.clamp(0.0, 1.0),
            ],
        }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 渲染实例数据
// ============================================================================

/// 渲染实例（对应实例化渲染的顶点缓冲布局）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// 位置
    pub position: [f32; 2],
    /// 旋转角（弧度）
    pub rotation: f32,
    /// 缩放系数
    pub scale: f32,
    /// 颜色（alpha 已含衰减）
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reset_restores_canonical_defaults() {
        let mut particle = Particle::new();
        particle.position = Vec2::new(3.0, -7.0);
        particle.velocity = Vec2::new(1.0, 2.0);
        particle.rotation = 0.5;
        particle.rotation_speed = 2.0;
        particle.scale = 0.25;
        particle.alpha = 0.1;
        particle.color = Vec4::new(1.0, 0.0, 0.0, 1.0);
        particle.lifetime = 9.0;
        particle.age = 8.0;

        particle.reset();

        assert_eq!(particle, Particle::new());
        assert_eq!(particle.position, Vec2::ZERO);
        assert_eq!(particle.velocity, Vec2::ZERO);
        assert_eq!(particle.rotation, 0.0);
        assert_eq!(particle.scale, 1.0);
        assert_eq!(particle.alpha, 1.0);
        assert_eq!(particle.age, 0.0);
        assert!(particle.is_alive());
    }

    #[test]
    fn test_lifetime_fade_and_death() {
        // 场景：生命周期2秒，每秒推进一次
        let mut particle = Particle::new();
        particle.lifetime = 2.0;

        particle.update(1.0, 0.0);
        assert_eq!(particle.age, 1.0);
        assert_eq!(particle.alpha, 0.5);
        assert!(particle.is_alive());

        particle.update(1.0, 0.0);
        assert_eq!(particle.age, 2.0);
        assert_eq!(particle.alpha, 0.0);
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_gravity_applied_after_position() {
        // 场景：水平速度(10,0)、重力5，位置先积分再累积重力
        let mut particle = Particle::new();
        particle.velocity = Vec2::new(10.0, 0.0);

        particle.update(1.0, 5.0);

        assert_eq!(particle.position, Vec2::new(10.0, 0.0));
        assert_eq!(particle.velocity.y, 5.0);
    }

    #[test]
    fn test_rotation_integration() {
        let mut particle = Particle::new();
        particle.rotation_speed = std::f32::consts::PI;

        particle.update(0.5, 0.0);

        assert!((particle.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_lifetime_is_instant_death() {
        let mut particle = Particle::new();
        particle.lifetime = 0.0;

        assert!(!particle.is_alive());

        particle.update(0.016, 0.0);
        assert!(particle.alpha.is_finite());
        assert_eq!(particle.alpha, 0.0);
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_negative_lifetime_is_instant_death() {
        let mut particle = Particle::new();
        particle.lifetime = -1.0;

        particle.update(0.016, 0.0);
        assert_eq!(particle.alpha, 0.0);
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_instance_clamps_negative_alpha() {
        let mut particle = Particle::new();
        particle.lifetime = 1.0;
        particle.update(2.0, 0.0);

        assert!(particle.alpha < 0.0);
        assert_eq!(particle.instance().color[3], 0.0);
    }

    proptest! {
        // 透明度随年龄严格单调下降（线性衰减）
        #[test]
        fn prop_alpha_strictly_decreases(
            lifetime in 0.1f32..100.0,
            t1 in 0.001f32..0.999,
            t2 in 0.001f32..0.999,
        ) {
            prop_assume!(t2 - t1 > 1e-3);

            let mut first = Particle::new();
            first.lifetime = lifetime;
            first.update(t1 * lifetime, 0.0);

            let mut second = Particle::new();
            second.lifetime = lifetime;
            second.update(t2 * lifetime, 0.0);

            prop_assert!(second.alpha < first.alpha);
        }

        // 存活判定等价于累计时间小于生命周期
        #[test]
        fn prop_alive_iff_age_below_lifetime(
            lifetime in 0.1f32..10.0,
            steps in 1usize..50,
            dt in 0.001f32..0.5,
        ) {
            let mut particle = Particle::new();
            particle.lifetime = lifetime;

            let mut elapsed = 0.0f32;
            for _ in 0..steps {
                particle.update(dt, 0.0);
                elapsed += dt;
            }

            prop_assert_eq!(particle.is_alive(), elapsed < lifetime);
        }
    }
}
