//! 粒子发射器
//!
//! 负责决定每帧生成多少粒子以及新粒子的随机初始状态。
//! 发射器不持有粒子，也不接触对象池；驱动层（[`super::system`]）
//! 把两者接起来。

use std::f32::consts::TAU;
use std::ops::Range;

use glam::{Vec2, Vec4};
use rand::Rng;

use crate::config::ParticleConfig;
use crate::particles::particle::Particle;

/// 粒子发射器配置
///
/// 所有范围字段在生成粒子时均匀随机采样；退化范围
/// （start >= end）直接取下界。
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    /// 每秒发射数量
    pub emission_rate: f32,
    /// 粒子生命周期范围（秒）
    pub lifetime: Range<f32>,
    /// 初始速度范围
    pub velocity: Range<Vec2>,
    /// 生成区域（屏幕坐标）
    pub spawn_area: Range<Vec2>,
    /// 旋转速度范围（弧度/秒）
    pub rotation_speed: Range<f32>,
    /// 初始缩放范围
    pub scale: Range<f32>,
    /// 重力加速度（y 向下为正）
    pub gravity: f32,
    /// 颜色集合（每个粒子随机取一个；为空时使用白色）
    pub palette: Vec<Vec4>,
    /// 是否启用
    pub enabled: bool,
    /// 当前累积发射时间
    emission_accumulator: f32,
    /// 当前运行时间
    elapsed_time: f32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            emission_rate: 100.0,
            lifetime: 1.0..3.0,
            velocity: Vec2::new(-50.0, -150.0)..Vec2::new(50.0, -50.0),
            spawn_area: Vec2::ZERO..Vec2::ZERO,
            rotation_speed: -3.0..3.0,
            scale: 0.5..1.0,
            gravity: 200.0,
            palette: Vec::new(),
            enabled: true,
            emission_accumulator: 0.0,
            elapsed_time: 0.0,
        }
    }
}

impl ParticleEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置创建发射器
    pub fn from_config(config: &ParticleConfig) -> Self {
        Self {
            emission_rate: config.emission_rate,
            lifetime: config.default_lifetime * 0.5..config.default_lifetime,
            gravity: config.gravity,
            ..Default::default()
        }
    }

    /// 设置发射速率
    pub fn with_emission_rate(mut self, rate: f32) -> Self {
        self.emission_rate = rate;
        self
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, min: f32, max: f32) -> Self {
        self.lifetime = min..max;
        self
    }

    /// 设置初始速度
    pub fn with_velocity(mut self, min: Vec2, max: Vec2) -> Self {
        self.velocity = min..max;
        self
    }

    /// 设置生成区域
    pub fn with_spawn_area(mut self, min: Vec2, max: Vec2) -> Self {
        self.spawn_area = min..max;
        self
    }

    /// 设置重力
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// 设置旋转速度范围
    pub fn with_rotation_speed(mut self, min: f32, max: f32) -> Self {
        self.rotation_speed = min..max;
        self
    }

    /// 设置缩放范围
    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale = min..max;
        self
    }

    /// 设置颜色集合
    pub fn with_palette(mut self, palette: Vec<Vec4>) -> Self {
        self.palette = palette;
        self
    }

    /// 计算本帧应发射的粒子数
    ///
    /// 发射速率按时间累积，小数部分结转到下一帧，保证长期平均
    /// 速率准确。
    pub fn particles_to_emit(&mut self, delta_time: f32) -> u32 {
        if !self.enabled {
            return 0;
        }

        self.elapsed_time += delta_time;
        self.emission_accumulator += self.emission_rate * delta_time;

        let count = self.emission_accumulator.floor() as u32;
        self.emission_accumulator -= count as f32;
        count
    }

    /// 初始化新获取的粒子
    ///
    /// 先重置到规范状态，再写入随机的初始位置、速度、生命周期、
    /// 旋转、缩放和颜色。
    pub fn init_particle<R: Rng>(&self, particle: &mut Particle, rng: &mut R) {
        particle.reset();
        particle.position = Vec2::new(
            sample(rng, self.spawn_area.start.x..self.spawn_area.end.x),
            sample(rng, self.spawn_area.start.y..self.spawn_area.end.y),
        );
        particle.velocity = Vec2::new(
            sample(rng, self.velocity.start.x..self.velocity.end.x),
            sample(rng, self.velocity.start.y..self.velocity.end.y),
        );
        particle.lifetime = sample(rng, self.lifetime.clone());
        particle.rotation = rng.gen_range(0.0..TAU);
        particle.rotation_speed = sample(rng, self.rotation_speed.clone());
        particle.scale = sample(rng, self.scale.clone());
        if !self.palette.is_empty() {
            particle.color = self.palette[rng.gen_range(0..self.palette.len())];
        }
    }

    /// 重置发射器的累积状态
    pub fn reset(&mut self) {
        self.emission_accumulator = 0.0;
        self.elapsed_time = 0.0;
    }

    /// 自发射器创建或重置以来经过的时间（秒）
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    // ========================================================================
    // 预设特效
    // ========================================================================

    /// 五彩纸屑：从屏幕顶部向下飘落的彩色碎片
    pub fn confetti() -> Self {
        Self::default()
            .with_emission_rate(150.0)
            .with_lifetime(2.0, 4.0)
            .with_velocity(Vec2::new(-80.0, 20.0), Vec2::new(80.0, 120.0))
            .with_gravity(120.0)
            .with_rotation_speed(-6.0, 6.0)
            .with_scale(0.4, 1.0)
            .with_palette(vec![
                Vec4::new(0.96, 0.26, 0.21, 1.0),
                Vec4::new(0.13, 0.59, 0.95, 1.0),
                Vec4::new(1.0, 0.92, 0.23, 1.0),
                Vec4::new(0.3, 0.69, 0.31, 1.0),
                Vec4::new(0.61, 0.15, 0.69, 1.0),
            ])
    }

    /// 烟花：向四周高速扩散、快速消散的亮色粒子
    pub fn fireworks() -> Self {
        Self::default()
            .with_emission_rate(400.0)
            .with_lifetime(0.5, 1.2)
            .with_velocity(Vec2::new(-250.0, -250.0), Vec2::new(250.0, 250.0))
            .with_gravity(80.0)
            .with_scale(0.2, 0.6)
            .with_palette(vec![
                Vec4::new(1.0, 0.84, 0.0, 1.0),
                Vec4::new(1.0, 0.41, 0.12, 1.0),
                Vec4::new(1.0, 1.0, 1.0, 1.0),
            ])
    }
}

/// 范围采样，退化范围取下界
fn sample<R: Rng>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.start >= range.end {
        range.start
    } else {
        rng.gen_range(range)
    }
}
