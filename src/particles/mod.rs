//! 粒子系统模块
//!
//! 提供屏幕特效所需的完整粒子管线，全部在 CPU 上执行：
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Particle Pipeline                      │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Emission (ParticleEmitter)                           │
//! │     - 按发射速率累积本帧应生成的粒子数                     │
//! │     - 从对象池获取粒子并随机初始化                         │
//! │                                                          │
//! │  2. Simulation (Particle::update)                        │
//! │     - 位置/速度积分、重力、旋转                           │
//! │     - 年龄推进与线性透明度衰减                             │
//! │                                                          │
//! │  3. Recycling (ParticlePool)                             │
//! │     - 过期粒子批量归还空闲列表                             │
//! │     - 超出上限的粒子直接丢弃                               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! 池本身不感知渲染；渲染方通过 [`ParticleSystem::instances`]
//! 获取只读快照。

pub mod emitter;
pub mod particle;
pub mod pool;
pub mod system;

pub use emitter::ParticleEmitter;
pub use particle::{Particle, ParticleInstance};
pub use pool::{ParticlePool, PoolStats};
pub use system::ParticleSystem;
