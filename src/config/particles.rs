use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 粒子配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// 对象池预填充数量
    pub initial_pool_size: usize,

    /// 对象池空闲列表上限
    pub max_pool_size: usize,

    /// 活跃粒子上限
    pub max_active_particles: usize,

    /// 默认发射速率（粒子/秒）
    pub emission_rate: f32,

    /// 重力加速度（像素/秒²，y 向下为正）
    pub gravity: f32,

    /// 默认粒子生命周期（秒）
    pub default_lifetime: f32,
}

impl_default!(ParticleConfig {
    initial_pool_size: 256,
    max_pool_size: 1024,
    max_active_particles: 1024,
    emission_rate: 150.0,
    gravity: 200.0,
    default_lifetime: 3.0,
});

impl ParticleConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_pool_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_pool_size must be positive".to_string(),
            ));
        }
        if self.initial_pool_size > self.max_pool_size {
            return Err(ConfigError::ValidationError(
                "initial_pool_size exceeds max_pool_size".to_string(),
            ));
        }
        if self.max_active_particles == 0 {
            return Err(ConfigError::ValidationError(
                "max_active_particles must be positive".to_string(),
            ));
        }
        if self.emission_rate < 0.0 || !self.emission_rate.is_finite() {
            return Err(ConfigError::ValidationError(
                "emission_rate must be non-negative".to_string(),
            ));
        }
        if self.default_lifetime <= 0.0 || !self.default_lifetime.is_finite() {
            return Err(ConfigError::ValidationError(
                "default_lifetime must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
