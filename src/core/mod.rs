//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `time` - 帧时钟和时间步长
//! - `macros` - 共享宏定义

pub mod time;
#[macro_use]
pub mod macros;

// 重新导出主要类型
pub use time::FrameClock;

/// 初始化日志系统
///
/// 使用 `RUST_LOG` 环境变量控制日志级别。重复调用是安全的，
/// 只有第一次调用会生效。
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
