//! # Particle Engine
//!
//! A reusable 2D particle effects engine for screen animations built with Rust.
//!
//! ## Features
//!
//! - **Particle Core**: Mutable particle state with in-place physics integration
//! - **Object Pooling**: Bounded, lock-guarded free-list reuse of particle instances
//! - **Emitters**: Randomized spawn parameters with per-frame emission accumulation
//! - **Frame Driver**: Active-set management with automatic recycling of expired particles
//! - **Render Handoff**: `bytemuck`-compatible instance snapshots for GPU renderers
//! - **Configuration**: TOML/JSON configuration with environment variable overrides
//!
//! ## Architecture Design
//!
//! The engine separates three concerns:
//! - **Particle**: pure kinematic/visual state, integrated in place each frame
//! - **ParticlePool**: ownership reservoir; particles move between the pool's
//!   free list and a caller's active set, never allocated per frame in steady state
//! - **ParticleSystem**: the per-frame driver wiring an emitter, the active set
//!   and a shared pool handle together
//!
//! ### Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use particle_engine::particles::{ParticleEmitter, ParticlePool, ParticleSystem};
//!
//! let pool = Arc::new(ParticlePool::new(256, 1024));
//! let emitter = ParticleEmitter::confetti();
//! let mut system = ParticleSystem::new(Arc::clone(&pool), emitter, 1024);
//!
//! // once per frame
//! system.update(delta_time);
//! let instances = system.instances(); // hand off to the renderer
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Frame timing, logging initialization and shared macros
//! - [`particles`]: Particle state, pooling, emitters and the frame driver
//! - [`config`]: Configuration system

/// Core functionality including frame timing and logging initialization
pub mod core;
/// Particle state, pooling, emitters and the frame driver
pub mod particles;
/// Configuration system
pub mod config;
