use std::sync::Arc;
use std::thread;

use glam::Vec2;
use particle_engine::config::EffectsConfig;
use particle_engine::particles::{Particle, ParticleEmitter, ParticlePool, ParticleSystem};

#[test]
fn test_pool_capacity_invariant_under_mixed_calls() {
    let pool = ParticlePool::new(4, 8);

    // 任意获取/归还序列之后，空闲数量都不超过上限
    let mut held = Vec::new();
    for _ in 0..20 {
        held.push(pool.acquire());
    }
    pool.release_all(held);
    pool.release(Particle::new());
    pool.warm_up(100);

    assert!(pool.available_count() <= pool.max_size());
    assert_eq!(pool.available_count(), 8);
}

#[test]
fn test_concurrent_acquire_release() {
    // 多线程交错执行 10000 次获取/归还，池不崩溃、不越界
    const THREADS: usize = 8;
    const OPS_PER_THREAD: usize = 1250;

    let pool = Arc::new(ParticlePool::new(64, 256));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let mut particle = pool.acquire();
                    particle.position = Vec2::new(i as f32, i as f32);
                    particle.update(0.016, 100.0);
                    pool.release(particle);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let available = pool.available_count();
    assert!(available <= pool.max_size());

    let stats = pool.stats();
    assert_eq!(stats.allocations, THREADS * OPS_PER_THREAD);
    assert_eq!(stats.releases, THREADS * OPS_PER_THREAD);
}

#[test]
fn test_pool_shared_across_systems() {
    // 进程级共享池：两个系统通过 Arc 注入同一个池
    let pool = Arc::new(ParticlePool::new(0, 512));

    let mut confetti = ParticleSystem::new(Arc::clone(&pool), ParticleEmitter::confetti(), 256);
    let mut fireworks = ParticleSystem::new(Arc::clone(&pool), ParticleEmitter::fireworks(), 256);

    for _ in 0..60 {
        confetti.update(1.0 / 60.0);
        fireworks.update(1.0 / 60.0);
    }

    assert!(confetti.active_count() > 0);
    assert!(fireworks.active_count() > 0);

    confetti.clear();
    fireworks.clear();

    assert_eq!(confetti.active_count(), 0);
    assert_eq!(fireworks.active_count(), 0);
    assert!(pool.available_count() <= pool.max_size());
}

#[test]
fn test_full_effect_lifecycle() {
    // 完整生命周期：发射 → 衰减 → 过期回收 → 复用
    let pool = Arc::new(ParticlePool::new(32, 128));
    let emitter = ParticleEmitter::new()
        .with_emission_rate(120.0)
        .with_lifetime(0.5, 0.5)
        .with_velocity(Vec2::new(-10.0, -40.0), Vec2::new(10.0, -20.0))
        .with_gravity(98.0);
    let mut system = ParticleSystem::new(Arc::clone(&pool), emitter, 128);

    // 模拟 2 秒 @60fps
    for _ in 0..120 {
        system.update(1.0 / 60.0);
        assert!(system.active_count() <= system.max_active());

        for instance in system.instances() {
            // 活跃粒子的渲染快照 alpha 始终落在 [0, 1]
            assert!(instance.color[3] >= 0.0 && instance.color[3] <= 1.0);
        }
    }

    // 发射停止后所有粒子过期回收
    system.emitter_mut().enabled = false;
    for _ in 0..60 {
        system.update(1.0 / 60.0);
    }

    assert_eq!(system.active_count(), 0);
    let stats = pool.stats();
    assert!(stats.hit_rate() > 0.5, "steady state should reuse particles");
}

#[test]
fn test_config_drives_pool_and_emitter() {
    let mut config = EffectsConfig::from_toml_str(
        r#"
        [particles]
        initial_pool_size = 16
        max_pool_size = 64
        max_active_particles = 32
        emission_rate = 30.0
        gravity = 50.0
        default_lifetime = 2.0
        "#,
    )
    .unwrap();
    config.apply_env_overrides();
    config.validate().unwrap();

    let pool = Arc::new(ParticlePool::from_config(&config.particles));
    assert_eq!(pool.available_count(), 16);
    assert_eq!(pool.max_size(), 64);

    let emitter = ParticleEmitter::from_config(&config.particles);
    let mut system = ParticleSystem::new(pool, emitter, config.particles.max_active_particles);

    system.update(1.0); // 30 个
    assert_eq!(system.active_count(), 30);
}

#[test]
fn test_config_roundtrip_via_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("effects.toml");

    let mut config = EffectsConfig::default();
    config.particles.max_pool_size = 4096;
    config.particles.initial_pool_size = 512;
    config.save_toml(&path)?;

    let loaded = EffectsConfig::from_toml_file(&path)?;
    assert_eq!(loaded.particles.max_pool_size, 4096);
    assert_eq!(loaded.particles.initial_pool_size, 512);
    Ok(())
}
