//! Lifecycle of the process-wide registry.
//!
//! The global slot can only be filled once per process, so the whole
//! lifecycle runs in a single test.

use autojit_config::{
    GlobalJitLevel, JIT_LEVEL_REGISTRY, JitLevels, RegistryError, get_global_jit_level,
    register_global_jit_level_getter,
};

#[test]
fn test_global_registry_lifecycle() {
    // Nothing linked in: identity for every level.
    assert!(!JIT_LEVEL_REGISTRY.is_registered());
    for level in GlobalJitLevel::ALL {
        assert_eq!(get_global_jit_level(level), JitLevels::uniform(level));
    }

    register_global_jit_level_getter(|_: GlobalJitLevel| {
        JitLevels::new(GlobalJitLevel::On1, GlobalJitLevel::On2)
    })
    .unwrap();

    assert_eq!(
        get_global_jit_level(GlobalJitLevel::Off),
        JitLevels::new(GlobalJitLevel::On1, GlobalJitLevel::On2)
    );

    let err = register_global_jit_level_getter(|level: GlobalJitLevel| {
        JitLevels::uniform(level)
    })
    .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));

    // Queries from other threads see the first getter.
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| get_global_jit_level(GlobalJitLevel::On2)))
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            JitLevels::new(GlobalJitLevel::On1, GlobalJitLevel::On2)
        );
    }
}
