//! Registration of the auto-jit getter into a registry.

use autojit_config::GlobalJitLevel::{Default, Off, On1, On2};
use autojit_config::{JitLevelRegistry, JitLevels, RegistryError};

use crate::error::AutoJitError;
use crate::flags::AutoJitFlags;
use crate::policy::AUTO_JIT_GETTER_NAME;
use crate::register_auto_jit_getter_with;

#[test]
fn test_registration_overrides_identity() {
    let registry = JitLevelRegistry::new();
    assert_eq!(registry.query(Default), JitLevels::uniform(Default));

    let flags = AutoJitFlags::parse_str("--auto-jit=single-device(2)").unwrap();
    register_auto_jit_getter_with(&registry, &flags).unwrap();

    assert_eq!(registry.registrant().as_deref(), Some(AUTO_JIT_GETTER_NAME));
    assert_eq!(registry.query(Default), JitLevels::new(On2, Off));
    assert_eq!(registry.query(On1), JitLevels::new(On2, On1));
}

#[test]
fn test_registration_without_flags_turns_default_off() {
    let registry = JitLevelRegistry::new();
    register_auto_jit_getter_with(&registry, &AutoJitFlags::default()).unwrap();

    assert_eq!(registry.query(Default), JitLevels::uniform(Off));
    assert_eq!(registry.query(On1), JitLevels::uniform(On1));
}

#[test]
fn test_second_registration_is_rejected() {
    let registry = JitLevelRegistry::new();
    let first = AutoJitFlags::parse_str("--auto-jit=1").unwrap();
    let second = AutoJitFlags::parse_str("--auto-jit=2").unwrap();

    register_auto_jit_getter_with(&registry, &first).unwrap();
    let err = register_auto_jit_getter_with(&registry, &second).unwrap_err();

    assert!(matches!(
        err,
        AutoJitError::Registry(RegistryError::AlreadyRegistered { .. })
    ));
    // The first getter still answers.
    assert_eq!(registry.query(Default), JitLevels::uniform(On1));
}

#[test]
fn test_registration_yields_to_existing_getter() {
    let registry = JitLevelRegistry::new();
    registry
        .register(|_: autojit_config::GlobalJitLevel| JitLevels::uniform(On2))
        .unwrap();

    let err = register_auto_jit_getter_with(&registry, &AutoJitFlags::default()).unwrap_err();
    match err {
        AutoJitError::Registry(RegistryError::AlreadyRegistered { existing, rejected }) => {
            assert_eq!(existing, "anonymous");
            assert_eq!(rejected, AUTO_JIT_GETTER_NAME);
        }
        other => panic!("unexpected error: {other}"),
    }
}
