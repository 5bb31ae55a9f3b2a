//! Effective level table for the auto-jit policy.

use autojit_config::GlobalJitLevel::{Default, Off, On1, On2};
use autojit_config::{JitLevelGetter, JitLevels};

use crate::flags::AutoJitFlag;
use crate::policy::{AUTO_JIT_GETTER_NAME, AutoJitGetter, effective_levels};

#[test]
fn test_default_session_without_flag_is_off() {
    assert_eq!(
        effective_levels(Default, AutoJitFlag::default()),
        JitLevels::uniform(Off)
    );
}

#[test]
fn test_explicit_session_without_flag_is_kept() {
    for session in [Off, On1, On2] {
        assert_eq!(
            effective_levels(session, AutoJitFlag::default()),
            JitLevels::uniform(session)
        );
    }
}

#[test]
fn test_uniform_flag_overrides_session() {
    assert_eq!(
        effective_levels(Default, AutoJitFlag::uniform(On2)),
        JitLevels::uniform(On2)
    );
    assert_eq!(
        effective_levels(On2, AutoJitFlag::uniform(Off)),
        JitLevels::uniform(Off)
    );
}

#[test]
fn test_single_device_flag_only_overrides_single_device() {
    let flag = AutoJitFlag::single_device(On2);
    assert_eq!(effective_levels(Default, flag), JitLevels::new(On2, Off));
    assert_eq!(effective_levels(On1, flag), JitLevels::new(On2, On1));
}

#[test]
fn test_getter_applies_policy_and_reports_name() {
    let getter = AutoJitGetter::new(AutoJitFlag::single_device(On1));
    assert_eq!(getter.name(), AUTO_JIT_GETTER_NAME);
    assert_eq!(getter.global_jit_level(Default), JitLevels::new(On1, Off));
    assert_eq!(getter.global_jit_level(On2), JitLevels::new(On1, On2));
}
