use std::io::IsTerminal;

use autojit_config::JitLevelRegistry;
use eyre::WrapErr;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter::Directive, fmt, layer::SubscriberExt};

use crate::cli::{LogColor, Options};

/// Startup hook that may register a JIT level getter.
pub type JitLevelInitializer = fn(&Options, &JitLevelRegistry) -> eyre::Result<()>;

/// Registry initializers, run in order by [`init_jit_level_registry`].
///
/// At most one entry may end up registering a getter; a second registration
/// fails startup.
pub const JIT_LEVEL_INITIALIZERS: &[(&str, JitLevelInitializer)] =
    &[("auto-jit-flags", init_auto_jit)];

pub fn init_tracing(opts: &Options) {
    let log_filter = EnvFilter::builder()
        .with_default_directive(Directive::from(opts.log_level))
        .from_env_lossy();

    let use_color = match opts.log_color {
        LogColor::Always => true,
        LogColor::Never => false,
        LogColor::Auto => std::io::stderr().is_terminal(),
    };

    let include_target = matches!(opts.log_level, Level::DEBUG | Level::TRACE);

    // Logs go to stderr; stdout carries the query output.
    let fmt_layer = fmt::layer()
        .with_target(include_target)
        .with_ansi(use_color)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default().with(fmt_layer.with_filter(log_filter));

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// Run every entry of [`JIT_LEVEL_INITIALIZERS`] against `registry`.
///
/// Must run once, before the first level query that matters.
pub fn init_jit_level_registry(opts: &Options, registry: &JitLevelRegistry) -> eyre::Result<()> {
    for (name, initializer) in JIT_LEVEL_INITIALIZERS {
        debug!(initializer = name, "Running JIT level initializer");
        initializer(opts, registry)
            .wrap_err_with(|| format!("JIT level initializer `{name}` failed"))?;
    }

    match registry.registrant() {
        Some(getter) => info!(getter = %getter, "JIT level override active"),
        None => info!("No JIT level override registered, session level is used as is"),
    }
    Ok(())
}

fn init_auto_jit(opts: &Options, registry: &JitLevelRegistry) -> eyre::Result<()> {
    if opts.no_auto_jit {
        info!("Auto-jit override disabled");
        return Ok(());
    }
    autojit_flags::register_auto_jit_getter(registry)?;
    Ok(())
}
