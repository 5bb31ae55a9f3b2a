use autojit::{
    cli::CLI,
    initializers::{init_jit_level_registry, init_tracing},
};
use autojit_config::JIT_LEVEL_REGISTRY;
use clap::Parser;

fn main() -> eyre::Result<()> {
    let CLI { opts, command } = CLI::parse();

    init_tracing(&opts);
    init_jit_level_registry(&opts, &JIT_LEVEL_REGISTRY)?;

    let reports = command
        .unwrap_or_default()
        .run(&opts, &JIT_LEVEL_REGISTRY);
    println!("{}", opts.format.render(&reports)?);

    Ok(())
}
