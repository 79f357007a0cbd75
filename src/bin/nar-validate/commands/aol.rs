//! `nar-validate aol` command

use anyhow::Result;

use crate::cli::AolArgs;
use nar_validate::core::{HostPlatform, Linker, LinkerConfig};
use nar_validate::ops::validate::{resolve_aol, select_linker};
use nar_validate::util::GlobalContext;

pub fn execute(args: AolArgs, ctx: &GlobalContext) -> Result<()> {
    let host = HostPlatform::current();

    // The descriptor is optional here; without one only host facts apply
    let (linker, config) = match ctx.load_project() {
        Ok(project) => {
            let config = ctx.load_config(project.root());
            (select_linker(&project, &host, &config), config)
        }
        Err(e) => {
            tracing::debug!("No descriptor, using host defaults: {:#}", e);
            let config = ctx.load_config(ctx.cwd());
            let mut linker_config = LinkerConfig::default();
            linker_config.merge(&config.linker);
            (Linker::from_config(&linker_config, &host), config)
        }
    };

    let linker = match args.linker {
        Some(name) => Linker::new(name),
        None => linker,
    };

    let aol = resolve_aol(&host, &linker, &config)?;

    println!("{}", aol);
    println!("key: {}", aol.key());

    Ok(())
}
