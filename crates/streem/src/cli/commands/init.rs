//! Implementation of `streem init`.

use std::{fs, process::ExitCode};

use streem_config::{CONFIG_FILENAME, local_template};

use crate::cli::{
    args::InitCommand,
    context::{CommandContext, write_nodes},
};

/// Creates `.streem.toml` and, if missing, an empty node list.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let config_path = ctx.cwd.join(CONFIG_FILENAME);

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::write(&config_path, local_template()) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }
    println!("Created {}", config_path.display());

    if !ctx.store_path.exists() {
        if let Err(code) = write_nodes(&ctx.store_path, &[]) {
            return code;
        }
        println!("Created {}", ctx.store_path.display());
    }

    ExitCode::SUCCESS
}
