//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let out = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "rosegen", out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "rosegen", out),
        Shell::Fish => generate(shells::Fish, &mut cmd, "rosegen", out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "rosegen", out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "rosegen", out),
    };

    Ok(())
}
