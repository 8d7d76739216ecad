//! Shell completion script generation

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

/// Write the completion script for the requested shell to stdout
///
/// The binary name is taken from the clap definition so the script stays
/// correct if the command is ever renamed.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(args.shell, &mut command, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn bash_script_covers_the_subcommands() {
        let mut command = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut command, "brokkr", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        for subcommand in ["provision", "version", "completions"] {
            assert!(script.contains(subcommand), "missing {subcommand}");
        }
    }
}
