use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs, kept minimal on purpose:
// build scripts can't access src/ modules, and completions only need the
// command and flag names.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("rte")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and decorating rich-text editor content")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("words").long("words").conflicts_with("spec"))
                .arg(Arg::new("spec").long("spec").value_hint(ValueHint::FilePath))
                .arg(Arg::new("class").long("class"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("text")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("count")
                        .long("count")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("word-at")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("offset").index(2)),
        );

    generate_to(Bash, &mut cmd, "rte", &outdir)?;
    generate_to(Zsh, &mut cmd, "rte", &outdir)?;
    generate_to(Fish, &mut cmd, "rte", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
