//! CLI entry point: read the source file, run the requested stage,
//! print its result. `--verbose` gates `eprintln!` progress lines per
//! phase, mirroring the teacher driver's `Session::compile`.

use anyhow::{bail, Context, Result};

use crate::config::{Config, Emit};

pub fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args).map_err(anyhow::Error::msg)?;

    let source = std::fs::read_to_string(&config.input_file)
        .with_context(|| format!("reading {}", config.input_file.display()))?;

    if config.verbose {
        eprintln!("lexing {}", config.input_file.display());
    }

    match config.emit {
        Emit::Tokens => {
            let (tokens, errors) = crate::tokenize(&source);
            for token in &tokens {
                println!("{token:?}");
            }
            report_lex_errors(&errors);
            if !errors.is_empty() {
                bail!("lexing failed");
            }
        }
        Emit::Ast => {
            if config.verbose {
                eprintln!("parsing {}", config.input_file.display());
            }
            let (program, errors) = crate::parse(&source);
            println!("{program:#?}");
            report_static_errors(&errors.into_iter().map(Into::into).collect::<Vec<_>>());
        }
        Emit::Run => {
            if config.verbose {
                eprintln!("parsing {}", config.input_file.display());
                eprintln!("analyzing {}", config.input_file.display());
                eprintln!("running {}", config.input_file.display());
            }
            let outcome = crate::run(&source);
            for line in &outcome.output {
                println!("{line}");
            }
            report_static_errors(&outcome.errors);
            if let Some(error) = &outcome.error {
                if outcome.errors.is_empty() {
                    // Runtime error: already printed as the last output line.
                } else {
                    eprintln!("{error}");
                }
            }
            if outcome.error.is_some() {
                bail!("run failed");
            }
        }
    }

    Ok(())
}

fn report_lex_errors(errors: &[lng_lex::LexError]) {
    for error in errors {
        eprintln!("error: line {}:{}: {}", error.line, error.column, error.message);
    }
}

fn report_static_errors(errors: &[crate::StaticError]) {
    for error in errors {
        eprintln!("error: {error}");
    }
}
