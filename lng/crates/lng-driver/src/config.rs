//! CLI configuration. Mirrors the teacher driver's `Config` shape,
//! trimmed to what an interpreter actually needs: no optimization
//! level, target triple, or linker options, since this project never
//! produces compiled output.

use std::path::PathBuf;

/// Which stage's output the CLI should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// Token stream (debugging aid).
    Tokens,
    /// Parsed AST (debugging aid).
    Ast,
    /// `pf` output from running the program. Default.
    #[default]
    Run,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Source file to run.
    pub input_file: PathBuf,
    /// What to print.
    pub emit: Emit,
    /// Gate `eprintln!` progress lines for each pipeline phase.
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file = None;
        let mut emit = Emit::Run;
        let mut verbose = false;

        for arg in args {
            match arg.as_str() {
                "--verbose" | "-v" => verbose = true,
                "--emit-tokens" => emit = Emit::Tokens,
                "--emit-ast" => emit = Emit::Ast,
                _ if arg.starts_with('-') => {
                    return Err(format!("unrecognized flag '{arg}'"));
                }
                _ => {
                    if input_file.is_some() {
                        return Err("expected exactly one input file".to_string());
                    }
                    input_file = Some(PathBuf::from(arg));
                }
            }
        }

        let input_file = input_file.ok_or_else(|| "missing input file".to_string())?;
        Ok(Self { input_file, emit, verbose })
    }
}
