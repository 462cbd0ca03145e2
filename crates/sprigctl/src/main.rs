//! Headless shell for sprig: run Lua UI scripts and inspect the result.

use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sprig::{Error, HostConfig, LuaLibrary, ScriptHost, UiEngine, dump};
use tracing::Level;

/// Text painter used to print draw calls.
mod painter;

use painter::TextPainter;

/// CLI flags for sprigctl.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity. Repeat for more detail.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Host configuration file (TOML).
    #[clap(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Open only the Lua libraries without host access, overriding the
    /// configured set.
    #[clap(long, global = true)]
    safe: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// sprigctl subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script file against an empty UI.
    Run(RunArgs),
    /// Check a script file for syntax errors without running it.
    Check {
        /// Script file.
        file: PathBuf,
    },
    /// Read Lua from stdin, one chunk at a time.
    Repl,
    /// Run a script file and print the resulting element tree.
    Dump {
        /// Script file.
        file: PathBuf,
    },
    /// Print the effective host configuration as TOML.
    Config,
}

/// Arguments for `run`.
#[derive(Parser, Debug)]
struct RunArgs {
    /// Script file.
    file: PathBuf,

    /// Print the element tree afterwards.
    #[arg(long)]
    tree: bool,

    /// Print the draw calls of one paint pass afterwards.
    #[arg(long)]
    draw: bool,
}

/// Install the log subscriber. Logs go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Load the host configuration, falling back to defaults.
fn load_config(path: Option<&Path>, safe: bool) -> Result<HostConfig> {
    let mut config = match path {
        Some(p) => HostConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => HostConfig::default(),
    };
    if safe {
        config.libraries = LuaLibrary::SAFE.to_vec();
    }
    Ok(config)
}

/// Build and initialize a script host.
fn host(config: HostConfig) -> Result<ScriptHost> {
    let mut host = ScriptHost::with_config(config);
    host.init_with_config()?;
    Ok(host)
}

/// Print captured script output and registry diagnostics.
fn flush(host: &ScriptHost, ui: &mut UiEngine) {
    for line in host.take_output() {
        println!("{line}");
    }
    for d in ui.take_diagnostics() {
        eprintln!("warning: {}", d.message);
    }
}

/// Render the tree, colored when stdout is a terminal.
fn print_tree(ui: &UiEngine) -> Result<()> {
    let text = if io::stdout().is_terminal() {
        dump::dump_ansi(ui)?
    } else {
        dump::dump(ui)?
    };
    print!("{text}");
    Ok(())
}

/// Print one paint pass.
fn print_draw_calls(ui: &UiEngine) -> Result<()> {
    let mut painter = TextPainter::default();
    ui.paint(&mut painter)?;
    for line in painter.lines {
        println!("{line}");
    }
    Ok(())
}

/// Run a file against a fresh engine.
fn run_file(config: HostConfig, file: &Path) -> Result<UiEngine> {
    let host = host(config)?;
    let mut ui = UiEngine::new();
    let res = host.execute_file(&mut ui, file);
    flush(&host, &mut ui);
    res.with_context(|| format!("running {}", file.display()))?;
    Ok(ui)
}

/// Read-eval-print loop over stdin.
fn repl(config: HostConfig) -> Result<()> {
    let host = host(config)?;
    let mut ui = UiEngine::new();
    let stdin = io::stdin();
    let mut pending = String::new();

    prompt(false)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" if pending.is_empty() => break,
            ":tree" if pending.is_empty() => print_tree(&ui)?,
            ":draw" if pending.is_empty() => print_draw_calls(&ui)?,
            _ => {
                pending.push_str(&line);
                pending.push('\n');
                if host.is_incomplete(&pending)? {
                    prompt(true)?;
                    continue;
                }
                match host.execute_on(&mut ui, &pending) {
                    Ok(()) => {}
                    Err(Error::Script(e)) => eprintln!("error: {e}"),
                    Err(e) => return Err(e.into()),
                }
                pending.clear();
                flush(&host, &mut ui);
            }
        }
        prompt(false)?;
    }
    Ok(())
}

/// Print the REPL prompt.
fn prompt(continuation: bool) -> Result<()> {
    let mut out = io::stdout();
    write!(out, "{}", if continuation { ">> " } else { "> " })?;
    out.flush()?;
    Ok(())
}

/// Run sprigctl.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = load_config(args.config.as_deref(), args.safe)?;

    match args.command {
        Command::Run(run) => {
            let ui = run_file(config, &run.file)?;
            if run.tree {
                print_tree(&ui)?;
            }
            if run.draw {
                print_draw_calls(&ui)?;
            }
        }
        Command::Check { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            host(config)?
                .check(&text)
                .with_context(|| format!("checking {}", file.display()))?;
            println!("{}: ok", file.display());
        }
        Command::Repl => repl(config)?,
        Command::Dump { file } => {
            let ui = run_file(config, &file)?;
            print_tree(&ui)?;
        }
        Command::Config => print!("{}", config.to_toml()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_flag_replaces_libraries() -> Result<()> {
        assert_eq!(load_config(None, false)?, HostConfig::default());
        let config = load_config(None, true)?;
        assert_eq!(config.libraries, LuaLibrary::SAFE.to_vec());

        let host = host(config)?;
        host.execute("assert(io == nil and os == nil and debug == nil) s = string.rep('a', 2)")?;
        assert_eq!(host.get_global::<String>("s")?, "aa");
        Ok(())
    }

    #[test]
    fn safe_flag_parses_after_subcommand() {
        let args = Args::parse_from(["sprigctl", "check", "x.lua", "--safe"]);
        assert!(args.safe);
        assert!(matches!(args.command, Command::Check { .. }));
    }
}
