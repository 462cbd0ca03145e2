//! The Lua script host.
//!
//! A [`ScriptHost`] owns one Lua runtime. It is created empty, initialized
//! once with a set of standard libraries, and then executes chunks of script
//! text. Every parse or runtime failure comes back as an
//! [`Error::Script`]; the runtime stays usable afterwards.
//!
//! Each execution runs under an instruction hook that enforces the
//! configured instruction budget, wall-clock timeout, and the host's
//! [`CancelToken`].

use std::{
    cell::{Cell, RefCell},
    fs,
    mem,
    path::Path,
    rc::Rc,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use mlua::{
    FromLua, Function, HookTriggers, IntoLua, Lua, LuaOptions, MultiValue, StdLib, Table, Value,
    Variadic, VmState,
};
use regex::Regex;
use thiserror::Error as ThisError;
use tracing::{debug, info, warn};

use crate::{
    config::{HostConfig, LuaLibrary},
    error::{Error, Result, ScriptError, ScriptErrorKind},
    registry::UiEngine,
};

/// The `ui` table and element handles exposed to scripts.
mod bindings;

/// Printed lines kept between drains. Older lines are dropped first.
pub const OUTPUT_LIMIT: usize = 1024;

/// `debug` functions that would let a script remove the instruction hook or
/// reach the unguarded protected-call functions.
const RESTRICTED_DEBUG: [&str; 2] = ["sethook", "getregistry"];

pub use bindings::ElementHandle;

/// A shareable flag that stops a running script at its next hook check.
///
/// Clones share the same flag, so a token can be handed to another thread
/// and tripped there. The host clears the flag when an execution finishes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Construct an untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return true if the token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear the token.
    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Reason the instruction hook stopped a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
enum Interrupt {
    /// The instruction budget ran out.
    #[error("instruction budget of {0} exhausted")]
    Budget(u64),
    /// The wall-clock limit passed.
    #[error("execution exceeded {0} ms")]
    Deadline(u64),
    /// The cancel token was tripped.
    #[error("execution cancelled")]
    Cancelled,
}

impl Interrupt {
    /// The script error category for this interrupt.
    fn kind(self) -> ScriptErrorKind {
        match self {
            Self::Budget(_) | Self::Deadline(_) => ScriptErrorKind::Timeout,
            Self::Cancelled => ScriptErrorKind::Cancelled,
        }
    }
}

impl From<Interrupt> for ScriptError {
    fn from(i: Interrupt) -> Self {
        Self::new(i.kind(), i.to_string())
    }
}

/// Owns a Lua runtime and runs script text against it.
#[derive(Debug)]
pub struct ScriptHost {
    /// The runtime, present once initialized.
    lua: Option<Lua>,
    /// Limits and defaults.
    config: HostConfig,
    /// Libraries opened by `init`.
    libraries: Vec<LuaLibrary>,
    /// Cancellation flag checked by the instruction hook.
    cancel: CancelToken,
    /// Lines printed by scripts since the last `take_output`.
    output: Rc<RefCell<Vec<String>>>,
    /// Set by the hook when it stops the current execution.
    tripped: Rc<Cell<Option<Interrupt>>>,
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptHost {
    /// Construct an uninitialized host with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Construct an uninitialized host with `config`.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            lua: None,
            config,
            libraries: Vec::new(),
            cancel: CancelToken::new(),
            output: Rc::new(RefCell::new(Vec::new())),
            tripped: Rc::new(Cell::new(None)),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Return true once `init` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.lua.is_some()
    }

    /// Libraries opened by `init`. Base is always listed.
    pub fn libraries(&self) -> &[LuaLibrary] {
        &self.libraries
    }

    /// A handle to this host's cancel token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Create the runtime with the libraries listed in the configuration.
    pub fn init_with_config(&mut self) -> Result<()> {
        let libraries = self.config.libraries.clone();
        self.init(&libraries)
    }

    /// Create the runtime and open `libraries`.
    ///
    /// The base library is always opened. Fails with [`Error::DoubleInit`] if
    /// the host is already initialized.
    pub fn init(&mut self, libraries: &[LuaLibrary]) -> Result<()> {
        if self.lua.is_some() {
            return Err(Error::DoubleInit);
        }
        self.config.validate()?;

        let libs = std_lib(libraries);
        let lua = if libraries.contains(&LuaLibrary::Debug) {
            // SAFETY: the debug library can break the runtime's memory safety
            // guarantees from script code. It is only opened when the caller
            // asks for it by name.
            unsafe { Lua::unsafe_new_with(libs, LuaOptions::new()) }
        } else {
            Lua::new_with(libs, LuaOptions::new()).map_err(host_error)?
        };
        if self.config.memory_limit > 0 {
            lua.set_memory_limit(self.config.memory_limit)
                .map_err(host_error)?;
        }
        self.install_print(&lua).map_err(host_error)?;
        self.guard_protected_calls(&lua).map_err(host_error)?;
        restrict_debug(&lua).map_err(host_error)?;
        bindings::register(&lua).map_err(host_error)?;

        let mut opened = vec![LuaLibrary::Base];
        for lib in libraries {
            if !opened.contains(lib) {
                opened.push(*lib);
            }
        }
        debug!(libraries = ?opened, "script host initialized");
        self.libraries = opened;
        self.lua = Some(lua);
        Ok(())
    }

    /// Replace the global `print` with one that logs and captures its output.
    fn install_print(&self, lua: &Lua) -> mlua::Result<()> {
        let output = Rc::clone(&self.output);
        let print = lua.create_function(move |lua, args: Variadic<Value>| {
            let tostring: Function = lua.globals().get("tostring")?;
            let mut parts = Vec::with_capacity(args.len());
            for v in args.iter() {
                parts.push(tostring.call::<String>(v.clone())?);
            }
            let line = parts.join("\t");
            info!("{line}");
            let mut output = output.borrow_mut();
            if output.len() >= OUTPUT_LIMIT {
                output.remove(0);
            }
            output.push(line);
            Ok(())
        })?;
        lua.globals().set("print", print)
    }

    /// Wrap `pcall` and `xpcall` so that a stopped execution cannot be
    /// resumed by catching the hook's error.
    fn guard_protected_calls(&self, lua: &Lua) -> mlua::Result<()> {
        for name in ["pcall", "xpcall"] {
            let raw: Value = lua.globals().get(name)?;
            if raw.is_nil() {
                continue;
            }
            let key = format!("sprig.raw_{name}");
            lua.set_named_registry_value(&key, raw)?;
            let tripped = Rc::clone(&self.tripped);
            let guarded = lua.create_function(move |lua, args: MultiValue| {
                let raw: Function = lua.named_registry_value(&key)?;
                let out = raw.call::<MultiValue>(args)?;
                match tripped.get() {
                    Some(interrupt) => Err(mlua::Error::external(interrupt)),
                    None => Ok(out),
                }
            })?;
            lua.globals().set(name, guarded)?;
        }
        Ok(())
    }

    /// The runtime, or [`Error::NotInitialized`].
    fn lua(&self) -> Result<&Lua> {
        self.lua.as_ref().ok_or(Error::NotInitialized)
    }

    /// Run `text` with no UI engine bound. Calls into the `ui` table fail
    /// with a runtime error.
    pub fn execute(&self, text: &str) -> Result<()> {
        self.run(None, text, &self.config.chunk_name)
    }

    /// Run `text` with `ui` bound to the script's `ui` table.
    pub fn execute_on(&self, ui: &mut UiEngine, text: &str) -> Result<()> {
        self.run(Some(ui), text, &self.config.chunk_name)
    }

    /// Read and run a script file against `ui`. Error messages name the file.
    pub fn execute_file(&self, ui: &mut UiEngine, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let chunk = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.run(Some(ui), &text, &chunk)
    }

    /// Compile `text` without running it.
    pub fn check(&self, text: &str) -> Result<()> {
        let chunk = &self.config.chunk_name;
        self.lua()?
            .load(text)
            .set_name(format!("={chunk}"))
            .into_function()
            .map(|_| ())
            .map_err(|e| Error::Script(classify(&e, chunk)))
    }

    /// Return true if `text` fails to compile only because it ends early,
    /// as an unfinished block or string does.
    pub fn is_incomplete(&self, text: &str) -> Result<bool> {
        let res = self
            .lua()?
            .load(text)
            .set_name(format!("={}", self.config.chunk_name))
            .into_function();
        Ok(matches!(
            res,
            Err(mlua::Error::SyntaxError {
                incomplete_input: true,
                ..
            })
        ))
    }

    /// Read a global variable.
    pub fn get_global<T: FromLua>(&self, name: &str) -> Result<T> {
        self.lua()?
            .globals()
            .get::<T>(name)
            .map_err(|e| Error::InvalidArgument(format!("global {name}: {e}")))
    }

    /// Set a global variable.
    pub fn set_global<T: IntoLua>(&self, name: &str, value: T) -> Result<()> {
        self.lua()?
            .globals()
            .set(name, value)
            .map_err(|e| Error::InvalidArgument(format!("global {name}: {e}")))
    }

    /// Drain the lines printed by scripts. At most [`OUTPUT_LIMIT`] of the
    /// most recent lines are kept between drains.
    pub fn take_output(&self) -> Vec<String> {
        mem::take(&mut *self.output.borrow_mut())
    }

    /// Run one chunk under the instruction hook, optionally with a bound UI.
    fn run(&self, ui: Option<&mut UiEngine>, text: &str, chunk: &str) -> Result<()> {
        let lua = self.lua()?;
        if self.cancel.is_cancelled() {
            self.cancel.reset();
            return Err(Error::Script(Interrupt::Cancelled.into()));
        }

        self.tripped.set(None);
        self.install_hook(lua).map_err(host_error)?;
        let loaded = lua.load(text).set_name(format!("={chunk}"));
        let result = match ui {
            Some(ui) => bindings::with_bound(ui, || loaded.exec()),
            None => loaded.exec(),
        };
        lua.remove_hook();
        self.cancel.reset();

        result.map_err(|e| {
            let err = match self.tripped.get() {
                Some(interrupt) => ScriptError::from(interrupt),
                None => classify(&e, chunk),
            };
            warn!(chunk, error = %err, "script failed");
            Error::Script(err)
        })
    }

    /// Install the budget hook for one execution.
    fn install_hook(&self, lua: &Lua) -> mlua::Result<()> {
        let interval = self.config.hook_interval;
        let limit = self.config.instruction_limit;
        let timeout_ms = self.config.timeout_ms;
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        let cancel = self.cancel.clone();
        let executed = Cell::new(0u64);
        let tripped = Rc::clone(&self.tripped);

        lua.set_hook(
            HookTriggers::new().every_nth_instruction(interval),
            move |_lua, _debug| {
                executed.set(executed.get().saturating_add(u64::from(interval)));
                let hit = if cancel.is_cancelled() {
                    Some(Interrupt::Cancelled)
                } else if limit > 0 && executed.get() > limit {
                    Some(Interrupt::Budget(limit))
                } else if timeout_ms > 0 && Instant::now() >= deadline {
                    Some(Interrupt::Deadline(timeout_ms))
                } else {
                    None
                };
                match hit {
                    Some(interrupt) => {
                        tripped.set(Some(interrupt));
                        Err(mlua::Error::external(interrupt))
                    }
                    None => Ok(VmState::Continue),
                }
            },
        )
    }
}

/// Replace the `debug` functions in [`RESTRICTED_DEBUG`] with stubs that
/// raise an error. Does nothing when the debug library is not open.
fn restrict_debug(lua: &Lua) -> mlua::Result<()> {
    let Some(debug) = lua.globals().get::<Option<Table>>("debug")? else {
        return Ok(());
    };
    for name in RESTRICTED_DEBUG {
        let stub = lua.create_function(move |_, _: MultiValue| -> mlua::Result<()> {
            Err(mlua::Error::runtime(format!(
                "debug.{name} is not available to scripts"
            )))
        })?;
        debug.set(name, stub)?;
    }
    Ok(())
}

/// Map a library list onto runtime flags. Base needs no flag.
fn std_lib(libraries: &[LuaLibrary]) -> StdLib {
    libraries.iter().fold(StdLib::NONE, |acc, lib| {
        acc | match lib {
            LuaLibrary::Base => StdLib::NONE,
            LuaLibrary::Coroutine => StdLib::COROUTINE,
            LuaLibrary::Debug => StdLib::DEBUG,
            LuaLibrary::Io => StdLib::IO,
            LuaLibrary::Math => StdLib::MATH,
            LuaLibrary::Os => StdLib::OS,
            LuaLibrary::Package => StdLib::PACKAGE,
            LuaLibrary::String => StdLib::STRING,
            LuaLibrary::Table => StdLib::TABLE,
            LuaLibrary::Utf8 => StdLib::UTF8,
        }
    })
}

/// Wrap a runtime failure that happened outside script execution.
fn host_error(e: mlua::Error) -> Error {
    Error::Script(ScriptError::new(ScriptErrorKind::Runtime, e.to_string()))
}

/// Convert a runtime error into a script error with a source line, if the
/// message carries one.
fn classify(err: &mlua::Error, chunk: &str) -> ScriptError {
    match err {
        mlua::Error::SyntaxError { message, .. } => located(ScriptErrorKind::Syntax, message, chunk),
        mlua::Error::RuntimeError(message) => located(ScriptErrorKind::Runtime, message, chunk),
        mlua::Error::MemoryError(message) => ScriptError::new(ScriptErrorKind::Memory, message.clone()),
        mlua::Error::CallbackError { traceback, cause } => {
            let mut inner = classify(cause, chunk);
            if inner.line.is_none() {
                inner.line = split_location(traceback, chunk).0;
            }
            inner
        }
        mlua::Error::ExternalError(e) => match e.downcast_ref::<Interrupt>() {
            Some(interrupt) => ScriptError::from(*interrupt),
            None => located(ScriptErrorKind::Runtime, &e.to_string(), chunk),
        },
        other => located(ScriptErrorKind::Runtime, &other.to_string(), chunk),
    }
}

/// Build a script error from a raw message, dropping any traceback.
fn located(kind: ScriptErrorKind, raw: &str, chunk: &str) -> ScriptError {
    let text = raw.split("\nstack traceback:").next().unwrap_or(raw).trim();
    let (line, message) = split_location(text, chunk);
    ScriptError::new(kind, message).with_position(line, None)
}

/// Find the first `chunk:LINE:` marker in `text`. A marker at the start of
/// the text is stripped from the returned message.
fn split_location(text: &str, chunk: &str) -> (Option<usize>, String) {
    let Ok(re) = Regex::new(&format!(r"{}:(\d+):\s*", regex::escape(chunk))) else {
        return (None, text.to_string());
    };
    let Some(caps) = re.captures(text) else {
        return (None, text.to_string());
    };
    let line = caps.get(1).and_then(|m| m.as_str().parse().ok());
    let message = match caps.get(0) {
        Some(m) if m.start() == 0 => text[m.end()..].to_string(),
        _ => text.to_string(),
    };
    (line, message)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn host() -> ScriptHost {
        let mut host = ScriptHost::new();
        host.init_with_config().unwrap();
        host
    }

    fn script_error(res: Result<()>) -> ScriptError {
        match res {
            Err(Error::Script(e)) => e,
            other => panic!("expected script error, got {other:?}"),
        }
    }

    #[test]
    fn init_twice_fails() {
        let mut host = host();
        assert_eq!(host.init(&[LuaLibrary::Math]), Err(Error::DoubleInit));
        assert!(host.is_initialized());
    }

    #[test]
    fn execute_requires_init() {
        let host = ScriptHost::new();
        assert_eq!(host.execute("x = 1"), Err(Error::NotInitialized));
        assert_eq!(host.get_global::<i64>("x"), Err(Error::NotInitialized));
    }

    #[test]
    fn syntax_error_then_recovery() -> Result<()> {
        let host = host();
        let err = script_error(host.execute("this is not valid syntax"));
        assert_eq!(err.kind, ScriptErrorKind::Syntax);
        assert_eq!(err.line, Some(1));
        assert_eq!(err.column, None);

        host.execute("x = 1 + 1")?;
        assert_eq!(host.get_global::<i64>("x")?, 2);
        Ok(())
    }

    #[test]
    fn runtime_error_reports_line() {
        let host = host();
        let err = script_error(host.execute("local a = 1\nerror('boom')"));
        assert_eq!(err.kind, ScriptErrorKind::Runtime);
        assert_eq!(err.line, Some(2));
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn runaway_loop_hits_budget() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            instruction_limit: 50_000,
            hook_interval: 100,
            timeout_ms: 0,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        let err = script_error(host.execute("while true do end"));
        assert_eq!(err.kind, ScriptErrorKind::Timeout);

        // The budget is per execution.
        host.execute("y = 3")?;
        assert_eq!(host.get_global::<i64>("y")?, 3);
        Ok(())
    }

    #[test]
    fn pcall_cannot_swallow_budget() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            instruction_limit: 50_000,
            hook_interval: 100,
            timeout_ms: 0,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        let err = script_error(
            host.execute("while true do pcall(function() while true do end end) end"),
        );
        assert_eq!(err.kind, ScriptErrorKind::Timeout);
        Ok(())
    }

    #[test]
    fn debug_library_cannot_remove_the_hook() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            instruction_limit: 50_000,
            hook_interval: 100,
            timeout_ms: 0,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        assert!(host.libraries().contains(&LuaLibrary::Debug));

        let err = script_error(host.execute("debug.sethook()"));
        assert_eq!(err.kind, ScriptErrorKind::Runtime);
        assert!(err.message.contains("debug.sethook"), "{}", err.message);

        let err = script_error(host.execute(
            "pcall(debug.sethook) local n = 0 for i = 1, 20000000 do n = n + 1 end done = n",
        ));
        assert_eq!(err.kind, ScriptErrorKind::Timeout);
        assert_eq!(host.get_global::<Option<i64>>("done")?, None);

        let err = script_error(host.execute(
            "local ok, reg = pcall(debug.getregistry) assert(not ok) while true do end",
        ));
        assert_eq!(err.kind, ScriptErrorKind::Timeout);

        // The rest of the library stays usable.
        host.execute("info = debug.getinfo(1, 'l').currentline")?;
        assert_eq!(host.get_global::<i64>("info")?, 1);
        Ok(())
    }

    #[test]
    fn runaway_loop_hits_deadline() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            instruction_limit: 0,
            timeout_ms: 20,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        let err = script_error(host.execute("while true do end"));
        assert_eq!(err.kind, ScriptErrorKind::Timeout);
        Ok(())
    }

    #[test]
    fn cancel_before_run() -> Result<()> {
        let host = host();
        host.cancel_token().cancel();
        let err = script_error(host.execute("z = 1"));
        assert_eq!(err.kind, ScriptErrorKind::Cancelled);
        assert_eq!(host.get_global::<Option<i64>>("z")?, None);

        host.execute("z = 1")?;
        assert_eq!(host.get_global::<i64>("z")?, 1);
        Ok(())
    }

    #[test]
    fn cancel_from_another_thread() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            instruction_limit: 0,
            timeout_ms: 0,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        let token = host.cancel_token();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            token.cancel();
        });
        let err = script_error(host.execute("while true do end"));
        canceller.join().unwrap();
        assert_eq!(err.kind, ScriptErrorKind::Cancelled);
        assert!(!host.cancel_token().is_cancelled());
        Ok(())
    }

    #[test]
    fn memory_limit_is_reported() -> Result<()> {
        let mut host = ScriptHost::with_config(HostConfig {
            memory_limit: 4 * 1024 * 1024,
            ..HostConfig::default()
        });
        host.init_with_config()?;
        let err = script_error(host.execute("local t = {} for i = 1, 1e8 do t[i] = i end"));
        assert_eq!(err.kind, ScriptErrorKind::Memory);
        host.execute("ok = true")?;
        assert!(host.get_global::<bool>("ok")?);
        Ok(())
    }

    #[test]
    fn library_subsets() -> Result<()> {
        let mut host = ScriptHost::new();
        host.init(&[LuaLibrary::Math])?;
        assert_eq!(host.libraries(), &[LuaLibrary::Base, LuaLibrary::Math]);
        host.execute("assert(string == nil) assert(io == nil) v = math.floor(2.5)")?;
        assert_eq!(host.get_global::<i64>("v")?, 2);
        assert!(host.execute("os.exit()").is_err());

        let mut host = ScriptHost::new();
        host.init(&[LuaLibrary::Debug, LuaLibrary::String])?;
        host.execute("assert(debug ~= nil) assert(string.upper('a') == 'A')")?;
        Ok(())
    }

    #[test]
    fn print_is_captured() -> Result<()> {
        let host = host();
        host.execute("print('hello', 1, true) print(nil)")?;
        assert_eq!(host.take_output(), vec!["hello\t1\ttrue", "nil"]);
        assert!(host.take_output().is_empty());
        Ok(())
    }

    #[test]
    fn output_keeps_the_latest_lines() -> Result<()> {
        let host = host();
        host.execute(&format!("for i = 1, {} do print(i) end", OUTPUT_LIMIT + 76))?;
        let out = host.take_output();
        assert_eq!(out.len(), OUTPUT_LIMIT);
        assert_eq!(out[0], "77");
        assert_eq!(out[OUTPUT_LIMIT - 1], (OUTPUT_LIMIT + 76).to_string());
        Ok(())
    }

    #[test]
    fn check_does_not_run() -> Result<()> {
        let host = host();
        host.check("w = 5")?;
        assert_eq!(host.get_global::<Option<i64>>("w")?, None);
        let err = script_error(host.check("w = "));
        assert_eq!(err.kind, ScriptErrorKind::Syntax);
        assert!(host.is_incomplete("if true then")?);
        assert!(!host.is_incomplete("x = = 1")?);
        Ok(())
    }

    #[test]
    fn globals_round_trip() -> Result<()> {
        let host = host();
        host.set_global("n", 41)?;
        host.execute("n = n + 1")?;
        assert_eq!(host.get_global::<i64>("n")?, 42);
        assert!(matches!(
            host.get_global::<i64>("missing"),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn ui_calls_need_a_bound_engine() {
        let host = host();
        let err = script_error(host.execute("ui.new('Frame')"));
        assert_eq!(err.kind, ScriptErrorKind::Runtime);
        assert!(err.message.contains("no UI engine"), "{}", err.message);
    }

    #[test]
    fn location_prefix_is_stripped() {
        assert_eq!(
            split_location("script:3: oops", "script"),
            (Some(3), "oops".to_string())
        );
        assert_eq!(
            split_location("in script:7: oops", "script"),
            (Some(7), "in script:7: oops".to_string())
        );
        assert_eq!(split_location("oops", "script"), (None, "oops".to_string()));
    }
}
