use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor a level is supplied.
pub const DEFAULT_FILTER: &str = "info,budget_ui=debug,budget_core=debug";

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, colored on a terminal.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if ansi {
            write!(writer, "\x1b[2m{stamp}\x1b[0m ")?;
        } else {
            write!(writer, "{stamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .or_else(|| file.rsplit_once("src\\"))
                .map_or(file, |(_, rest)| rest);
            if ansi {
                write!(writer, "\x1b[36m{}/{file}:{line}\x1b[0m ", crate_of(meta.target()))?;
            } else {
                write!(writer, "{}/{file}:{line} ", crate_of(meta.target()))?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Leading path segment of a target, e.g. `budget_core` for `budget_core::wizard`.
fn crate_of(target: &str) -> &str {
    target.split("::").next().unwrap_or(target)
}

// --- Late-bound file writer ---

type FileCell = Arc<Mutex<Option<File>>>;

/// Writer target that can be pointed at a file after the subscriber is
/// installed. Records are dropped while no file is set.
#[derive(Clone)]
struct FileSlot(FileCell);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_slot(&self.0))
    }
}

// A panic while holding the lock leaves the file usable.
fn lock_slot(cell: &FileCell) -> MutexGuard<'_, Option<File>> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

// --- Global state ---

static APP_NAME: OnceLock<String> = OnceLock::new();
static FILE_SLOT: OnceLock<FileCell> = OnceLock::new();

fn file_slot() -> Result<&'static FileCell> {
    FILE_SLOT.get().context("logging not yet initialized")
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

// --- Public API ---

/// Appends log records to `path`, replacing any previously opened file.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    *lock_slot(file_slot()?) = Some(file);
    Ok(())
}

pub fn disable_file_logging() {
    if let Ok(cell) = file_slot() {
        *lock_slot(cell) = None;
    }
}

/// Executable stem, or `"BudgetWise"` when it cannot be determined.
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "BudgetWise".to_string())
    })
}

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` wins over `level` when set. `level` of `None` falls back to
/// [`DEFAULT_FILTER`]. Stdout output is only attached when `stdout` is
/// true. File output stays inactive until [`enable_file_logging`] is called.
pub fn init_logging(
    level: Option<&str>,
    stdout: bool,
) -> Result<()> {
    let _ = app_name();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(level.unwrap_or(DEFAULT_FILTER))?,
    };

    let file_cell: FileCell = Arc::new(Mutex::new(None));

    // Stdout is decided once at startup; the TUI owns the screen otherwise.
    let stdout_layer = stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_cell.clone()));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global subscriber is already installed")?;

    let _ = FILE_SLOT.set(file_cell);
    Ok(())
}
