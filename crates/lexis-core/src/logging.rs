use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Stemming counters for structured logging.
///
/// Tracks how many words went through a stemmer and what happened to them.
/// All operations are atomic and lock-free so one instance can be shared by
/// the workers of a preprocessing pipeline.
#[derive(Debug, Default)]
pub struct StemStats {
    /// Words handed to a stemmer
    words_seen: AtomicU64,
    /// Words whose stem differs from the input
    words_changed: AtomicU64,
    /// Words whose rule program hit an invariant violation
    words_aborted: AtomicU64,
}

impl StemStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one `stem()` call
    pub fn record(&self, changed: bool) {
        self.words_seen.fetch_add(1, Ordering::Relaxed);
        if changed {
            self.words_changed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a word whose processing was aborted
    pub fn record_aborted(&self) {
        self.words_seen.fetch_add(1, Ordering::Relaxed);
        self.words_aborted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn words_seen(&self) -> u64 {
        self.words_seen.load(Ordering::Relaxed)
    }

    pub fn words_changed(&self) -> u64 {
        self.words_changed.load(Ordering::Relaxed)
    }

    pub fn words_aborted(&self) -> u64 {
        self.words_aborted.load(Ordering::Relaxed)
    }

    /// Share of seen words that were changed, as a percentage (0.0-100.0)
    pub fn change_rate(&self) -> f64 {
        let seen = self.words_seen();
        if seen == 0 {
            0.0
        } else {
            (self.words_changed() as f64 / seen as f64) * 100.0
        }
    }
}

/// Log stemming counters at debug level.
///
/// Usage:
/// ```rust,ignore
/// let stats = StemStats::new();
/// // ... stem some words ...
/// log_stem_stats!(&stats, "vectorize");
/// ```
#[macro_export]
macro_rules! log_stem_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            words_seen = $stats.words_seen(),
            words_changed = $stats.words_changed(),
            words_aborted = $stats.words_aborted(),
            change_rate = $stats.change_rate(),
            "stem_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", documents = docs.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "lexis=debug,lexis_core=debug",
        (false, None) => "lexis=warn,lexis_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support LEXIS_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("LEXIS_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("lexis={level},lexis_core={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
