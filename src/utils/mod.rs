//! Utility functions

pub mod stopwords;
pub mod tokens;

pub use stopwords::{default_stopwords, remove_stopwords, DEFAULT_STOPWORDS};
pub use tokens::tokenize;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr tracing subscriber for binaries and tests embedding the crate.
///
/// A non-empty RUST_LOG is used as is; otherwise `verbose` selects DEBUG,
/// else WARN. Calling it again after a subscriber is set is a no-op.
pub fn init_tracing(verbose: bool) {
    let filter = env_filter(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn env_filter(verbose: bool, directives: Option<String>) -> EnvFilter {
    match directives.filter(|d| !d.trim().is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => {
            let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
            EnvFilter::default().add_directive(level.into())
        }
    }
}
