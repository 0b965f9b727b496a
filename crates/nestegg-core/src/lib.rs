//! nestegg-core
//!
//! Business logic for the household ledger: the authoritative entity
//! store with its persistence lifecycle, month-window summaries, and
//! repayment/retirement forecasts. No UI, no terminal I/O; durable
//! storage is reached only through the [`storage::KeyValueStore`]
//! contract.
//!
//! ```no_run
//! use std::sync::Arc;
//! use nestegg_core::{store::LedgerStore, storage::MemoryStore, time::SystemClock};
//!
//! let store = LedgerStore::open(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(SystemClock),
//!     "nestegg",
//! );
//! assert!(store.is_ready());
//! ```

pub mod error;
pub mod forecast;
pub mod persist;
pub mod storage;
pub mod store;
pub mod summary;
pub mod time;

pub use error::CoreError;
pub use forecast::{ForecastService, MortgageOutlook, RetirementOutlook};
pub use storage::{KeyValueStore, MemoryStore, StoreKey};
pub use store::{LedgerStore, StoreStatus};
pub use summary::SummaryService;
pub use time::{Clock, SystemClock};

use once_cell::sync::OnceCell;

static INIT_TRACING: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber with sensible defaults.
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    INIT_TRACING.get_or_init(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("nestegg_core=info".parse().expect("static directive"));
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
