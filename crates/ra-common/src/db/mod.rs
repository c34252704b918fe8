pub mod analysis_history;
pub mod migrations;
pub mod pool;
pub mod util;

pub use analysis_history::{
    AnalysisHistoryRow, AnalysisRecordInsert, AnalysisStorageError, delete_analysis,
    fetch_history, insert_analysis,
};
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPoolError, PgPool, create_pool_from_url};
