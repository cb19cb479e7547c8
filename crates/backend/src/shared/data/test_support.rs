//! Shared fixture for service tests: one process-wide runtime and one
//! throwaway SQLite database, so every test sees the same schema through
//! the global connection cell.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

static RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
});

static DB_READY: Lazy<()> = Lazy::new(|| {
    RT.block_on(async {
        let path = std::env::temp_dir().join(format!("transtats-test-{}.db", uuid::Uuid::new_v4()));
        super::db::initialize_database(Some(path.to_str().expect("temp path is valid UTF-8")))
            .await
            .expect("test database initializes");
    });
});

/// Run an async test body on the shared runtime with the database ready.
pub fn run<F: std::future::Future>(fut: F) -> F::Output {
    Lazy::force(&DB_READY);
    RT.block_on(fut)
}
