mod connection;

pub use connection::{acquire, check_health, create_pool, rollback, run_migrations};
