//! Cadastro storage layer
//!
//! SQLite implementation of the `ClientRepository` port with a read/write
//! pool split, sqlx migrations and partial unique indexes scoped to active
//! rows. Unique-constraint violations are translated to the domain conflict
//! errors before they cross the repository boundary.

mod sqlite;

pub use sqlite::{SqliteConfig, SqliteStorage};
