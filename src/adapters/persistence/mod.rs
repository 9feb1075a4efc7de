//! FAQ storage adapters and seed-file loading.

pub mod memory_repo;
pub mod seed_file;
pub mod sqlite_repo;

pub use memory_repo::MemoryRepo;
pub use seed_file::load_seed_file;
pub use sqlite_repo::SqliteRepo;
