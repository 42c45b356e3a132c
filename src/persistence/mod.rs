pub mod config;
pub mod files;
#[cfg(test)]
pub mod memory;
pub mod store;

pub use config::{load_config, save_config, Config};
pub use files::{
    atomic_write, board_file, config_file, ensure_data_dir, init_local_data_dir, log_dir, read_file,
};
pub use store::{JsonStore, StoreError, TaskStore};
