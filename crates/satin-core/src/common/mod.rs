pub mod config;
pub mod constants;

pub use config::{
    DEFAULT_INPUT_POWERS_PATH, DEFAULT_LASER_TABLE_PATH, DEFAULT_OUTPUT_DIR, RunConfig,
};
