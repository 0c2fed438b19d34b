// src/config/consts.rs

// Net config. The league app serves its API from the Next dev port.
pub const HOST: &str = "localhost";
pub const PORT: u16 = 3006;
pub const PLAYERS_PATH: &str = "/api/players";
pub const TIMEOUT_SECS: u64 = 15;

// Search
pub const DEFAULT_TERMS: [&str; 2] = ["vernon", "carey"];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "matches";

// Logging
pub const LOG_FILE: &str = "debug.log";
