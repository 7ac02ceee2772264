// Configuration constants for the application

/// API endpoints
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const ADD_TRADER_PATH: &str = "/api/traders";
pub const API_URL_ENV: &str = "TRADER_API_URL";

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Form defaults
pub const DEFAULT_INITIAL_BALANCE: u32 = 50;
pub const DEFAULT_SCAN_INTERVAL_MINUTES: u32 = 3;

/// UI settings
pub const PASSWORD_MASK: char = '•';
pub const OVERLAY_WIDTH_PERCENT: u16 = 60;
pub const OVERLAY_HEIGHT_PERCENT: u16 = 20;
