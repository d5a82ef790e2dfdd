// Single source of truth for all default values.

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;

// --- Dashboard ---
pub const DEFAULT_MONTHLY_SPEND_MONTHS: u32 = 6;
pub const DEFAULT_TOP_ENTITIES: usize = 5;

// --- Limits ---
pub const MAX_MONTHLY_SPEND_MONTHS: u32 = 24;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
