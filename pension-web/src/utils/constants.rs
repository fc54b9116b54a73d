//! Application constants

pub const APP_NAME: &str = "Pension";

/// Element in `index.html` that covers the page while the WASM bundle loads
pub const SPLASH_ELEMENT_ID: &str = "pension-splash";

/// Delay before the second attempt at hiding the splash
pub const SPLASH_RETRY_MS: u32 = 100;

/// Query parameter that overrides the log level (`?log=debug`)
pub const LOG_LEVEL_PARAM: &str = "log";

// Chain id -> display name
pub const SUPPORTED_NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum"),
    (10, "Optimism"),
    (137, "Polygon"),
    (8453, "Base"),
    (42161, "Arbitrum"),
    (11155111, "Sepolia"),
    (1337, "Localhost"),
    (31337, "Localhost"),
];
