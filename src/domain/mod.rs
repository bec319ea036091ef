// Indicator inputs and market snapshots
pub mod features;

// Scenario series for the prediction chart
pub mod forecast;

// Live price feed history
pub mod price_history;

// Profit/ROI projection and signals
pub mod projection;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
