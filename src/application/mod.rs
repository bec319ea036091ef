// Dashboard state and orchestration
pub mod dashboard_app;
pub mod dashboard_state;

// Live feed simulation and indicator derivation
pub mod indicators;
pub mod simulator;

// Background worker and its UI-side handle
pub mod client;
pub mod system;
pub mod worker;
