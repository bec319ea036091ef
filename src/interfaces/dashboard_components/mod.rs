pub mod control_panel;
pub mod header;
pub mod log_panel;
pub mod prediction_card;
pub mod running_trades;
pub mod sidebar;
pub mod ticker;
