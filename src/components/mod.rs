//! UI Components
//!
//! Leptos components for the steps table.

mod add_item_button;
mod step_row;
mod steps_table;

pub use add_item_button::AddItemButton;
pub use step_row::StepRow;
pub use steps_table::StepsTable;
