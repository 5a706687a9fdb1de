//! Instance Parameters
//!
//! Per-installation settings the host hands to the widget once at startup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceParameters {
    /// Heading shown above the list
    #[serde(rename = "valueName", default = "default_value_name")]
    pub value_name: String,
}

fn default_value_name() -> String {
    "Value".to_string()
}

impl Default for InstanceParameters {
    fn default() -> Self {
        Self {
            value_name: default_value_name(),
        }
    }
}
