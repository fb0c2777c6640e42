use serde::{Deserialize, Serialize};

fn default_rows() -> usize {
    4
}

fn default_chip_margin() -> u16 {
    1
}

fn default_row_dividers() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Grid rows; candidates that do not fit are dropped.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Padding cells on each side of a chip's text.
    #[serde(default = "default_chip_margin")]
    pub chip_margin: u16,
    /// Draw a horizontal rule between grid rows.
    #[serde(default = "default_row_dividers")]
    pub row_dividers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            chip_margin: default_chip_margin(),
            row_dividers: default_row_dividers(),
        }
    }
}
