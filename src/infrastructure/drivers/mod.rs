mod led_grid;
mod network;

pub use led_grid::{LedGridDriver, SharedDisplay};
pub use network::{init_network_stack, wait_for_connection};
