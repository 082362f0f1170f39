mod http_server;
mod network;
mod render;
mod time_sync;

pub use http_server::http_server_task;
pub use network::{network_runner_task, wifi_connection_task};
pub use render::render_loop_task;
pub use time_sync::time_sync_task;
