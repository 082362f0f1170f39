use embassy_net::Stack;

use crate::config;
use crate::controllers::ClockHttpController;
use crate::net::http::HttpServer;

const RX_BUFFER_SIZE: usize = 2048;
const TX_BUFFER_SIZE: usize = 2048;

/// Background task serving the control interface.
#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, controller: &'static ClockHttpController) {
    let server = HttpServer::new(controller);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    server
        .listen_and_serve(stack, config::HTTP.port, &mut rx_buffer, &mut tx_buffer)
        .await
}
