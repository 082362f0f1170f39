use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use esp_println::println;

use super::{HttpResult, connection::HttpConnection};

use crate::config;

pub(crate) trait HttpHandler {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult;
}

/// Accept-loop serving one connection at a time.
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> ! {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(Duration::from_secs(
                config::HTTP.socket_timeout_secs,
            )));

            if socket.accept(port).await.is_err() {
                continue;
            }

            // The socket is dropped, and with it the connection released,
            // on the error paths below as well as after a served request.
            let conn = match HttpConnection::from_socket(socket).await {
                Ok(connection) => connection,
                Err(e) => {
                    println!("http: dropping request: {:?}", e);
                    continue;
                }
            };

            if let Err(e) = self.handler.handle_request(conn).await {
                println!("http: connection error: {:?}", e);
            }
        }
    }
}
