use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::String;
use serde::Serialize;

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        ResponseHeaders,
        StatusCode,
        TargetWriter as _,
        TextEncoding,
        parse_request_line,
        read_heading,
    },
};

const HEADER_BUFFER_SIZE: usize = 512;
const JSON_BUFFER_SIZE: usize = 256;
const STREAM_CHUNK_SIZE: usize = 512;

/// HTTP connection context
///
/// Holds the accepted socket together with the parsed request line. The
/// socket is released when the connection is dropped, on every exit path.
pub(crate) struct HttpConnection<'a> {
    pub method: HttpMethod,
    pub path: String<64>,

    socket: TcpSocket<'a>,
}

impl<'a> HttpConnection<'a> {
    /// Read the request head from a freshly accepted socket.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut header_buf = [0u8; HEADER_BUFFER_SIZE];
        let header_len = read_heading(&mut header_buf, &mut socket).await?;

        let header_str =
            core::str::from_utf8(&header_buf[..header_len]).map_err(|_| Error::Parse)?;
        let (method, raw_path) = parse_request_line(header_str).ok_or(Error::Parse)?;

        let mut path = String::new();
        // An oversized path stays empty and routes to the not-found branch
        let _ = path.push_str(raw_path);
        Ok(Self {
            method,
            path,
            socket,
        })
    }

    /// Get request method and path
    pub(crate) fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.path.as_str())
    }

    /// Write the headers to the connection
    pub(crate) async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        let mut buf: String<256> = String::new();
        headers.write_to(&mut buf)?;
        self.write_all(buf.as_bytes()).await
    }

    /// Write the body to the connection
    pub(crate) async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.write_all(chunk).await?;
        }
        Ok(())
    }

    /// Write a plain-text response with the given status code.
    pub(crate) async fn write_text(&mut self, status: StatusCode, body: &str) -> HttpResult {
        let content =
            ContentHeaders::new(ContentType::TextPlain).with_length(body.len());
        let headers = ResponseHeaders::from_code(status).with_content(content);
        self.write_headers(&headers).await?;
        self.write_body(body.as_bytes()).await
    }

    /// Write a successful HTML response.
    pub(crate) async fn write_html(&mut self, body: &[u8]) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(body.len());
        let headers = ResponseHeaders::success().with_content(content);
        self.write_headers(&headers).await?;
        self.write_body(body).await
    }

    /// Write JSON to the connection
    ///
    /// Writes both headers and body.
    pub(crate) async fn write_json<T: Serialize>(&mut self, data: &T) -> HttpResult {
        let mut buf = [0u8; JSON_BUFFER_SIZE];
        let n = serde_json_core::to_slice(data, &mut buf).map_err(|_| Error::FormatHeaders)?;

        let content = ContentHeaders::new(ContentType::Json).with_length(n);
        let headers = ResponseHeaders::success().with_content(content);
        self.write_headers(&headers).await?;
        self.write_body(&buf[..n]).await
    }

    /// Flush pending data and queue a FIN towards the peer.
    pub(crate) async fn finish(mut self) -> HttpResult {
        self.socket.flush().await?;
        self.socket.close();
        Ok(())
    }

    async fn write_all(&mut self, buf: &[u8]) -> HttpResult {
        self.socket.write_all(buf).await?;
        self.socket.flush().await?;
        Ok(())
    }
}
