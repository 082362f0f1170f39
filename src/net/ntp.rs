//! Single-shot SNTP query over UDP.

use embassy_net::{
    Stack,
    dns::DnsQueryType,
    udp::{PacketMetadata, UdpSocket},
};
use embassy_time::{Duration, with_timeout};

/// Seconds between the NTP epoch (1900) and the Unix epoch (1970).
const NTP_TO_UNIX_OFFSET: u64 = 2_208_988_800;
const NTP_PORT: u16 = 123;
const NTP_PACKET_LEN: usize = 48;
const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    Dns,
    NoAddress,
    Bind,
    Send,
    Timeout,
    Receive,
    BadPacket,
}

/// Ask `server` for the current time, returning Unix seconds (UTC).
pub(crate) async fn fetch_unix_time(
    stack: Stack<'static>,
    server: &str,
) -> Result<u64, SyncError> {
    let addresses = stack
        .dns_query(server, DnsQueryType::A)
        .await
        .map_err(|_| SyncError::Dns)?;
    let server_addr = *addresses.first().ok_or(SyncError::NoAddress)?;

    let mut rx_meta = [PacketMetadata::EMPTY; 1];
    let mut rx_buffer = [0; 128];
    let mut tx_meta = [PacketMetadata::EMPTY; 1];
    let mut tx_buffer = [0; 128];
    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(0).map_err(|_| SyncError::Bind)?;

    let mut request = [0u8; NTP_PACKET_LEN];
    request[0] = 0x23; // LI=0, VN=4, Mode=3 (client)
    socket
        .send_to(&request, (server_addr, NTP_PORT))
        .await
        .map_err(|_| SyncError::Send)?;

    let mut response = [0u8; NTP_PACKET_LEN];
    let (n, _) = with_timeout(RECEIVE_TIMEOUT, socket.recv_from(&mut response))
        .await
        .map_err(|_| SyncError::Timeout)?
        .map_err(|_| SyncError::Receive)?;
    if n < NTP_PACKET_LEN {
        return Err(SyncError::BadPacket);
    }

    // Transmit timestamp seconds, bytes 40..44 of the packet
    let ntp_seconds = u64::from(u32::from_be_bytes([
        response[40],
        response[41],
        response[42],
        response[43],
    ]));
    ntp_seconds
        .checked_sub(NTP_TO_UNIX_OFFSET)
        .ok_or(SyncError::BadPacket)
}
