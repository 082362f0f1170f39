pub mod http;
pub mod ntp;
