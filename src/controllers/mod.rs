mod http;

pub use http::ClockHttpController;
