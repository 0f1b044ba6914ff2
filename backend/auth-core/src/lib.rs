pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod password;
pub mod session;
pub mod view;

#[cfg(test)]
mod tests;

pub const AUTH_API_HOSTNAME: &str = "127.0.0.1";
pub const AUTH_API_PORT: u16 = 8000;
pub const AUTH_API_BASE_URL: &str =
    const_format::concatcp!("http://", AUTH_API_HOSTNAME, ":", AUTH_API_PORT, "/api");
