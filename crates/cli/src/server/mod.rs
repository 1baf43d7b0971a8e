pub mod dns;
pub mod web;

pub use dns::bind_dns_listener;
pub use web::start_web_server;
