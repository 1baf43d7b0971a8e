pub mod listener;
pub mod server;
pub mod wire;

pub use listener::UdpListener;
pub use server::DnsServerHandler;
