use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tabledns_application::use_cases::ResolveQuestionUseCase;
use tabledns_domain::Config;
use tabledns_infrastructure::dns::{DnsServerHandler, UdpListener};
use tracing::info;

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

pub fn bind_dns_listener(
    socket_addr: SocketAddr,
    resolve: Arc<ResolveQuestionUseCase>,
    config: &Config,
) -> anyhow::Result<UdpListener> {
    info!(bind_address = %socket_addr, "Starting DNS server");

    let socket = create_udp_socket(socket_addr)?;
    let handler = Arc::new(DnsServerHandler::new(resolve));

    let listener = UdpListener::new(socket, handler);
    Ok(match config.dns.max_in_flight {
        Some(limit) => listener.with_max_in_flight(limit),
        None => listener,
    })
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<tokio::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(tokio::net::UdpSocket::from_std(std_socket)?)
}
