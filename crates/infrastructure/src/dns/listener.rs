use crate::dns::server::DnsServerHandler;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tabledns_domain::UDP_MAX_MESSAGE_SIZE;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

/// Receive loop for the DNS socket.
///
/// Each datagram is handed to its own spawned task and the loop goes
/// straight back to `recv_from`. Tasks are detached: they are never joined,
/// cancelled or timed out, and replies go out in whatever order they finish.
///
/// With [`UdpListener::with_max_in_flight`] the loop first waits for one of N
/// permits, which bounds concurrent handlers and applies backpressure to
/// receive. Without it, dispatch is unbounded.
pub struct UdpListener {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    limiter: Option<Arc<Semaphore>>,
}

impl UdpListener {
    pub fn new(socket: UdpSocket, handler: Arc<DnsServerHandler>) -> Self {
        Self {
            socket: Arc::new(socket),
            handler,
            limiter: None,
        }
    }

    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.limiter = Some(Arc::new(Semaphore::new(limit)));
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn run(self) {
        info!(
            bind_address = ?self.socket.local_addr().ok(),
            max_in_flight = ?self.limiter.as_ref().map(|l| l.available_permits()),
            "DNS listener ready"
        );

        // Datagrams longer than this are cut short by the transport.
        let mut recv_buf = [0u8; UDP_MAX_MESSAGE_SIZE];

        loop {
            let permit = match &self.limiter {
                Some(limiter) => match limiter.clone().acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(e) => {
                        error!(error = %e, "In-flight limiter closed, stopping listener");
                        return;
                    }
                },
                None => None,
            };

            let (n, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            };

            debug!(client = %from, bytes = n, "Received DNS request");

            let handler = self.handler.clone();
            let socket = self.socket.clone();
            let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
            tokio::spawn(async move {
                let response = handler.handle_datagram(&owned_buf, from).await;
                if let Err(e) = socket.send_to(&response, from).await {
                    error!(client = %from, error = %e, "UDP send error");
                }
                drop(permit);
            });
        }
    }
}
