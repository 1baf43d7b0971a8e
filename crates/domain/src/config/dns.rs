use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Cap on concurrently running datagram handlers. `None` spawns one task
    /// per datagram with no limit.
    #[serde(default)]
    pub max_in_flight: Option<usize>,
}
