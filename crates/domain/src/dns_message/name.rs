use std::fmt;

/// A domain name kept as raw label octets.
///
/// Labels may hold any byte, including `.` and non-UTF-8 data, so a name
/// decoded off the wire encodes back to exactly the same bytes. Empty labels
/// are never stored: the zero-length label is the terminator on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    /// The root name, zero labels.
    pub fn root() -> Self {
        Self::default()
    }

    /// Splits a dotted name on `.`. Empty labels (leading, trailing or
    /// doubled dots) are dropped, so `"a..b."` becomes `a.b`.
    pub fn from_dotted(dotted: &[u8]) -> Self {
        Self {
            labels: dotted
                .split(|&b| b == b'.')
                .filter(|label| !label.is_empty())
                .map(<[u8]>::to_vec)
                .collect(),
        }
    }

    /// Appends one label; an empty label is ignored.
    pub fn push_label(&mut self, label: &[u8]) {
        if !label.is_empty() {
            self.labels.push(label.to_vec());
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels joined by `.`, as raw bytes.
    pub fn to_dotted(&self) -> Vec<u8> {
        self.labels.join(&b'.')
    }

    /// Byte-wise substring test against the dotted form. An empty needle
    /// matches every name.
    pub fn contains(&self, needle: &[u8]) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.to_dotted()
            .windows(needle.len())
            .any(|window| window == needle)
    }
}

impl From<&str> for DomainName {
    fn from(dotted: &str) -> Self {
        Self::from_dotted(dotted.as_bytes())
    }
}

impl From<String> for DomainName {
    fn from(dotted: String) -> Self {
        Self::from_dotted(dotted.as_bytes())
    }
}

impl PartialEq<str> for DomainName {
    fn eq(&self, other: &str) -> bool {
        self.to_dotted() == other.as_bytes()
    }
}

impl PartialEq<&str> for DomainName {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Lossy: non-UTF-8 octets show as U+FFFD. For logs only.
impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_dotted()))
    }
}
