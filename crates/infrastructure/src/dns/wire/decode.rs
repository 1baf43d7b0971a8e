use tabledns_domain::{
    DnsHeader, DnsMessage, DomainError, DomainName, PartialMessage, Question, HEADER_LEN,
};

/// Forward-only cursor over a received datagram.
struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn read_u16(&mut self) -> Option<u16> {
        let bytes = self.read_slice(2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_slice(&mut self, len: usize) -> Option<&'a [u8]> {
        if len > self.remaining() {
            return None;
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Some(slice)
    }
}

/// Decodes the header and question section of a query.
///
/// On failure the returned [`PartialMessage`] still carries every header field
/// and question read before the fault, so the caller can answer best-effort.
/// Answer, authority and additional sections are never inspected.
pub fn decode_query(buf: &[u8]) -> Result<DnsMessage, PartialMessage> {
    let mut reader = WireReader::new(buf);
    let mut message = DnsMessage::default();

    if let Err(error) = read_header(&mut reader, &mut message.header) {
        return Err(PartialMessage { message, error });
    }

    for _ in 0..message.header.question_count {
        match read_question(&mut reader) {
            Ok(question) => message.questions.push(question),
            Err(error) => return Err(PartialMessage { message, error }),
        }
    }

    Ok(message)
}

/// Decodes only the fixed 12-byte header.
pub fn decode_header(buf: &[u8]) -> Result<DnsHeader, DomainError> {
    let mut header = DnsHeader::default();
    read_header(&mut WireReader::new(buf), &mut header)?;
    Ok(header)
}

/// Decodes one label-encoded name from the start of `buf`, returning the
/// name and the number of bytes consumed. Label octets are kept verbatim.
pub fn decode_name(buf: &[u8]) -> Result<(DomainName, usize), DomainError> {
    let mut reader = WireReader::new(buf);
    let name = read_name(&mut reader)?;
    Ok((name, reader.pos))
}

fn read_header(reader: &mut WireReader<'_>, header: &mut DnsHeader) -> Result<(), DomainError> {
    let short = DomainError::MalformedHeader {
        needed: HEADER_LEN,
        available: reader.remaining(),
    };

    // Fields are filled one by one so a short buffer keeps what it had.
    let fields: [&mut u16; 6] = [
        &mut header.id,
        &mut header.flags,
        &mut header.question_count,
        &mut header.answer_count,
        &mut header.authority_count,
        &mut header.additional_count,
    ];
    for field in fields {
        *field = reader.read_u16().ok_or_else(|| short.clone())?;
    }
    Ok(())
}

fn read_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    let name = read_name(reader)?;
    let offset = reader.pos;
    let record_type = reader
        .read_u16()
        .ok_or(DomainError::MalformedQuestion { offset })?;
    let class = reader
        .read_u16()
        .ok_or(DomainError::MalformedQuestion { offset })?;

    Ok(Question {
        name,
        record_type,
        class,
    })
}

fn read_name(reader: &mut WireReader<'_>) -> Result<DomainName, DomainError> {
    let mut name = DomainName::root();

    loop {
        let offset = reader.pos;
        let label_len = reader.read_u8().ok_or_else(|| DomainError::MalformedName {
            offset,
            reason: "buffer ended before the terminating zero label".to_string(),
        })? as usize;

        if label_len == 0 {
            return Ok(name);
        }

        let remaining = reader.remaining();
        let label = reader
            .read_slice(label_len)
            .ok_or_else(|| DomainError::MalformedName {
                offset,
                reason: format!(
                    "label length {} exceeds remaining {} bytes",
                    label_len, remaining
                ),
            })?;

        name.push_label(label);
    }
}
