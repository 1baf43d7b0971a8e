use bytes::{BufMut, Bytes, BytesMut};
use tabledns_domain::{DnsHeader, DnsMessage, DomainError, DomainName, ResourceRecord, HEADER_LEN};

/// Serializes a full message: header, questions, then the answer, authority
/// and additional sections.
///
/// Header counts are taken from the section lengths, never from
/// `message.header`, so the wire counts always match what is written. Only
/// `id` and `flags` come from the header. The output is not capped at 512
/// bytes.
pub fn encode_message(message: &DnsMessage) -> Result<Bytes, DomainError> {
    let header = DnsHeader {
        id: message.header.id,
        flags: message.header.flags,
        question_count: section_count("question", message.questions.len())?,
        answer_count: section_count("answer", message.answers.len())?,
        authority_count: section_count("authority", message.authorities.len())?,
        additional_count: section_count("additional", message.additionals.len())?,
    };

    let mut buf = BytesMut::with_capacity(HEADER_LEN + 64);
    encode_header(&header, &mut buf);

    for question in &message.questions {
        encode_name(&question.name, &mut buf)?;
        buf.put_u16(question.record_type);
        buf.put_u16(question.class);
    }

    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        encode_record(record, &mut buf)?;
    }

    Ok(buf.freeze())
}

/// Writes the 12 header bytes exactly as given.
pub fn encode_header(header: &DnsHeader, buf: &mut BytesMut) {
    buf.put_u16(header.id);
    buf.put_u16(header.flags);
    buf.put_u16(header.question_count);
    buf.put_u16(header.answer_count);
    buf.put_u16(header.authority_count);
    buf.put_u16(header.additional_count);
}

/// Writes `name` as length-prefixed labels followed by a zero byte.
///
/// The root name is a single zero byte. A label longer than 255 bytes cannot
/// be framed and is rejected.
pub fn encode_name(name: &DomainName, buf: &mut BytesMut) -> Result<(), DomainError> {
    for label in name.labels() {
        let len = u8::try_from(label.len()).map_err(|_| {
            DomainError::InvalidDomainName(format!(
                "label of {} bytes in {} exceeds 255",
                label.len(),
                name
            ))
        })?;
        buf.put_u8(len);
        buf.put_slice(label);
    }
    buf.put_u8(0);
    Ok(())
}

fn encode_record(record: &ResourceRecord, buf: &mut BytesMut) -> Result<(), DomainError> {
    let data_len =
        u16::try_from(record.data_len()).map_err(|_| DomainError::RecordDataTooLong {
            name: record.name.to_string(),
            len: record.data_len(),
        })?;

    encode_name(&record.name, buf)?;
    buf.put_u16(record.record_type);
    buf.put_u16(record.class);
    buf.put_u32(record.ttl);
    buf.put_u16(data_len);
    buf.put_slice(&record.data);
    Ok(())
}

fn section_count(section: &'static str, len: usize) -> Result<u16, DomainError> {
    u16::try_from(len).map_err(|_| DomainError::SectionTooLarge { section, len })
}
