//! Framing for i3 IPC messages.
//!
//! # Wire format
//!
//! | Bytes  | Field                                   |
//! |--------|-----------------------------------------|
//! | 6      | magic string `i3-ipc`                   |
//! | 4      | payload length (u32, native byte order) |
//! | 4      | message type (u32, native byte order)   |
//! | length | payload (UTF-8, JSON for replies)       |
//!
//! Requests and replies share this layout.  The reply type echoes the
//! request type.

use super::wm::I3Error;
use std::io::{Read, Write};

/// Magic prefix of every message.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

const HEADER_LEN: usize = MAGIC.len() + 8;

/// Largest reply payload accepted.
const MAX_PAYLOAD: usize = 64 * 1024 * 1024;

/// Message types x3 sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageType {
    RunCommand = 0,
    GetWorkspaces = 1,
    GetOutputs = 3,
}

/// Serialise a request.
pub fn encode(kind: MessageType, payload: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    buf.extend_from_slice(&(kind as u32).to_ne_bytes());
    buf.extend_from_slice(payload.as_bytes());
    buf
}

/// Write one request to `w`.
pub fn write_message<W: Write>(w: &mut W, kind: MessageType, payload: &str) -> Result<(), I3Error> {
    w.write_all(&encode(kind, payload))?;
    w.flush()?;
    Ok(())
}

/// Read one message from `r`, returning its type and payload.
pub fn read_message<R: Read>(r: &mut R) -> Result<(u32, String), I3Error> {
    let mut header = [0u8; HEADER_LEN];
    r.read_exact(&mut header)?;
    if &header[..MAGIC.len()] != MAGIC {
        return Err(I3Error::Protocol(format!(
            "bad magic {:?}",
            String::from_utf8_lossy(&header[..MAGIC.len()])
        )));
    }

    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]) as usize;
    let kind = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);

    if len > MAX_PAYLOAD {
        return Err(I3Error::Protocol(format!(
            "payload of {} bytes exceeds {} byte limit",
            len, MAX_PAYLOAD
        )));
    }

    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload)?;
    let payload =
        String::from_utf8(payload).map_err(|e| I3Error::Protocol(format!("utf-8: {}", e)))?;
    Ok((kind, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn encode_layout() {
        let buf = encode(MessageType::RunCommand, "workspace 1");
        assert_eq!(&buf[..6], b"i3-ipc");
        assert_eq!(&buf[6..10], &11u32.to_ne_bytes());
        assert_eq!(&buf[10..14], &0u32.to_ne_bytes());
        assert_eq!(&buf[14..], b"workspace 1");
    }

    #[test]
    fn encode_empty_payload() {
        let buf = encode(MessageType::GetOutputs, "");
        assert_eq!(buf.len(), 14);
        assert_eq!(&buf[10..14], &3u32.to_ne_bytes());
    }

    #[test]
    fn read_reply() {
        let wire = encode(MessageType::GetWorkspaces, r#"[{"num":1}]"#);
        let (kind, payload) = read_message(&mut Cursor::new(wire)).unwrap();
        assert_eq!(kind, MessageType::GetWorkspaces as u32);
        assert_eq!(payload, r#"[{"num":1}]"#);
    }

    #[test]
    fn write_then_read_back() {
        let mut wire = Vec::new();
        write_message(&mut wire, MessageType::RunCommand, "focus left").unwrap();
        let (kind, payload) = read_message(&mut Cursor::new(wire)).unwrap();
        assert_eq!(kind, 0);
        assert_eq!(payload, "focus left");
    }

    #[test]
    fn bad_magic_rejected() {
        let mut wire = encode(MessageType::RunCommand, "x");
        wire[0] = b'X';
        let err = read_message(&mut Cursor::new(wire)).unwrap_err();
        assert!(matches!(err, I3Error::Protocol(_)));
    }

    #[test]
    fn truncated_payload_is_io_error() {
        let mut wire = encode(MessageType::RunCommand, "workspace 1");
        wire.truncate(wire.len() - 3);
        let err = read_message(&mut Cursor::new(wire)).unwrap_err();
        assert!(matches!(err, I3Error::Io(_)));
    }

    #[test]
    fn oversized_length_rejected() {
        let mut wire = encode(MessageType::GetWorkspaces, "");
        wire[6..10].copy_from_slice(&u32::MAX.to_ne_bytes());
        let err = read_message(&mut Cursor::new(wire)).unwrap_err();
        assert!(matches!(err, I3Error::Protocol(_)));
    }

    #[test]
    fn truncated_header_is_io_error() {
        let err = read_message(&mut Cursor::new(b"i3-ip".to_vec())).unwrap_err();
        assert!(matches!(err, I3Error::Io(_)));
    }
}
