//! OpenPGP ASCII armor (RFC 4880 section 6)
//!
//! ```text
//! -----BEGIN PGP MESSAGE-----
//! Version: example
//!
//! <base64 body, usually 64 columns>
//! =<base64 CRC-24>
//! -----END PGP MESSAGE-----
//! ```

use crate::collaborator::Unarmor;
use crate::error::CryptoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::future::Future;

const BEGIN_PREFIX: &str = "-----BEGIN PGP ";
const END_PREFIX: &str = "-----END PGP ";
const DASHES: &str = "-----";
const LINE_WIDTH: usize = 64;

const CRC24_INIT: u32 = 0x00B7_04CE;
const CRC24_POLY: u32 = 0x0186_4CFB;

/// CRC-24 checksum used by the armor trailer
#[must_use]
pub fn crc24(data: &[u8]) -> u32 {
    let mut crc = CRC24_INIT;
    for &byte in data {
        crc ^= u32::from(byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= CRC24_POLY;
            }
        }
    }
    crc & 0x00FF_FFFF
}

/// Built-in [`Unarmor`] for ASCII-armored messages
///
/// Input that does not start with an armor header line is treated as an
/// already binary message and returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiArmor;

impl AsciiArmor {
    /// Create the unarmorer
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Strip the armor from `message`
    ///
    /// # Errors
    ///
    /// Returns a [`CryptoError`] for a missing end line, an invalid body or a
    /// checksum mismatch.
    pub fn decode(message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let Ok(text) = std::str::from_utf8(message) else {
            return Ok(message.to_vec());
        };
        let text = text.trim_start();
        if !text.starts_with(BEGIN_PREFIX) {
            return Ok(message.to_vec());
        }

        let mut lines = text.lines().map(str::trim_end);
        let label = lines
            .next()
            .and_then(|line| line.strip_prefix(BEGIN_PREFIX))
            .and_then(|rest| rest.strip_suffix(DASHES))
            .ok_or_else(|| CryptoError::new("Invalid armor header line"))?
            .to_string();

        let mut body = String::new();
        let mut checksum = None;
        let mut in_headers = true;
        let mut closed = false;

        for line in lines {
            if let Some(rest) = line.strip_prefix(END_PREFIX) {
                if rest.strip_suffix(DASHES) != Some(label.as_str()) {
                    return Err(CryptoError::new("Armor end line does not match header"));
                }
                closed = true;
                break;
            }
            if in_headers {
                if line.is_empty() {
                    in_headers = false;
                    continue;
                }
                if line.contains(": ") {
                    continue;
                }
                in_headers = false;
            }
            if let Some(crc) = line.strip_prefix('=').filter(|crc| crc.len() == 4) {
                checksum = Some(crc.to_string());
            } else {
                body.push_str(line.trim());
            }
        }

        if !closed {
            return Err(CryptoError::new("Armor end line not found"));
        }

        let data = STANDARD
            .decode(body.as_bytes())
            .map_err(|e| CryptoError::new(format!("Invalid armor body: {e}")))?;

        if let Some(checksum) = checksum {
            let expected = STANDARD
                .decode(checksum.as_bytes())
                .map_err(|e| CryptoError::new(format!("Invalid armor checksum: {e}")))?;
            let expected = expected
                .iter()
                .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
            if expected != crc24(&data) {
                return Err(CryptoError::new("Armor checksum mismatch"));
            }
        }

        Ok(data)
    }

    /// Armor `data` as a `PGP <label>` block with a checksum line
    #[must_use]
    pub fn encode(label: &str, data: &[u8]) -> String {
        let body = STANDARD.encode(data);
        let crc = crc24(data).to_be_bytes();

        let mut armored = format!("{BEGIN_PREFIX}{label}{DASHES}\n\n");
        for chunk in body.as_bytes().chunks(LINE_WIDTH) {
            armored.push_str(&String::from_utf8_lossy(chunk));
            armored.push('\n');
        }
        armored.push('=');
        armored.push_str(&STANDARD.encode(&crc[1..]));
        armored.push('\n');
        armored.push_str(&format!("{END_PREFIX}{label}{DASHES}\n"));
        armored
    }
}

impl Unarmor for AsciiArmor {
    fn unarmor(&self, message: &[u8]) -> impl Future<Output = Result<Vec<u8>, CryptoError>> + Send {
        std::future::ready(Self::decode(message))
    }
}
