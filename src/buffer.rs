// SPDX-License-Identifier: Apache-2.0

use crate::{BdInfoError, ErrorKind};

/// Read cursor over a borrowed byte region. Running past the end is an
/// error rather than a panic since the region comes straight from flash.
#[derive(Debug)]
pub(crate) struct Buffer<'a> {
    index: usize,
    data: &'a [u8],
}

impl<'a> Buffer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { index: 0, data }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remain_len() == 0
    }

    pub(crate) fn remain_len(&self) -> usize {
        if self.index > self.data.len() {
            0
        } else {
            self.data.len() - self.index
        }
    }

    pub(crate) fn get_u8(&mut self) -> Result<u8, BdInfoError> {
        if self.is_empty() {
            return Err(BdInfoError::new(
                ErrorKind::MalformedAddress,
                "Remain buffer not enough for getting u8".to_string(),
            ));
        }
        let ret = self.data[self.index];
        self.index += 1;
        Ok(ret)
    }

    /// Consume two hex digits(either case) as one octet.
    pub(crate) fn get_hex_u8(&mut self) -> Result<u8, BdInfoError> {
        if self.remain_len() < 2 {
            return Err(BdInfoError::new(
                ErrorKind::MalformedAddress,
                format!(
                    "Remain buffer not enough for getting hex octet, \
                     {} bytes left",
                    self.remain_len()
                ),
            ));
        }
        let high = hex_digit_value(self.data[self.index])?;
        let low = hex_digit_value(self.data[self.index + 1])?;
        self.index += 2;
        Ok((high << 4) | low)
    }

    /// Consume one byte which must be `expected`.
    pub(crate) fn expect_u8(&mut self, expected: u8) -> Result<(), BdInfoError> {
        let got = self.get_u8()?;
        if got != expected {
            return Err(BdInfoError::new(
                ErrorKind::MalformedAddress,
                format!(
                    "Expecting {:?}, got {}",
                    char::from(expected),
                    printable(got)
                ),
            ));
        }
        Ok(())
    }

    pub(crate) fn get_remains(&mut self) -> &[u8] {
        if self.index > self.data.len() {
            &[]
        } else {
            &self.data[self.index..]
        }
    }
}

fn hex_digit_value(c: u8) -> Result<u8, BdInfoError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(BdInfoError::new(
            ErrorKind::MalformedAddress,
            format!("Invalid hex digit {}", printable(c)),
        )),
    }
}

// Flash content may hold any byte, keep error messages readable.
fn printable(c: u8) -> String {
    if c.is_ascii_graphic() {
        format!("{:?}", char::from(c))
    } else {
        format!("0x{c:02x}")
    }
}
