// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::{buffer::Buffer, BdInfoError, ErrorContext, ErrorKind};

pub const ETH_ALEN: usize = 6;

const MAC_ADDR_MASK: u64 = (1 << (ETH_ALEN * 8)) - 1;

/// 48 bits Ethernet hardware address, octet 0 first as written in text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Default)]
pub struct MacAddress([u8; ETH_ALEN]);

impl MacAddress {
    pub const fn new(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; ETH_ALEN] {
        self.0
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ETH_ALEN]
    }

    /// Address of the `variant_index`-th interface sharing this base
    /// address: the base plus `variant_index` as a 48 bits big endian
    /// integer. Carry moves toward octet 0 and wraps past it.
    pub fn offset(&self, variant_index: u32) -> Self {
        let value = self.to_u64().wrapping_add(variant_index.into())
            & MAC_ADDR_MASK;
        Self::from_u64(value)
    }

    fn to_u64(self) -> u64 {
        let mut raw = [0u8; 8];
        raw[8 - ETH_ALEN..].copy_from_slice(&self.0);
        u64::from_be_bytes(raw)
    }

    fn from_u64(value: u64) -> Self {
        let raw = value.to_be_bytes();
        let mut octets = [0u8; ETH_ALEN];
        octets.copy_from_slice(&raw[8 - ETH_ALEN..]);
        Self(octets)
    }

    /// Parse `XX:XX:XX:XX:XX:XX` from the start of `buf`, leaving the
    /// cursor after the last octet. Nothing is returned unless all six
    /// octets parsed.
    pub(crate) fn parse(buf: &mut Buffer) -> Result<Self, BdInfoError> {
        let mut octets = [0u8; ETH_ALEN];
        for (i, octet) in octets.iter_mut().enumerate() {
            if i > 0 {
                buf.expect_u8(b':').context(&format!(
                    "Invalid separator before octet {i}"
                ))?;
            }
            *octet = buf
                .get_hex_u8()
                .context(&format!("Invalid octet {i}"))?;
        }
        Ok(Self(octets))
    }
}

impl From<[u8; ETH_ALEN]> for MacAddress {
    fn from(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }
}

impl From<MacAddress> for [u8; ETH_ALEN] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = BdInfoError;

    fn from_str(mac: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| {
            BdInfoError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Invalid MAC address {mac}, expecting format \
                     01:02:2a:2c:f7:04: {reason}"
                ),
            )
        };
        let mut buf = Buffer::new(mac.as_bytes());
        let ret = Self::parse(&mut buf).map_err(|e| invalid(e.msg()))?;
        if !buf.is_empty() {
            return Err(invalid(&format!(
                "trailing data {:?}",
                String::from_utf8_lossy(buf.get_remains())
            )));
        }
        Ok(ret)
    }
}
