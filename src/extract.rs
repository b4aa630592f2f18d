// SPDX-License-Identifier: Apache-2.0

use crate::{
    buffer::Buffer, scan::find_bytes, BdInfoError, ErrorContext, ErrorKind,
    MacAddress,
};

/// Text preceding the factory MAC address in the board info partition,
/// for example `fac_mac = D4:EE:07:54:C2:8C`.
pub const FAC_MAC_KEY: &[u8] = b"fac_mac = ";

/// Where the base MAC address of a [crate::BoardConfig] came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MacSource {
    /// Parsed from the `fac_mac` entry of the board info partition
    BdInfo,
    /// Board default used as extraction failed
    Default,
}

impl std::fmt::Display for MacSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BdInfo => write!(f, "bdinfo"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Extract the factory MAC address following [FAC_MAC_KEY] in `blob`.
///
/// Only the first occurrence of the key is considered. The address must be
/// six colon separated pairs of hex digits, anything may follow it.
pub fn extract_mac(blob: &[u8]) -> Result<MacAddress, BdInfoError> {
    let key_pos = find_bytes(blob, FAC_MAC_KEY).ok_or_else(|| {
        BdInfoError::new(
            ErrorKind::KeyNotFound,
            format!(
                "Cannot find MAC address prefix string {:?} in {} bytes",
                String::from_utf8_lossy(FAC_MAC_KEY),
                blob.len()
            ),
        )
    })?;
    log::trace!("Found MAC address prefix at offset {key_pos:#x}");

    let mut buf = Buffer::new(&blob[key_pos + FAC_MAC_KEY.len()..]);
    MacAddress::parse(&mut buf).context(&format!(
        "Cannot get correct MAC address at offset {:#x}",
        key_pos + FAC_MAC_KEY.len()
    ))
}

/// Extract the factory MAC address or fall back to `default`.
///
/// Extraction failure never aborts bring-up: it is logged and the default
/// address is used instead.
pub fn mac_or_default(
    blob: &[u8],
    default: MacAddress,
) -> (MacAddress, MacSource) {
    match extract_mac(blob) {
        Ok(mac) => {
            log::info!("Using factory MAC address {mac}");
            if mac.is_multicast() || mac.is_zero() {
                log::warn!(
                    "Factory MAC address {mac} is not a valid unicast address"
                );
            }
            (mac, MacSource::BdInfo)
        }
        Err(e) => {
            log::error!("{e}, using default MAC address {default}");
            (default, MacSource::Default)
        }
    }
}
