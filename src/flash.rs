// SPDX-License-Identifier: Apache-2.0

use std::io::{Read, Seek, SeekFrom};

use crate::{BdInfoError, ErrorContext};

/// Fixed byte range of the flash holding raw board data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FlashRegion {
    pub offset: u64,
    pub size: usize,
}

impl FlashRegion {
    pub const fn new(offset: u64, size: usize) -> Self {
        Self { offset, size }
    }
}

/// Copy `region` out of a flash image.
///
/// The image must hold the whole region, a short image is reported as
/// [crate::ErrorKind::InvalidArgument].
pub fn read_region<R: Read + Seek>(
    flash: &mut R,
    region: &FlashRegion,
) -> Result<Vec<u8>, BdInfoError> {
    log::debug!(
        "Reading {:#x} bytes of flash at offset {:#x}",
        region.size,
        region.offset
    );
    flash
        .seek(SeekFrom::Start(region.offset))
        .map_err(BdInfoError::from)
        .context(&format!("Failed to seek to {:#x}", region.offset))?;

    let mut data = vec![0u8; region.size];
    flash
        .read_exact(&mut data)
        .map_err(BdInfoError::from)
        .context(&format!(
            "Failed to read {:#x} bytes at {:#x}",
            region.size, region.offset
        ))?;
    Ok(data)
}
