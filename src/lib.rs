// SPDX-License-Identifier: Apache-2.0

mod board;
mod buffer;
mod config;
mod error;
mod extract;
mod flash;
mod mac;
mod scan;


pub use crate::board::{
    tw150v1, BoardConfig, FlashPartition, GpioButton, GpioLed, GpioOutput,
    KeyCode, LedDefaultState, Registrar,
};
pub use crate::config::{Duplex, EthConfig, LinkSpeed, PhyInterfaceMode};
pub use crate::error::{BdInfoError, ErrorContext, ErrorKind};
pub use crate::extract::{extract_mac, mac_or_default, MacSource, FAC_MAC_KEY};
pub use crate::flash::{read_region, FlashRegion};
pub use crate::mac::{MacAddress, ETH_ALEN};
pub use crate::scan::find_bytes;
