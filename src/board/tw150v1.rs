// SPDX-License-Identifier: Apache-2.0

//! HiWiFi Router v1 (Atheros AR9330) board data.

use super::descriptor::{
    FlashPartition, GpioButton, GpioLed, GpioOutput, KeyCode, LedDefaultState,
};
use crate::{flash::FlashRegion, MacAddress};

pub const BOARD_NAME: &str = "tw150v1";

/// Placeholder used when the bdinfo partition holds no usable `fac_mac`.
pub const DEFAULT_MAC: MacAddress =
    MacAddress::new([0x00, 0x12, 0x34, 0x56, 0x78, 0x9a]);

/// Start of the bdinfo partition, only the first 512 bytes hold text.
pub const BDINFO_REGION: FlashRegion = FlashRegion::new(0x010000, 0x200);

pub(crate) const WAN_MAC_VARIANT: u32 = 1;
pub(crate) const LAN_MAC_VARIANT: u32 = 0;

pub(crate) const WAN_PHY_MASK: u32 = 0x1;
pub(crate) const LAN_PLL_1000: u32 = 0x1f000000;

pub(crate) const MDIO_BUS: u32 = 0;
pub(crate) const MDIO_PHY_MASK: u32 = 0x0;

pub const KEYS_POLL_INTERVAL_MS: u32 = 20;
const KEYS_DEBOUNCE_INTERVAL_MS: u32 = 3 * KEYS_POLL_INTERVAL_MS;

pub static PARTITIONS: [FlashPartition; 7] = [
    FlashPartition {
        name: "u-boot",
        offset: 0,
        size: 0x010000,
    },
    FlashPartition {
        name: "bdinfo",
        offset: 0x010000,
        size: 0x010000,
    },
    FlashPartition {
        name: "kernel",
        offset: 0x020000,
        size: 0x140000,
    },
    FlashPartition {
        name: "rootfs",
        offset: 0x160000,
        size: 0xe80000,
    },
    FlashPartition {
        name: "nvram",
        offset: 0xfe0000,
        size: 0x010000,
    },
    FlashPartition {
        name: "art",
        offset: 0xff0000,
        size: 0x010000,
    },
    // Spans kernel and rootfs for sysupgrade
    FlashPartition {
        name: "firmware",
        offset: 0x020000,
        size: 0xfc0000,
    },
];

pub static LEDS: [GpioLed; 3] = [
    GpioLed {
        name: "tw150v1:green:system",
        gpio: 1,
        active_low: true,
        default_state: LedDefaultState::On,
    },
    GpioLed {
        name: "tw150v1:green:internet",
        gpio: 27,
        active_low: true,
        default_state: LedDefaultState::Off,
    },
    GpioLed {
        name: "tw150v1:green:wlan-2p4",
        gpio: 0,
        active_low: true,
        default_state: LedDefaultState::Off,
    },
];

pub static BUTTONS: [GpioButton; 2] = [
    GpioButton {
        desc: "soft_reset",
        code: KeyCode::Restart,
        debounce_interval_ms: KEYS_DEBOUNCE_INTERVAL_MS,
        gpio: 21,
        active_low: true,
    },
    GpioButton {
        desc: "jumpstart",
        code: KeyCode::WpsButton,
        debounce_interval_ms: KEYS_DEBOUNCE_INTERVAL_MS,
        gpio: 12,
        active_low: true,
    },
];

pub static GPIO_OUTPUTS: [GpioOutput; 1] = [GpioOutput {
    label: "gpio20",
    gpio: 20,
    initial_high: true,
}];
