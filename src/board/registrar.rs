// SPDX-License-Identifier: Apache-2.0

use super::descriptor::{FlashPartition, GpioButton, GpioLed, GpioOutput};
use crate::{BdInfoError, EthConfig, MacAddress};

/// Platform device registration consuming the records built at bring-up.
///
/// Every call receives a finished record; implementations copy what they
/// need and must not expect to be called again for the same device.
pub trait Registrar {
    fn register_mdio(
        &mut self,
        bus: u32,
        phy_mask: u32,
    ) -> Result<(), BdInfoError>;

    /// `id` is the Ethernet controller index, 0 for `eth0`.
    fn register_eth(
        &mut self,
        id: u32,
        config: &EthConfig,
    ) -> Result<(), BdInfoError>;

    fn register_flash(
        &mut self,
        partitions: &[FlashPartition],
    ) -> Result<(), BdInfoError>;

    fn register_leds(&mut self, leds: &[GpioLed]) -> Result<(), BdInfoError>;

    fn register_gpio_output(
        &mut self,
        output: &GpioOutput,
    ) -> Result<(), BdInfoError>;

    fn register_buttons(
        &mut self,
        poll_interval_ms: u32,
        buttons: &[GpioButton],
    ) -> Result<(), BdInfoError>;

    fn register_usb(&mut self) -> Result<(), BdInfoError>;

    fn register_wmac(&mut self, mac: MacAddress) -> Result<(), BdInfoError>;
}
