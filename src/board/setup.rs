// SPDX-License-Identifier: Apache-2.0

use std::io::{Read, Seek};

use super::{
    descriptor::{FlashPartition, GpioButton, GpioLed, GpioOutput},
    registrar::Registrar,
    tw150v1,
};
use crate::{
    extract::{mac_or_default, MacSource},
    flash::read_region,
    BdInfoError, Duplex, EthConfig, LinkSpeed, MacAddress, PhyInterfaceMode,
};

const WAN_ETH_ID: u32 = 0;
const LAN_ETH_ID: u32 = 1;

/// Everything the board hands to device registration, built once at
/// bring-up from the bdinfo partition.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct BoardConfig {
    pub base_mac: MacAddress,
    pub mac_source: MacSource,
    /// `eth0`, WAN port
    pub wan: EthConfig,
    /// `eth1`, LAN switch
    pub lan: EthConfig,
    /// Wireless MAC address
    pub wmac: MacAddress,
    pub mdio_bus: u32,
    pub mdio_phy_mask: u32,
    pub partitions: &'static [FlashPartition],
    pub leds: &'static [GpioLed],
    pub keys_poll_interval_ms: u32,
    pub buttons: &'static [GpioButton],
    pub gpio_outputs: &'static [GpioOutput],
}

impl BoardConfig {
    /// Build the board configuration from the raw bdinfo partition content.
    pub fn new(bdinfo: &[u8]) -> Self {
        let (base_mac, mac_source) =
            mac_or_default(bdinfo, tw150v1::DEFAULT_MAC);

        let mut wan =
            EthConfig::new(base_mac.offset(tw150v1::WAN_MAC_VARIANT));
        wan.set_phy_if_mode(PhyInterfaceMode::Rgmii)
            .set_phy_mask(tw150v1::WAN_PHY_MASK);

        let mut lan =
            EthConfig::new(base_mac.offset(tw150v1::LAN_MAC_VARIANT));
        lan.set_phy_if_mode(PhyInterfaceMode::Rgmii)
            .set_fixed_link(LinkSpeed::Mbps1000, Duplex::Full)
            .set_pll_1000(tw150v1::LAN_PLL_1000);

        log::debug!(
            "{}: base MAC {base_mac}({mac_source}), WAN {}, LAN {}",
            tw150v1::BOARD_NAME,
            wan.mac(),
            lan.mac()
        );

        Self {
            base_mac,
            mac_source,
            wan,
            lan,
            wmac: base_mac,
            mdio_bus: tw150v1::MDIO_BUS,
            mdio_phy_mask: tw150v1::MDIO_PHY_MASK,
            partitions: &tw150v1::PARTITIONS,
            leds: &tw150v1::LEDS,
            keys_poll_interval_ms: tw150v1::KEYS_POLL_INTERVAL_MS,
            buttons: &tw150v1::BUTTONS,
            gpio_outputs: &tw150v1::GPIO_OUTPUTS,
        }
    }

    /// Read the bdinfo region out of a flash image and build the board
    /// configuration. An unreadable region is logged and handled like a
    /// bdinfo without `fac_mac`.
    pub fn from_flash<R: Read + Seek>(flash: &mut R) -> Self {
        match read_region(flash, &tw150v1::BDINFO_REGION) {
            Ok(bdinfo) => Self::new(&bdinfo),
            Err(e) => {
                log::error!("Failed to read bdinfo partition: {e}");
                Self::new(&[])
            }
        }
    }

    /// Hand every record to `registrar`, LAN before WAN.
    ///
    /// A failed registration does not stop the others. Returns the number
    /// of failed registrations.
    pub fn register<T: Registrar>(&self, registrar: &mut T) -> usize {
        let mut failed = 0;
        let mut check = |name: &str, result: Result<(), BdInfoError>| {
            if let Err(e) = result {
                log::warn!("Failed to register {name}: {e}");
                failed += 1;
            } else {
                log::debug!("Registered {name}");
            }
        };

        check(
            "mdio",
            registrar.register_mdio(self.mdio_bus, self.mdio_phy_mask),
        );
        check("eth1", registrar.register_eth(LAN_ETH_ID, &self.lan));
        check("eth0", registrar.register_eth(WAN_ETH_ID, &self.wan));
        check("flash", registrar.register_flash(self.partitions));
        check("leds", registrar.register_leds(self.leds));
        for output in self.gpio_outputs {
            check(output.label, registrar.register_gpio_output(output));
        }
        check(
            "buttons",
            registrar.register_buttons(self.keys_poll_interval_ms, self.buttons),
        );
        check("usb", registrar.register_usb());
        check("wmac", registrar.register_wmac(self.wmac));

        failed
    }
}
