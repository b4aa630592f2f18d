// SPDX-License-Identifier: Apache-2.0

use crate::{
    tw150v1, BdInfoError, ErrorKind, EthConfig, FlashPartition, GpioButton,
    GpioLed, GpioOutput, MacAddress, Registrar,
};

pub(crate) const TEST_FAC_MAC: MacAddress =
    MacAddress::new([0xd4, 0xee, 0x07, 0x54, 0xc2, 0x8c]);

const TEST_FLASH_SIZE: usize = 0x40000;

pub(crate) fn enable_log() {
    // Tests share one process, only the first init succeeds.
    let _ = env_logger::Builder::new()
        .filter(Some("bdinfo"), log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Erased(0xff) flash image with `bdinfo` written at the start of the
/// bdinfo partition.
pub(crate) fn gen_flash_image(bdinfo: &[u8]) -> Vec<u8> {
    let mut image = vec![0xffu8; TEST_FLASH_SIZE];
    let start = tw150v1::BDINFO_REGION.offset as usize;
    image[start..start + bdinfo.len()].copy_from_slice(bdinfo);
    image
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Registered {
    Mdio(u32, u32),
    Eth(u32, EthConfig),
    Flash(Vec<FlashPartition>),
    Leds(Vec<GpioLed>),
    GpioOutput(GpioOutput),
    Buttons(u32, Vec<GpioButton>),
    Usb,
    Wmac(MacAddress),
}

/// Registrar recording every call, optionally failing the Ethernet ones.
#[derive(Debug, Default)]
pub(crate) struct RecordingRegistrar {
    pub(crate) calls: Vec<Registered>,
    pub(crate) fail_eth: bool,
}

impl RecordingRegistrar {
    pub(crate) fn eth_macs(&self) -> Vec<(u32, MacAddress)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Registered::Eth(id, config) => Some((*id, config.mac())),
                _ => None,
            })
            .collect()
    }
}

impl Registrar for RecordingRegistrar {
    fn register_mdio(
        &mut self,
        bus: u32,
        phy_mask: u32,
    ) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Mdio(bus, phy_mask));
        Ok(())
    }

    fn register_eth(
        &mut self,
        id: u32,
        config: &EthConfig,
    ) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Eth(id, config.clone()));
        if self.fail_eth {
            Err(BdInfoError::new(
                ErrorKind::Bug,
                format!("eth{id} probe failed"),
            ))
        } else {
            Ok(())
        }
    }

    fn register_flash(
        &mut self,
        partitions: &[FlashPartition],
    ) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Flash(partitions.to_vec()));
        Ok(())
    }

    fn register_leds(&mut self, leds: &[GpioLed]) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Leds(leds.to_vec()));
        Ok(())
    }

    fn register_gpio_output(
        &mut self,
        output: &GpioOutput,
    ) -> Result<(), BdInfoError> {
        self.calls.push(Registered::GpioOutput(*output));
        Ok(())
    }

    fn register_buttons(
        &mut self,
        poll_interval_ms: u32,
        buttons: &[GpioButton],
    ) -> Result<(), BdInfoError> {
        self.calls
            .push(Registered::Buttons(poll_interval_ms, buttons.to_vec()));
        Ok(())
    }

    fn register_usb(&mut self) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Usb);
        Ok(())
    }

    fn register_wmac(&mut self, mac: MacAddress) -> Result<(), BdInfoError> {
        self.calls.push(Registered::Wmac(mac));
        Ok(())
    }
}
