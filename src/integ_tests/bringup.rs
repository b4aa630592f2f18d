// SPDX-License-Identifier: Apache-2.0

use super::env::{enable_log, Registered, RecordingRegistrar, TEST_FAC_MAC};
use crate::{
    tw150v1, BoardConfig, Duplex, LinkSpeed, MacAddress, MacSource,
    PhyInterfaceMode,
};

const TEST_BDINFO: &[u8] = b"hw_ver = HC5661\n\
    fac_mac = D4:EE:07:54:C2:8C\n\
    sn = 0123456789\n";

#[test]
fn bringup_with_fac_mac() {
    enable_log();
    let config = BoardConfig::new(TEST_BDINFO);

    assert_eq!(config.base_mac, TEST_FAC_MAC);
    assert_eq!(config.mac_source, MacSource::BdInfo);
    assert_eq!(
        config.wan.mac(),
        MacAddress::new([0xd4, 0xee, 0x07, 0x54, 0xc2, 0x8d])
    );
    assert_eq!(config.lan.mac(), TEST_FAC_MAC);
    assert_eq!(config.wmac, TEST_FAC_MAC);
    assert_ne!(config.wan.mac(), config.lan.mac());
}

#[test]
fn bringup_link_settings() {
    let config = BoardConfig::new(TEST_BDINFO);

    assert_eq!(config.wan.phy_if_mode(), PhyInterfaceMode::Rgmii);
    assert_eq!(config.wan.phy_mask(), 0x1);
    assert_eq!(config.wan.speed(), None);
    assert_eq!(config.wan.duplex(), None);

    assert_eq!(config.lan.phy_if_mode(), PhyInterfaceMode::Rgmii);
    assert_eq!(config.lan.speed(), Some(LinkSpeed::Mbps1000));
    assert_eq!(config.lan.duplex(), Some(Duplex::Full));
    assert_eq!(config.lan.pll_1000(), Some(0x1f000000));

    assert_eq!(config.mdio_bus, 0);
    assert_eq!(config.mdio_phy_mask, 0);
}

#[test]
fn bringup_without_fac_mac_uses_default() {
    enable_log();
    let config = BoardConfig::new(b"hw_ver = HC5661\nsn = 0123456789\n");

    assert_eq!(config.base_mac, tw150v1::DEFAULT_MAC);
    assert_eq!(config.mac_source, MacSource::Default);
    assert_eq!(
        config.wan.mac(),
        MacAddress::new([0x00, 0x12, 0x34, 0x56, 0x78, 0x9b])
    );
    assert_eq!(config.lan.mac(), tw150v1::DEFAULT_MAC);
}

#[test]
fn bringup_with_truncated_fac_mac_uses_default() {
    enable_log();
    let config = BoardConfig::new(b"fac_mac = D4:EE:07:54:C2");

    assert_eq!(config.base_mac, tw150v1::DEFAULT_MAC);
    assert_eq!(config.mac_source, MacSource::Default);
}

#[test]
fn bringup_wan_mac_carry() {
    let config = BoardConfig::new(b"fac_mac = d4:ee:07:54:c2:ff");

    assert_eq!(
        config.wan.mac(),
        MacAddress::new([0xd4, 0xee, 0x07, 0x54, 0xc3, 0x00])
    );
    assert_eq!(
        config.lan.mac(),
        MacAddress::new([0xd4, 0xee, 0x07, 0x54, 0xc2, 0xff])
    );
}

#[test]
fn bringup_is_repeatable() {
    assert_eq!(BoardConfig::new(TEST_BDINFO), BoardConfig::new(TEST_BDINFO));
}

#[test]
fn register_all_devices() {
    enable_log();
    let config = BoardConfig::new(TEST_BDINFO);
    let mut registrar = RecordingRegistrar::default();

    assert_eq!(config.register(&mut registrar), 0);
    assert_eq!(
        registrar.calls,
        vec![
            Registered::Mdio(0, 0),
            Registered::Eth(1, config.lan.clone()),
            Registered::Eth(0, config.wan.clone()),
            Registered::Flash(tw150v1::PARTITIONS.to_vec()),
            Registered::Leds(tw150v1::LEDS.to_vec()),
            Registered::GpioOutput(tw150v1::GPIO_OUTPUTS[0]),
            Registered::Buttons(20, tw150v1::BUTTONS.to_vec()),
            Registered::Usb,
            Registered::Wmac(TEST_FAC_MAC),
        ]
    );
}

#[test]
fn register_continues_after_failure() {
    enable_log();
    let config = BoardConfig::new(TEST_BDINFO);
    let mut registrar = RecordingRegistrar {
        fail_eth: true,
        ..Default::default()
    };

    assert_eq!(config.register(&mut registrar), 2);
    assert_eq!(registrar.calls.len(), 9);
    assert_eq!(
        registrar.eth_macs(),
        vec![(1, TEST_FAC_MAC), (0, TEST_FAC_MAC.offset(1))]
    );
    assert_eq!(registrar.calls.last(), Some(&Registered::Wmac(TEST_FAC_MAC)));
}
