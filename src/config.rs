// SPDX-License-Identifier: Apache-2.0

use crate::MacAddress;

/// MAC to PHY interface mode of an Ethernet controller
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub enum PhyInterfaceMode {
    #[default]
    Mii,
    Gmii,
    Rmii,
    Rgmii,
}

impl std::fmt::Display for PhyInterfaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mii => write!(f, "mii"),
            Self::Gmii => write!(f, "gmii"),
            Self::Rmii => write!(f, "rmii"),
            Self::Rgmii => write!(f, "rgmii"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkSpeed {
    Mbps10,
    Mbps100,
    Mbps1000,
}

impl LinkSpeed {
    pub fn mbps(&self) -> u32 {
        match self {
            Self::Mbps10 => 10,
            Self::Mbps100 => 100,
            Self::Mbps1000 => 1000,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Duplex {
    Half,
    Full,
}

/// Settings handed to the Ethernet controller registration.
///
/// Unset `speed` and `duplex` mean the link is auto negotiated through the
/// PHY.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct EthConfig {
    pub(crate) mac: MacAddress,
    pub(crate) phy_if_mode: PhyInterfaceMode,
    pub(crate) phy_mask: u32,
    pub(crate) speed: Option<LinkSpeed>,
    pub(crate) duplex: Option<Duplex>,
    pub(crate) pll_1000: Option<u32>,
}

impl EthConfig {
    pub fn new(mac: MacAddress) -> Self {
        Self {
            mac,
            ..Default::default()
        }
    }

    pub fn mac(&self) -> MacAddress {
        self.mac
    }

    pub fn phy_if_mode(&self) -> PhyInterfaceMode {
        self.phy_if_mode
    }

    pub fn phy_mask(&self) -> u32 {
        self.phy_mask
    }

    pub fn speed(&self) -> Option<LinkSpeed> {
        self.speed
    }

    pub fn duplex(&self) -> Option<Duplex> {
        self.duplex
    }

    pub fn pll_1000(&self) -> Option<u32> {
        self.pll_1000
    }

    pub fn set_phy_if_mode(&mut self, mode: PhyInterfaceMode) -> &mut Self {
        self.phy_if_mode = mode;
        self
    }

    /// Bitmap of PHY addresses on the MDIO bus attached to this controller
    pub fn set_phy_mask(&mut self, phy_mask: u32) -> &mut Self {
        self.phy_mask = phy_mask;
        self
    }

    /// Fix the link to `speed` and `duplex` instead of probing the PHY
    pub fn set_fixed_link(
        &mut self,
        speed: LinkSpeed,
        duplex: Duplex,
    ) -> &mut Self {
        self.speed = Some(speed);
        self.duplex = Some(duplex);
        self
    }

    // PLL register value used when running at 1000 Mbps
    pub fn set_pll_1000(&mut self, pll: u32) -> &mut Self {
        self.pll_1000 = Some(pll);
        self
    }
}
