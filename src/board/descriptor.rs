// SPDX-License-Identifier: Apache-2.0

/// Named range of the NOR flash
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FlashPartition {
    pub name: &'static str,
    pub offset: u32,
    pub size: u32,
}

impl FlashPartition {
    pub fn end(&self) -> u32 {
        self.offset + self.size
    }
}

/// LED state applied when the LED is registered
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LedDefaultState {
    On,
    #[default]
    Off,
    /// Keep whatever the boot loader left
    Keep,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GpioLed {
    /// `<board>:<color>:<function>`
    pub name: &'static str,
    pub gpio: u8,
    pub active_low: bool,
    pub default_state: LedDefaultState,
}

/// Input event code reported when a button is pressed
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum KeyCode {
    Restart,
    WpsButton,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GpioButton {
    pub desc: &'static str,
    pub code: KeyCode,
    pub debounce_interval_ms: u32,
    pub gpio: u8,
    pub active_low: bool,
}

/// GPIO claimed as output and exported with a fixed direction
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GpioOutput {
    pub label: &'static str,
    pub gpio: u8,
    pub initial_high: bool,
}
