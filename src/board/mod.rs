// SPDX-License-Identifier: Apache-2.0

mod descriptor;
mod registrar;
mod setup;
pub mod tw150v1;

pub use self::{
    descriptor::{
        FlashPartition, GpioButton, GpioLed, GpioOutput, KeyCode,
        LedDefaultState,
    },
    registrar::Registrar,
    setup::BoardConfig,
};
