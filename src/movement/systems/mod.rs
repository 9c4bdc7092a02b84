//! Movement domain: system modules for controller updates.

pub(crate) mod commands;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use commands::apply_controller_commands;
pub(crate) use input::read_input;
pub(crate) use movement::drive_motors;
