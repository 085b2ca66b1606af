//! Sony Bravia IRCC control: command table, endpoint config and dispatcher.

pub mod codes;
pub mod config;
pub mod ircc;

pub use codes::CommandTable;
pub use config::{Config, DeviceConfig};
pub use ircc::{DispatchError, IrccClient};
