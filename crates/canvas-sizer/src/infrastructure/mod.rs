//! Infrastructure layer: adapters that touch the outside world.
//!
//! - **`storage`** – TOML configuration file holding default form values,
//!   display language and log level.

pub mod storage;
