//! Live stroke fitting: the incremental controller, its configuration and
//! previews of the not yet committed tail.

pub mod config;
pub mod controller;
pub mod tail;
