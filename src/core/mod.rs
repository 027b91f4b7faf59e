pub mod catalog;
pub mod grouping;
pub mod inventory;
pub mod memo;
pub mod runner;
pub mod sequences;

pub use crate::domain::model::{CacheInfo, ConnectionOpts, DemoOutput, PlainOpts, ProductRecord};
pub use crate::domain::ports::{ConfigProvider, Demo};
pub use crate::utils::error::Result;
