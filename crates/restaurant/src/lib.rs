mod command;
mod query;

pub use command::*;
pub use query::*;
pub use whatsfordinner_shared::restaurant::{Restaurant, ServiceKind};
