mod alphabet;
mod interface;
mod registry;
mod snowflake;

pub use alphabet::*;
pub use interface::*;
pub use registry::*;
pub use snowflake::*;
