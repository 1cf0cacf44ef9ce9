mod command;
mod error;
mod input;
mod inquiry;
pub mod store;
pub mod table;

pub use command::*;
pub use error::*;
pub use input::*;
pub use inquiry::*;
pub use nashikweb_content::ServiceKind;
