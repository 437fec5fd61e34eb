pub mod buffer;
pub mod error;
pub mod event;
pub mod reading;
pub mod severity;
pub mod state;
pub mod table;

pub use buffer::RollingBuffer;
pub use error::{AqError, Result};
pub use event::Message;
pub use reading::Reading;
pub use severity::{classify, Severity};
pub use state::Session;
pub use table::{build_table, tail, Table, TableRow};
