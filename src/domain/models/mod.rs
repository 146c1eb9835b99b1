pub mod attendance;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod notification;
pub mod pagination;
pub mod record;

pub use attendance::*;
pub use dashboard::*;
pub use department::*;
pub use employee::*;
pub use notification::*;
pub use pagination::*;
pub use record::*;
