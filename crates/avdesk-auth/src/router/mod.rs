//! Role-to-view routing.

pub mod selector;
pub mod table;

pub use selector::RoleRouter;
pub use table::ViewTable;
