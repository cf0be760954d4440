//! Command implementations

mod ignore;
mod list;

pub use ignore::ignore;
pub use list::list;
