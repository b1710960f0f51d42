#[macro_use]
mod macros;

pub mod cli;
pub mod env;
pub mod input;
pub mod lists;

pub use self::env::input;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{Columns, FromInput, IStr};
    pub use crate::lists::{Answer, Lists, Overflow};
}
