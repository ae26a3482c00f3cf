pub mod convert;
pub mod formats;
pub mod inspect;
pub mod util;

pub use convert::*;
pub use formats::*;
pub use inspect::*;
pub use util::*;
