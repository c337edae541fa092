mod io;
pub use self::io::*;

mod serde;
pub use self::serde::*;
