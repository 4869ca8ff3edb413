//! x86-specific accelerated code.

mod ssse3;
pub use self::ssse3::Ssse3;
