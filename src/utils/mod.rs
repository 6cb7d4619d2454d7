mod shared_string;
pub use shared_string::*;
