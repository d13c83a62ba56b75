pub mod dict;
pub mod map;
pub mod reduce;
