//! Map and reduce over string-keyed dictionaries of optional values.

pub mod codec;
pub mod core;

pub use crate::core::dict::{Dict, DictError};
pub use crate::core::map::{map_dict, try_map_dict};
pub use crate::core::reduce::{reduce_dict, try_reduce_dict};
