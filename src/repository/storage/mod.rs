mod in_memory_storage;
mod json_file_storage;
mod storage;

pub use in_memory_storage::*;
pub use json_file_storage::*;
pub use storage::*;
