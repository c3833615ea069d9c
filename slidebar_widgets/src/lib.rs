mod handle;
pub use handle::*;

pub mod mapping;
pub use mapping::ValueRange;

mod track;
pub use track::*;
