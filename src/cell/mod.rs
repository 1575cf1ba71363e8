//! Cell compute driver (CCD) and its output type.

mod driver;
mod result;

pub use driver::CellComputeDriver;
pub use result::ComputedCell;
