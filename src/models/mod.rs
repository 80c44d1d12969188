mod allocation;
mod category;

pub use allocation::Allocation;
pub use category::Category;
