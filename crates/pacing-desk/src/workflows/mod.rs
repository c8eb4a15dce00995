pub mod allocation;
pub mod sheet;
