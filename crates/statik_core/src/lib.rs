pub mod master;
pub mod worker;

pub use master::Master;
