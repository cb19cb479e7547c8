pub mod aggregate;

pub use aggregate::visit_timestamps;
