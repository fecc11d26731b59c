mod filtering;

pub use filtering::*;
