// Shared math

pub mod math;
