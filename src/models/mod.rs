pub mod hospital;

pub use hospital::{BedCounts, HospitalRecord};
