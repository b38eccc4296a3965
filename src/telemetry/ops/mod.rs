pub mod extract;
pub mod samples;
