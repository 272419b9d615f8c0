pub mod distribution;
pub mod noise;
