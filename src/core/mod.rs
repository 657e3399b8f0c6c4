pub mod assembler;
pub mod charset;
pub mod digest;
pub mod generator;
pub mod md5;
pub mod planner;
pub mod ports;
pub mod rng;
pub mod strength;
