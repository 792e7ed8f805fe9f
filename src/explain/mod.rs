pub mod generator;
pub mod tables;

pub use generator::{contributions, explain, Contribution, Explanation};
pub use tables::{improvement_tip, strength_effect};
