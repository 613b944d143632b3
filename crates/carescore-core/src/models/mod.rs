pub mod analysis;
pub mod assessment;
pub mod patient;
pub mod recommendation;
pub mod risk;
pub mod trend;
