pub mod braden;
pub mod caprini;
pub mod wells;
