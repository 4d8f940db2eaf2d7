pub mod category;
pub mod range;
pub mod report;
pub mod settings;
pub mod transaction;
