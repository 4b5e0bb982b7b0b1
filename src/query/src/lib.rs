pub mod dataset;
pub mod error;
pub mod report;
pub mod summary;
pub mod tables;

pub use dataset::FireDataset;
pub use dataset::FireRecord;
pub use summary::CountryTotals;
pub use summary::LandCoverShare;
pub use summary::LandCoverTotals;
pub use summary::YearTotals;
