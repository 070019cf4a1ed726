mod district;
mod partition;
mod score;

pub use district::District;
pub use partition::Partition;
pub use score::DistrictClass;
