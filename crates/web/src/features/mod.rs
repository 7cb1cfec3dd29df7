pub mod athletes;
pub mod categories;
pub mod references;
pub mod training_centers;
