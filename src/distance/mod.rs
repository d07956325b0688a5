mod formula;

pub use formula::DistanceFormula;
