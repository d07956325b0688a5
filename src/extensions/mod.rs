pub mod distance_ext;
