// utils.rs
pub mod typeid_map;
