pub mod cluster;
pub mod compare;
pub mod scan;
pub mod validate;
