pub mod affine;
pub mod jacobian;
pub mod modarith;
