// Public library interface for rowgrid-rs
// The layout core is pure; gallery/selection are the caller-side state pieces

pub mod gallery;
pub mod layout;
pub mod selection;
