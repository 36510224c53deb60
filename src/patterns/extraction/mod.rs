pub mod domain;
pub mod email;
pub mod mobile;
pub mod normalize;
pub mod url;
