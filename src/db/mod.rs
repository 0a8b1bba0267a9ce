pub mod directory;
pub mod id_gen;
pub mod seed;

pub use directory::Directory;
