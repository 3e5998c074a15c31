pub mod entropy;
pub mod id3;
pub mod node;
pub mod params;
