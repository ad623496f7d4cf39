//! CPU-visible memory map, split into the read and write paths.

mod read;
mod write;
