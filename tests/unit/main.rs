//! Unit tests mirrored on the source tree, one file per source module

mod math;
