//! Repository layout checks keeping unit tests mirrored on the source tree
