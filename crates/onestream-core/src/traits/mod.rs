//! Repository traits (ports)

mod repositories;

pub use repositories::{
    RepoResult, StreamRepository, StreamTypeRepository, UserRepository,
};
