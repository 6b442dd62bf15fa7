pub mod memberships;
pub mod moods;
pub mod pool;

pub use pool::create_pool;
