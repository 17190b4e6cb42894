pub mod jwt;
pub mod memory;

pub use jwt::JwtTokenVerifier;
pub use memory::InMemorySubscriptionConfirmer;
