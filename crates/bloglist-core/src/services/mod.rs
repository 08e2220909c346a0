//! Services - the use cases built on top of the ports.
//!
//! Handlers call into these; nothing here knows about HTTP.

mod authors;
mod credentials;
mod identity;
mod locks;
mod posts;

pub use authors::{
    AuthorService, AuthorWithPosts, MIN_SECRET_LEN, MIN_USERNAME_LEN, RegisterAuthor,
};
pub use credentials::{CredentialIssuer, IssuedCredential};
pub use identity::IdentityResolver;
pub use locks::{AuthorGuard, AuthorLocks};
pub use posts::{PostService, PostWithOwner};
