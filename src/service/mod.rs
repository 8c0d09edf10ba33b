//! Client persistence: repository seam, PostgreSQL implementation, request validation.

mod crud;
mod repository;
mod validation;
pub use crud::PgClientRepository;
pub use repository::ClientRepository;
pub use validation::RequestValidator;
