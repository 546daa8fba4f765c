pub mod config;
pub mod error;
pub mod prompt;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use routes::create_router;
pub use service::{GenerateError, RecipeService};
pub use state::AppState;
