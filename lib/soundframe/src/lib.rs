pub mod backend;
pub mod error;
pub mod poster;

pub use backend::{BackendClient, BackendClientBuilder};
pub use error::{ApiError, Result};
pub use poster::{trim_prompt, PosterClient, PosterParams};
