pub mod handlers;
pub mod registry;
pub mod requests;
pub mod schema;
pub mod traits;

pub use handlers::default_registry;
pub use registry::ToolRegistry;
pub use requests::ValidationError;
pub use schema::{InputSchema, ParamSpec, ToolDefinition};
pub use traits::ToolHandler;
