mod fallback;
mod greeting;
mod health;

pub use fallback::fallback_handler;
pub use greeting::{greeting_routes, Greeting};
pub use health::health_routes;
