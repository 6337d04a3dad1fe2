//! Display formatting for catalog views, plans and command results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here cover collections and command feedback. All output
//! is markdown, rendered for the terminal by the CLI.
//!
//! - [`collections`]: recipe cards, recipe details, cuisine lists
//! - [`status`]: command confirmations ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use shelf_core::display::OperationStatus;
//!
//! let status = OperationStatus::favorite_toggled("716429", true);
//! assert_eq!(status.to_string(), "Success: Added recipe 716429 to favorites\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Cuisines, RecipeCard, RecipeCards, RecipeDetail};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
