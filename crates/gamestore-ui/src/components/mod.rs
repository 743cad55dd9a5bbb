//! Reusable UI components for the storefront.

mod badge;
mod button;
mod category_pills;
mod input;

pub use badge::*;
pub use button::*;
pub use category_pills::*;
pub use input::*;
