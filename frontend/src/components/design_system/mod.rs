//! Design System Components for Leptos
//!
//! The reusable, theme-aware controls the catalog view is built from.

mod button;
mod card;
mod select;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardHeader, CardTitle};
pub use select::{Select, SelectOption, OPTION_CLASS, SELECT_CLASS};
