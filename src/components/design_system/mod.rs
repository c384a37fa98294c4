//! Design System Components
//!
//! Small reusable UI primitives shared across the catalog.

mod badge;
mod card;

pub use badge::{Badge, BadgeVariant};
pub use card::{Card, CardBody, CardHeader};
