//! Concrete GPX node types

pub mod bounds;
pub mod copyright;
pub mod email;
pub mod extensions;
pub mod link;
pub mod metadata;
pub mod person;
pub mod route;
pub mod track;
pub mod waypoint;

pub use bounds::Bounds;
pub use copyright::Copyright;
pub use email::EmailAddress;
pub use extensions::Extensions;
pub use link::Link;
pub use metadata::Metadata;
pub use person::Person;
pub use route::Route;
pub use track::{Track, TrackSegment};
pub use waypoint::{PointKind, Waypoint};
