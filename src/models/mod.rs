pub mod attendee;
pub mod event;
pub mod identity;
pub mod location;

pub use attendee::Attendee;
pub use event::Event;
pub use identity::SessionIdentity;
pub use location::Venue;
