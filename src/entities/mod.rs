mod destination;
mod location;
mod session;

pub use destination::Destination;
pub use location::Coordinates;
pub use session::Session;
