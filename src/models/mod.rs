mod car;
mod ownership;
mod user;

pub use car::{Car, NewCar};
pub use ownership::CarOwnership;
pub use user::{NewUser, User};
