pub use super::customer::Entity as Customer;
pub use super::location::Entity as Location;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::pricing_policy::Entity as PricingPolicy;
pub use super::reservation::Entity as Reservation;
pub use super::vehicle::Entity as Vehicle;
