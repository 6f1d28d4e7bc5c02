mod customer;
mod location;
mod notification;
mod payment;
mod pricing_policy;
mod reservation;
mod vehicle;
