//! Booking lifecycle across fleet, customers, pricing, payments and notifications.
//!
//! Each transition loads the reservation, applies the state change on the domain model
//! and persists it. Side effects on the vehicle follow the transition: pick-up marks the
//! vehicle as rented, return checks it in at the drop-off branch. Booking, cancellation,
//! pick-up and return run in one database transaction each, so the reservation, its
//! payments and its vehicle never disagree. Confirmation and cancellation e-mails are
//! sent after commit, are best effort and never fail the transition.

use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::vehicle::VehicleStatus,
    server::{
        data::{
            customer::CustomerRepository, reservation::ReservationRepository,
            vehicle::VehicleRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            customer::Customer,
            notification::OutgoingMessage,
            pricing::rental_days,
            reservation::{
                CreateReservationParams, NewReservation, Reservation, ReservationSearchParams,
                REFERENCE_LENGTH, REFERENCE_PREFIX,
            },
            vehicle::BookingPeriod,
            Page,
        },
        service::{
            location::LocationService,
            notification::{dispatcher::NotificationDispatcher, NotificationService},
            payment::PaymentService,
            pricing::PricingService,
        },
        util::code::generate_code,
    },
};

const MAX_REFERENCE_ATTEMPTS: usize = 5;

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, dispatcher: &'a NotificationDispatcher) -> Self {
        Self { db, dispatcher }
    }

    /// Books a vehicle for a customer
    ///
    /// # Arguments
    /// - `params`: Validated request; dates were checked against today when it was built
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The new `Pending` reservation with its price and reference
    /// - `Err(AppError::NotFound)`: Customer, vehicle or location does not exist
    /// - `Err(AppError::DomainErr)`: Any booking rule is violated
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation = book(&txn, params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for vehicle {} ({} to {})",
            reservation.reference,
            reservation.vehicle_id,
            reservation.pickup_date,
            reservation.return_date
        );

        Ok(reservation)
    }

    pub async fn get(&self, id: i32) -> Result<Reservation, AppError> {
        find_reservation(self.db, id).await
    }

    pub async fn get_by_reference(&self, reference: &str) -> Result<Reservation, AppError> {
        let reference = reference.trim().to_uppercase();

        ReservationRepository::new(self.db)
            .get_by_reference(&reference)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", reference)))
    }

    pub async fn search(
        &self,
        params: &ReservationSearchParams,
    ) -> Result<Page<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).search(params).await?)
    }

    /// Reservation history of one customer, newest pickup first
    pub async fn customer_reservations(&self, customer_id: i32) -> Result<Vec<Reservation>, AppError> {
        find_customer(self.db, customer_id).await?;

        Ok(ReservationRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?)
    }

    /// IDs of vehicles blocked by an open reservation overlapping the period
    pub async fn booked_vehicle_ids(&self, period: BookingPeriod) -> Result<Vec<i32>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .booked_vehicle_ids(period)
            .await?)
    }

    /// Confirms a pending reservation and e-mails the customer
    pub async fn confirm(&self, id: i32) -> Result<Reservation, AppError> {
        let mut reservation = self.get(id).await?;

        reservation.confirm(Utc::now())?;

        let reservation = ReservationRepository::new(self.db)
            .update_state(&reservation)
            .await?;

        tracing::info!("Confirmed reservation {}", reservation.reference);

        self.notify_customer(
            &reservation,
            format!("Your booking {} is confirmed", reservation.reference),
            format!(
                "Your vehicle is reserved from {} to {}, pick-up at {}. Total: {} EUR incl. VAT.",
                reservation.pickup_date,
                reservation.return_date,
                reservation.pickup_location_code,
                reservation.total_price.gross()
            ),
        )
        .await;

        Ok(reservation)
    }

    /// Cancels a pending or confirmed reservation
    ///
    /// Captured payments are refunded before the customer is notified.
    pub async fn cancel(&self, id: i32, reason: String) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let mut reservation = find_reservation(&txn, id).await?;

        reservation.cancel(reason, Utc::now())?;

        let reservation = ReservationRepository::new(&txn)
            .update_state(&reservation)
            .await?;

        let refunds = PaymentService::new(&txn)
            .refund_for_reservation(reservation.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Cancelled reservation {} ({} refund(s))",
            reservation.reference,
            refunds.len()
        );

        self.notify_customer(
            &reservation,
            format!("Your booking {} was cancelled", reservation.reference),
            format!(
                "Your reservation from {} to {} was cancelled. Reason: {}",
                reservation.pickup_date,
                reservation.return_date,
                reservation.cancellation_reason.as_deref().unwrap_or("-")
            ),
        )
        .await;

        Ok(reservation)
    }

    /// Hands the vehicle to the customer
    pub async fn pickup(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let mut reservation = find_reservation(&txn, id).await?;

        reservation.pick_up(Utc::now())?;

        let reservation = ReservationRepository::new(&txn)
            .update_state(&reservation)
            .await?;

        VehicleRepository::new(&txn)
            .set_status(reservation.vehicle_id, VehicleStatus::Rented)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Vehicle {} picked up for reservation {}",
            reservation.vehicle_id,
            reservation.reference
        );

        Ok(reservation)
    }

    /// Takes the vehicle back at the drop-off location
    pub async fn return_vehicle(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let mut reservation = find_reservation(&txn, id).await?;

        reservation.complete(Utc::now())?;

        let reservation = ReservationRepository::new(&txn)
            .update_state(&reservation)
            .await?;

        VehicleRepository::new(&txn)
            .check_in(
                reservation.vehicle_id,
                &reservation.dropoff_location_code,
                VehicleStatus::Available,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Vehicle {} returned to {} for reservation {}",
            reservation.vehicle_id,
            reservation.dropoff_location_code,
            reservation.reference
        );

        Ok(reservation)
    }

    pub async fn mark_no_show(&self, id: i32) -> Result<Reservation, AppError> {
        let mut reservation = self.get(id).await?;

        reservation.mark_no_show(Utc::now().date_naive())?;

        let reservation = ReservationRepository::new(self.db)
            .update_state(&reservation)
            .await?;

        tracing::info!("Reservation {} marked as no-show", reservation.reference);

        Ok(reservation)
    }

    /// Marks every confirmed reservation whose pickup date lies before `today` as no-show
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of reservations marked
    /// - `Err(AppError)`: The overdue reservations could not be loaded
    pub async fn mark_overdue_no_shows(&self, today: NaiveDate) -> Result<usize, AppError> {
        let repo = ReservationRepository::new(self.db);
        let mut marked = 0;

        for mut reservation in repo.get_overdue_confirmed(today).await? {
            if let Err(e) = reservation.mark_no_show(today) {
                tracing::warn!("Skipping reservation {}: {}", reservation.reference, e);
                continue;
            }

            match repo.update_state(&reservation).await {
                Ok(_) => marked += 1,
                Err(e) => tracing::error!(
                    "Failed to mark reservation {} as no-show: {}",
                    reservation.reference,
                    e
                ),
            }
        }

        Ok(marked)
    }

    async fn notify_customer(&self, reservation: &Reservation, subject: String, body: String) {
        let customer = match find_customer(self.db, reservation.customer_id).await {
            Ok(customer) => customer,
            Err(e) => {
                tracing::warn!(
                    "No notification for reservation {}: {}",
                    reservation.reference,
                    e
                );
                return;
            }
        };

        let greeting = format!("Hello {},\n\n{}", customer.full_name(), body);

        match OutgoingMessage::email(&customer.email, &subject, &greeting, Some(reservation.id)) {
            Ok(message) => {
                NotificationService::new(self.db, self.dispatcher)
                    .send_quietly(message)
                    .await
            }
            Err(e) => tracing::warn!(
                "Invalid notification for reservation {}: {}",
                reservation.reference,
                e
            ),
        }
    }
}

/// Runs every booking check and stores the reservation on `db`
///
/// The vehicle row is locked first, so a concurrent booking of the same vehicle waits
/// for this one and then sees its reservation in the overlap check.
async fn book<C: ConnectionTrait>(
    db: &C,
    params: CreateReservationParams,
) -> Result<Reservation, AppError> {
    let period = params.period;

    let customer = find_customer(db, params.customer_id).await?;
    if !customer.can_book() {
        return Err(DomainError::conflict(format!(
            "Customer {} is {} and cannot book",
            customer.id, customer.status
        ))
        .into());
    }
    if !customer.drivers_license.is_valid_on(period.return_date) {
        return Err(DomainError::validation(format!(
            "Driver's license expires on {}, before the return date {}",
            customer.drivers_license.expiry_date, period.return_date
        ))
        .into());
    }

    let vehicle = VehicleRepository::new(db)
        .get_for_update(params.vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", params.vehicle_id)))?;
    if vehicle.status != VehicleStatus::Available {
        return Err(DomainError::conflict(format!(
            "Vehicle {} is {} and cannot be booked",
            vehicle.id, vehicle.status
        ))
        .into());
    }
    if vehicle.location_code != params.pickup_location_code.as_str() {
        return Err(DomainError::validation(format!(
            "Vehicle {} is located at {}, not at {}",
            vehicle.id,
            vehicle.location_code,
            params.pickup_location_code.as_str()
        ))
        .into());
    }

    let locations = LocationService::new(db);
    let pickup_location = locations
        .get_active(params.pickup_location_code.as_str())
        .await?;
    let dropoff_location = locations
        .get_active(params.dropoff_location_code.as_str())
        .await?;

    let repo = ReservationRepository::new(db);

    if repo.has_overlap(vehicle.id, period).await? {
        return Err(DomainError::conflict(format!(
            "Vehicle {} is already booked between {} and {}",
            vehicle.id, period.pickup_date, period.return_date
        ))
        .into());
    }

    let daily_rate = PricingService::new(db)
        .find_effective_policy(
            vehicle.category,
            Some(&pickup_location.code),
            period.pickup_date,
        )
        .await?
        .map(|policy| policy.daily_rate)
        .unwrap_or(vehicle.daily_rate);
    let total_price = daily_rate.times(rental_days(period.pickup_date, period.return_date)?)?;

    let reference = unique_reference(&repo).await?;

    let reservation = repo
        .create(NewReservation {
            reference,
            vehicle_id: vehicle.id,
            customer_id: customer.id,
            period,
            pickup_location_code: pickup_location.code,
            dropoff_location_code: dropoff_location.code,
            total_price,
        })
        .await?;

    Ok(reservation)
}

async fn find_reservation<C: ConnectionTrait>(db: &C, id: i32) -> Result<Reservation, AppError> {
    ReservationRepository::new(db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
}

async fn find_customer<C: ConnectionTrait>(db: &C, id: i32) -> Result<Customer, AppError> {
    CustomerRepository::new(db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
}

async fn unique_reference<C: ConnectionTrait>(
    repo: &ReservationRepository<'_, C>,
) -> Result<String, AppError> {
    for _ in 0..MAX_REFERENCE_ATTEMPTS {
        let reference = generate_code(REFERENCE_PREFIX, REFERENCE_LENGTH);
        if !repo.reference_exists(&reference).await? {
            return Ok(reference);
        }
    }

    Err(AppError::InternalError(
        "Failed to generate a unique reservation reference".to_string(),
    ))
}
