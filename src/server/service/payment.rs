use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        payment::{PaymentMethod, PaymentStatus},
        reservation::ReservationStatus,
    },
    server::{
        data::{payment::PaymentRepository, reservation::ReservationRepository},
        error::{domain::DomainError, AppError},
        model::{
            payment::{Payment, TRANSACTION_LENGTH, TRANSACTION_PREFIX},
            reservation::Reservation,
        },
        util::code::generate_code,
    },
};

const MAX_REFERENCE_ATTEMPTS: usize = 5;

pub struct PaymentService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Charges the gross total of a reservation
    ///
    /// The provider is simulated, so the payment is captured immediately.
    ///
    /// # Returns
    /// - `Ok(Payment)`: The captured payment
    /// - `Err(AppError::NotFound)`: Reservation does not exist
    /// - `Err(AppError::DomainErr)`: Reservation is not pending/confirmed or is already paid
    pub async fn process(
        &self,
        reservation_id: i32,
        method: PaymentMethod,
    ) -> Result<Payment, AppError> {
        let reservation = self.reservation(reservation_id).await?;

        if !matches!(
            reservation.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        ) {
            return Err(DomainError::conflict(format!(
                "Cannot pay for a reservation in status {}",
                reservation.status
            ))
            .into());
        }

        let repo = PaymentRepository::new(self.db);

        if repo.has_captured(reservation_id).await? {
            return Err(DomainError::conflict(format!(
                "Reservation {} is already paid",
                reservation.reference
            ))
            .into());
        }

        let amount_cents = reservation.total_price.gross_cents()?;
        let transaction_reference = self.unique_transaction_reference().await?;

        let payment = repo
            .create(
                reservation_id,
                amount_cents,
                method,
                PaymentStatus::Captured,
                transaction_reference,
            )
            .await?;

        tracing::info!(
            "Captured payment {} of {} cents for reservation {}",
            payment.transaction_reference,
            payment.amount_cents,
            reservation.reference
        );

        Ok(payment)
    }

    /// Refunds a captured payment
    pub async fn refund(&self, id: i32) -> Result<Payment, AppError> {
        let mut payment = self.get(id).await?;

        payment.refund(Utc::now())?;

        let payment = PaymentRepository::new(self.db).update_state(&payment).await?;

        tracing::info!("Refunded payment {}", payment.transaction_reference);

        Ok(payment)
    }

    /// Refunds every captured payment of a reservation
    ///
    /// # Returns
    /// - `Ok(Vec<Payment>)`: The refunded payments, empty when nothing was captured
    pub async fn refund_for_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<Payment>, AppError> {
        let repo = PaymentRepository::new(self.db);
        let now = Utc::now();

        let mut refunded = Vec::new();
        for mut payment in repo.get_by_reservation(reservation_id).await? {
            if !payment.is_captured() {
                continue;
            }

            payment.refund(now)?;
            refunded.push(repo.update_state(&payment).await?);
        }

        if !refunded.is_empty() {
            tracing::info!(
                "Refunded {} payment(s) for reservation {}",
                refunded.len(),
                reservation_id
            );
        }

        Ok(refunded)
    }

    pub async fn get(&self, id: i32) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", id)))
    }

    pub async fn list_for_reservation(&self, reservation_id: i32) -> Result<Vec<Payment>, AppError> {
        self.reservation(reservation_id).await?;

        Ok(PaymentRepository::new(self.db)
            .get_by_reservation(reservation_id)
            .await?)
    }

    async fn reservation(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    async fn unique_transaction_reference(&self) -> Result<String, AppError> {
        let repo = PaymentRepository::new(self.db);

        for _ in 0..MAX_REFERENCE_ATTEMPTS {
            let reference = generate_code(TRANSACTION_PREFIX, TRANSACTION_LENGTH);
            if !repo.transaction_reference_exists(&reference).await? {
                return Ok(reference);
            }
        }

        Err(AppError::InternalError(
            "Failed to generate a unique transaction reference".to_string(),
        ))
    }
}
