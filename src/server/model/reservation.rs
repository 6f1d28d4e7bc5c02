//! Reservation aggregate and its lifecycle.
//!
//! Every status change goes through one of the transition methods on [`Reservation`],
//! which check the current status and stamp the matching timestamp. Services persist
//! the resulting state; they never assign `status` directly.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::reservation::{
        CancelReservationDto, CreateReservationDto, PaginatedReservationsDto, ReservationDto,
        ReservationSearchQuery, ReservationStatus,
    },
    server::{
        error::domain::DomainError,
        model::{
            clamp_per_page, money::Money, parse_column, pricing::rental_days, value::LocationCode,
            vehicle::BookingPeriod, Page,
        },
    },
};

pub const MAX_RENTAL_DAYS: i64 = 90;
pub const REFERENCE_PREFIX: &str = "OCR";
pub const REFERENCE_LENGTH: usize = 8;

const MAX_CANCELLATION_REASON_LENGTH: usize = 500;

/// Statuses that block the vehicle for their period.
pub const OPEN_STATUSES: [ReservationStatus; 3] = [
    ReservationStatus::Pending,
    ReservationStatus::Confirmed,
    ReservationStatus::Active,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub reference: String,
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location_code: String,
    pub dropoff_location_code: String,
    pub total_price: Money,
    pub status: ReservationStatus,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, DbErr> {
        Ok(Self {
            status: parse_column("reservation.status", &entity.status)?,
            total_price: Money::from_net_cents(entity.total_price_net_cents).map_err(|e| {
                DbErr::Custom(format!("Invalid reservation.total_price: {}", e))
            })?,
            id: entity.id,
            reference: entity.reference,
            vehicle_id: entity.vehicle_id,
            customer_id: entity.customer_id,
            pickup_date: entity.pickup_date,
            return_date: entity.return_date,
            pickup_location_code: entity.pickup_location_code,
            dropoff_location_code: entity.dropoff_location_code,
            cancellation_reason: entity.cancellation_reason,
            created_at: entity.created_at,
            confirmed_at: entity.confirmed_at,
            cancelled_at: entity.cancelled_at,
            picked_up_at: entity.picked_up_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn rental_days(&self) -> i64 {
        (self.return_date - self.pickup_date).num_days().max(1)
    }

    pub fn is_open(&self) -> bool {
        OPEN_STATUSES.contains(&self.status)
    }

    /// Pending -> Confirmed.
    pub fn confirm(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.require(&[ReservationStatus::Pending], "confirm")?;
        self.status = ReservationStatus::Confirmed;
        self.confirmed_at = Some(now);
        Ok(())
    }

    /// Pending or Confirmed -> Cancelled.
    pub fn cancel(&mut self, reason: String, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.require(
            &[ReservationStatus::Pending, ReservationStatus::Confirmed],
            "cancel",
        )?;
        self.status = ReservationStatus::Cancelled;
        self.cancellation_reason = Some(reason);
        self.cancelled_at = Some(now);
        Ok(())
    }

    /// Confirmed -> Active, allowed from the pickup date on.
    pub fn pick_up(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.require(&[ReservationStatus::Confirmed], "pick up")?;
        if now.date_naive() < self.pickup_date {
            return Err(DomainError::conflict(format!(
                "Vehicle cannot be picked up before {}",
                self.pickup_date
            )));
        }
        self.status = ReservationStatus::Active;
        self.picked_up_at = Some(now);
        Ok(())
    }

    /// Active -> Completed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.require(&[ReservationStatus::Active], "return")?;
        self.status = ReservationStatus::Completed;
        self.completed_at = Some(now);
        Ok(())
    }

    /// Confirmed -> NoShow, once the pickup date lies before `today`.
    pub fn mark_no_show(&mut self, today: NaiveDate) -> Result<(), DomainError> {
        self.require(&[ReservationStatus::Confirmed], "mark as no-show")?;
        if today <= self.pickup_date {
            return Err(DomainError::conflict(format!(
                "Reservation {} cannot be marked as no-show before its pickup date has passed",
                self.reference
            )));
        }
        self.status = ReservationStatus::NoShow;
        Ok(())
    }

    fn require(&self, allowed: &[ReservationStatus], action: &str) -> Result<(), DomainError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!(
                "Cannot {} a reservation in status {}",
                action, self.status
            )))
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            rental_days: self.rental_days(),
            id: self.id,
            reference: self.reference,
            vehicle_id: self.vehicle_id,
            customer_id: self.customer_id,
            pickup_date: self.pickup_date,
            return_date: self.return_date,
            pickup_location_code: self.pickup_location_code,
            dropoff_location_code: self.dropoff_location_code,
            total_price: self.total_price.into_dto(),
            status: self.status,
            cancellation_reason: self.cancellation_reason,
            created_at: self.created_at,
            confirmed_at: self.confirmed_at,
            cancelled_at: self.cancelled_at,
            picked_up_at: self.picked_up_at,
            completed_at: self.completed_at,
        }
    }
}

/// Validated booking request. Cross-aggregate checks happen in the service.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub period: BookingPeriod,
    pub pickup_location_code: LocationCode,
    pub dropoff_location_code: LocationCode,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto, today: NaiveDate) -> Result<Self, DomainError> {
        if dto.pickup_date < today {
            return Err(DomainError::validation("Pickup date must not be in the past"));
        }

        let period = BookingPeriod::new(dto.pickup_date, dto.return_date)?;
        if rental_days(dto.pickup_date, dto.return_date)? > MAX_RENTAL_DAYS {
            return Err(DomainError::validation(format!(
                "Rental period must not exceed {} days",
                MAX_RENTAL_DAYS
            )));
        }

        let pickup_location_code = LocationCode::parse(&dto.pickup_location_code)?;
        let dropoff_location_code = match dto.dropoff_location_code.as_deref() {
            Some(code) => LocationCode::parse(code)?,
            None => pickup_location_code.clone(),
        };

        Ok(Self {
            vehicle_id: dto.vehicle_id,
            customer_id: dto.customer_id,
            period,
            pickup_location_code,
            dropoff_location_code,
        })
    }
}

/// Fully priced reservation ready to be inserted as `Pending`.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub reference: String,
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub period: BookingPeriod,
    pub pickup_location_code: String,
    pub dropoff_location_code: String,
    pub total_price: Money,
}

pub fn cancellation_reason(dto: CancelReservationDto) -> Result<String, DomainError> {
    let reason = dto.reason.trim();

    if reason.is_empty() {
        return Err(DomainError::validation("Cancellation reason must not be empty"));
    }
    if reason.chars().count() > MAX_CANCELLATION_REASON_LENGTH {
        return Err(DomainError::validation(format!(
            "Cancellation reason must be at most {} characters",
            MAX_CANCELLATION_REASON_LENGTH
        )));
    }

    Ok(reason.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct ReservationSearchParams {
    pub customer_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub status: Option<ReservationStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: u64,
    pub per_page: u64,
}

impl ReservationSearchParams {
    pub fn from_query(query: ReservationSearchQuery) -> Self {
        Self {
            customer_id: query.customer_id,
            vehicle_id: query.vehicle_id,
            status: query.status,
            from: query.from,
            to: query.to,
            page: query.page,
            per_page: clamp_per_page(query.per_page),
        }
    }
}

impl Page<Reservation> {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        PaginatedReservationsDto {
            reservations: self.items.into_iter().map(Reservation::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
