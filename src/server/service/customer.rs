use sea_orm::DatabaseConnection;

use crate::{
    model::customer::CustomerStatus,
    server::{
        data::customer::CustomerRepository,
        error::{domain::DomainError, AppError},
        model::{
            customer::{
                Customer, CustomerSearchParams, DriversLicense, RegisterCustomerParams,
                UpdateCustomerProfileParams,
            },
            value::Email,
            Page,
        },
    },
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer
    ///
    /// Age and license rules are enforced when the params are built; this checks the
    /// e-mail address is not registered yet.
    pub async fn register(&self, params: RegisterCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        if repo.email_taken(params.email.as_str(), None).await? {
            return Err(email_conflict(&params.email).into());
        }

        let customer = repo.create(params).await?;

        tracing::info!("Registered customer {}", customer.id);

        Ok(customer)
    }

    pub async fn get(&self, id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    /// Looks a customer up by e-mail, case-insensitively
    pub async fn find_by_email(&self, email: &str) -> Result<Customer, AppError> {
        let email = Email::parse(email)?;

        CustomerRepository::new(self.db)
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No customer registered with {}", email.as_str()))
            })
    }

    pub async fn search(&self, params: &CustomerSearchParams) -> Result<Page<Customer>, AppError> {
        Ok(CustomerRepository::new(self.db).search(params).await?)
    }

    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateCustomerProfileParams,
    ) -> Result<Customer, AppError> {
        self.get(id).await?;

        let repo = CustomerRepository::new(self.db);

        if repo.email_taken(params.email.as_str(), Some(id)).await? {
            return Err(email_conflict(&params.email).into());
        }

        Ok(repo.update_profile(id, params).await?)
    }

    pub async fn update_drivers_license(
        &self,
        id: i32,
        license: DriversLicense,
    ) -> Result<Customer, AppError> {
        self.get(id).await?;

        Ok(CustomerRepository::new(self.db)
            .update_drivers_license(id, license)
            .await?)
    }

    pub async fn change_status(&self, id: i32, status: CustomerStatus) -> Result<Customer, AppError> {
        let customer = self.get(id).await?;

        if customer.status == status {
            return Ok(customer);
        }

        let customer = CustomerRepository::new(self.db)
            .set_status(id, status)
            .await?;

        tracing::info!("Customer {} is now {}", customer.id, customer.status);

        Ok(customer)
    }
}

fn email_conflict(email: &Email) -> DomainError {
    DomainError::conflict(format!(
        "A customer with e-mail {} is already registered",
        email.as_str()
    ))
}
