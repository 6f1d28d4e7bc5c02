use chrono::Utc;
use sea_orm::{
    sea_query::{Condition, Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::customer::CustomerStatus,
    server::model::{
        customer::{
            Customer, CustomerSearchParams, DriversLicense, RegisterCustomerParams,
            UpdateCustomerProfileParams,
        },
        Page,
    },
};

pub struct CustomerRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a new active customer
    ///
    /// # Returns
    /// - `Ok(Customer)`: The created customer
    /// - `Err(DbErr)`: Database error, including a duplicate email
    pub async fn create(&self, params: RegisterCustomerParams) -> Result<Customer, DbErr> {
        let now = Utc::now();
        let license = params.drivers_license;

        let customer = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email.into_inner()),
            phone: ActiveValue::Set(params.phone.into_inner()),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            street: ActiveValue::Set(params.address.street),
            postal_code: ActiveValue::Set(params.address.postal_code),
            city: ActiveValue::Set(params.address.city),
            country: ActiveValue::Set(params.address.country),
            license_number: ActiveValue::Set(license.number),
            license_issue_country: ActiveValue::Set(license.issue_country),
            license_issue_date: ActiveValue::Set(license.issue_date),
            license_expiry_date: ActiveValue::Set(license.expiry_date),
            status: ActiveValue::Set(CustomerStatus::Active.to_string()),
            registered_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Customer::from_entity(customer)
    }

    /// Gets a customer by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Customer::from_entity)
            .transpose()
    }

    /// Gets a customer by normalized (lowercase) email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Customer::from_entity)
            .transpose()
    }

    /// Checks whether an email is used by any customer other than `except_id`
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email));
        if let Some(id) = except_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Searches customers ordered by last name, then first name
    ///
    /// Name and email filters are case-insensitive substring matches.
    pub async fn search(&self, params: &CustomerSearchParams) -> Result<Page<Customer>, DbErr> {
        use entity::customer::Column;

        let mut query = entity::prelude::Customer::find();

        if let Some(name) = &params.name {
            let first_name = Expr::expr(Func::lower(Expr::col(Column::FirstName)));
            let last_name = Expr::expr(Func::lower(Expr::col(Column::LastName)));

            query = query.filter(
                Condition::any()
                    .add(first_name.like(contains_pattern(name)))
                    .add(last_name.like(contains_pattern(name))),
            );
        }
        if let Some(email) = &params.email {
            query = query.filter(Expr::col(Column::Email).like(contains_pattern(email)));
        }
        if let Some(status) = params.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let customers = paginator
            .fetch_page(params.page)
            .await?
            .into_iter()
            .map(Customer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(customers, total, params.page, params.per_page))
    }

    /// Replaces name, contact data and address
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateCustomerProfileParams,
    ) -> Result<Customer, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email.into_inner());
        active_model.phone = ActiveValue::Set(params.phone.into_inner());
        active_model.street = ActiveValue::Set(params.address.street);
        active_model.postal_code = ActiveValue::Set(params.address.postal_code);
        active_model.city = ActiveValue::Set(params.address.city);
        active_model.country = ActiveValue::Set(params.address.country);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Customer::from_entity(active_model.update(self.db).await?)
    }

    /// Replaces the driver's license
    pub async fn update_drivers_license(
        &self,
        id: i32,
        license: DriversLicense,
    ) -> Result<Customer, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.license_number = ActiveValue::Set(license.number);
        active_model.license_issue_country = ActiveValue::Set(license.issue_country);
        active_model.license_issue_date = ActiveValue::Set(license.issue_date);
        active_model.license_expiry_date = ActiveValue::Set(license.expiry_date);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Customer::from_entity(active_model.update(self.db).await?)
    }

    /// Sets the account status
    pub async fn set_status(&self, id: i32, status: CustomerStatus) -> Result<Customer, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.status = ActiveValue::Set(status.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Customer::from_entity(active_model.update(self.db).await?)
    }

    async fn find_model(&self, id: i32) -> Result<entity::customer::Model, DbErr> {
        entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Customer with id {} not found",
                id
            )))
    }
}

/// `%fragment%` with `%`, `_` and `\` in the fragment matched literally.
fn contains_pattern(fragment: &str) -> LikeExpr {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}
