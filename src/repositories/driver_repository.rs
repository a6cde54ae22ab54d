use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::utils::errors::{not_found_error, AppError};

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: String,
        license_number: String,
        license_expiry: NaiveDate,
        vehicle_category: String,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers
                (id, name, email, phone, license_number, license_expiry, vehicle_category,
                 status, trips_completed, safety_score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'On Duty', 0, 100, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(license_number)
        .bind(license_expiry)
        .bind(vehicle_category)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let drivers =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(drivers)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        license_number: Option<String>,
        license_expiry: Option<NaiveDate>,
        vehicle_category: Option<String>,
        safety_score: Option<i32>,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = $2, email = $3, phone = $4, license_number = $5,
                license_expiry = $6, vehicle_category = $7, safety_score = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(email.unwrap_or(current.email))
        .bind(phone.unwrap_or(current.phone))
        .bind(license_number.unwrap_or(current.license_number))
        .bind(license_expiry.unwrap_or(current.license_expiry))
        .bind(vehicle_category.unwrap_or(current.vehicle_category))
        .bind(safety_score.unwrap_or(current.safety_score))
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn set_status(&self, id: Uuid, status: &str) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Driver", id))?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Driver", id));
        }

        Ok(())
    }
}
