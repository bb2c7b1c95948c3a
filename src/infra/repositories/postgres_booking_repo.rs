use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_if_free(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Overlap re-check and insert share one transaction so two
        // submissions for the same slot cannot both land.
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE start_time < $1 AND end_time > $2 AND status != 'CANCELLED'")
            .bind(booking.end_time)
            .bind(booking.start_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        if row.get::<i64, _>("count") > 0 {
            return Err(AppError::Conflict("Time slot is already booked".to_string()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, client_name, client_email, service_type, start_time, end_time, status, note, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
            .bind(&booking.id).bind(&booking.client_name).bind(&booking.client_email).bind(&booking.service_type)
            .bind(booking.start_time).bind(booking.end_time).bind(&booking.status).bind(&booking.note)
            .bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE start_time < $1 AND end_time > $2 AND status != 'CANCELLED'").bind(end).bind(start).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY start_time ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
