//! Customer repository implementation
//!
//! This module provides database access for the `customers` table.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::error::DatabaseError;

/// Columns selected by every customer query
const CUSTOMER_COLUMNS: &str = "id, name, document, birth_date, location, vehicle_value";

/// A row of the `customers` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub document: String,
    pub birth_date: NaiveDate,
    pub location: String,
    pub vehicle_value: f64,
}

/// Column values for an insert; the id is generated by the database
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub document: String,
    pub birth_date: NaiveDate,
    pub location: String,
    pub vehicle_value: f64,
}

/// Repository for customer records
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a customer and returns the stored row with its generated id
    pub async fn insert(&self, customer: &NewCustomer) -> Result<CustomerRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO customers (name, document, birth_date, location, vehicle_value) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CUSTOMER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(&customer.name)
            .bind(&customer.document)
            .bind(customer.birth_date)
            .bind(&customer.location)
            .bind(customer.vehicle_value)
            .fetch_one(&self.pool)
            .await?;

        debug!(customer_id = row.id, "Customer row inserted");
        Ok(row)
    }

    /// Retrieves a customer by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<CustomerRow>, DatabaseError> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Retrieves every customer in ascending id order
    pub async fn find_all(&self) -> Result<Vec<CustomerRow>, DatabaseError> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id ASC");

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Overwrites every column of an existing customer
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has the id
    pub async fn update(&self, row: &CustomerRow) -> Result<CustomerRow, DatabaseError> {
        let sql = format!(
            "UPDATE customers \
             SET name = $2, document = $3, birth_date = $4, location = $5, vehicle_value = $6 \
             WHERE id = $1 \
             RETURNING {CUSTOMER_COLUMNS}"
        );

        sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.document)
            .bind(row.birth_date)
            .bind(&row.location)
            .bind(row.vehicle_value)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Customer", row.id))
    }

    /// Deletes a customer, returning the number of rows removed
    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
