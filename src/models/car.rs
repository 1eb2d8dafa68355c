use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Car model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Car {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewCar model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cars)]
pub struct NewCar {
    pub name: String,
}
