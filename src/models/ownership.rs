use diesel::prelude::*;
use serde::Serialize;

/// One row in the `users_cars` association table linking a User to a Car.
///
/// The table carries no generated columns, so a single struct serves both
/// SELECT and INSERT. The composite primary key is (user_id, car_id); a
/// separate unique constraint on car_id keeps a Car from being owned by two
/// Users at once.
#[derive(Debug, Queryable, Selectable, Insertable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users_cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CarOwnership {
    pub user_id: i32,
    pub car_id: i32,
}
