use sqlx::MySqlPool;

use crate::store;

pub async fn init_db(database_url: &str) -> MySqlPool {
    let pool = MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database");

    store::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    pool
}
