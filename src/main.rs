use std::env;
use std::sync::Arc;

use viator::db::PgPool;
use viator::engine::Engine;
use viator::external::google_maps::GoogleMaps;
use viator::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let db_uri = env::var("DATABASE_URL").unwrap();

    let PgPool(pool) = PgPool::new(&db_uri, 5).await.unwrap();

    let engine = Engine::new(pool, Arc::new(GoogleMaps)).await.unwrap();

    serve(engine).await;
}
