use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use coupon_api::db::establish_connection_pool;
use coupon_api::repository::DieselRepository;
use coupon_api::routes::coupons::{add_coupon, delete_coupon, edit_coupon, show_coupon, show_coupons};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_coupons)
            .service(show_coupon)
            .service(add_coupon)
            .service(edit_coupon)
            .service(delete_coupon)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
