use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{customer, health_check, home, json_config, order, path_config, product},
    telemetry::spawn_blocking_with_tracing,
    utils::{get_connection_pool, run_migrations, DbPool}
};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    /// Opens the connection pool, brings the schema up to date and binds the
    /// listener. The pool lives as long as the server.
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)
            .context("Failed to build connection pool")?;

        let migration_pool = pool.clone();
        spawn_blocking_with_tracing(move || {
            let mut conn = migration_pool.get()?;
            run_migrations(&mut conn).map_err(|e| anyhow::anyhow!(e))
        })
        .await
        .context("Failed due to threadpool error")?
        .context("Failed to run migrations")?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind listener")?;
        let port = listener.local_addr()?.port();

        let server = get_server(listener, pool)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn get_server(listener: TcpListener, pool: DbPool) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(path_config())
            .app_data(pool.clone())
            .route("/", web::get().to(home))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/customers")
                    .route("", web::get().to(customer::get_customers))
                    .route("", web::post().to(customer::post_customer))
                    .route("/{id}", web::get().to(customer::get_customer))
                    .route("/{id}", web::put().to(customer::update_customer))
                    .route("/{id}", web::delete().to(customer::delete_customer))
            )
            .service(
                web::scope("/products")
                    .route("", web::get().to(product::get_products))
                    .route("", web::post().to(product::post_product))
                    .route("/by-name/{name}", web::get().to(product::get_products_by_name))
                    .route("/{id}", web::get().to(product::get_product))
                    .route("/{id}", web::put().to(product::update_product))
                    .route("/{id}", web::delete().to(product::delete_product))
            )
            .service(
                web::scope("/orders")
                    .route("", web::get().to(order::get_orders))
                    .route("", web::post().to(order::post_order))
                    .route("/by-id/{id}", web::get().to(order::get_order))
                    .route("/{customer_id}", web::get().to(order::get_customer_orders))
                    .route("/{id}", web::put().to(order::update_order))
                    .route("/{id}", web::delete().to(order::delete_order))
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
