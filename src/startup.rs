//! src/startup.rs

use crate::configuration::{DatabaseSettings, Settings, StorageBackend};
use crate::routes::{
    health_check, home, join_waiting_list, join_waiting_list_form, json_config,
    waiting_list_stats,
};
use crate::store::{InMemoryStore, PostgresStore, WaitingListStore};
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store: Arc<dyn WaitingListStore> = match configuration.database.backend {
            StorageBackend::Postgres => Arc::new(PostgresStore::new(get_connection_pool(
                &configuration.database,
            ))),
            StorageBackend::InMemory => Arc::new(InMemoryStore::default()),
        };
        Self::build_with_store(configuration, store).await
    }

    /// Like `build`, but with a store supplied by the caller.
    pub async fn build_with_store(
        configuration: Settings,
        store: Arc<dyn WaitingListStore>,
    ) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store, configuration.application.hmac_secret)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn WaitingListStore>,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let store: Data<dyn WaitingListStore> = Data::from(store);
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid hmac_secret: {:?}", e))?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/waiting-list", web::post().to(join_waiting_list_form))
            .service(
                web::resource("/api/waiting-list")
                    .route(web::post().to(join_waiting_list))
                    .route(web::get().to(waiting_list_stats)),
            )
            .route("/api/waiting-list/stats", web::get().to(waiting_list_stats))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
