use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rewindery::config::Config;
use rewindery::middleware::JwtAuth;
use rewindery::modules::auth::controllers::auth_controller;
use rewindery::modules::auth::services::AuthService;
use rewindery::modules::customers::controllers::customer_controller;
use rewindery::modules::customers::repositories::CustomerRepository;
use rewindery::modules::documents::controllers::document_controller;
use rewindery::modules::documents::services::DocumentService;
use rewindery::modules::email::controllers::email_controller;
use rewindery::modules::email::Mailer;
use rewindery::modules::goods::controllers::goods_controller;
use rewindery::modules::goods::repositories::GoodsRepository;
use rewindery::modules::invoices::controllers::invoice_controller;
use rewindery::modules::invoices::repositories::InvoiceRepository;
use rewindery::modules::invoices::services::InvoiceService;
use rewindery::modules::motors::controllers::motor_controller;
use rewindery::modules::motors::repositories::MotorRepository;
use rewindery::modules::quotations::controllers::quotation_controller;
use rewindery::modules::quotations::repositories::QuotationRepository;
use rewindery::modules::quotations::services::QuotationService;
use rewindery::modules::reports::controllers::report_controller;
use rewindery::modules::reports::services::ReportService;
use rewindery::modules::settings::controllers::settings_controller;
use rewindery::modules::settings::SharedSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rewindery=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Rewindery Workshop Management Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    // Repositories
    let customers = Arc::new(CustomerRepository::new(db_pool.clone()));
    let invoices = Arc::new(InvoiceRepository::new(db_pool.clone()));
    let quotations = Arc::new(QuotationRepository::new(db_pool.clone()));
    let motors = Arc::new(MotorRepository::new(db_pool.clone()));
    let goods = Arc::new(GoodsRepository::new(db_pool.clone()));

    // Runtime-adjustable company profile and mail credentials
    let settings = SharedSettings::new(config.company.clone(), config.smtp.clone());

    // Services
    let invoice_service = Arc::new(InvoiceService::new(invoices.clone(), customers.clone()));
    let quotation_service = Arc::new(QuotationService::new(quotations.clone(), customers.clone()));
    let report_service = Arc::new(ReportService::new(
        invoices.clone(),
        customers.clone(),
        motors.clone(),
        goods.clone(),
    ));
    let document_service = Arc::new(DocumentService::new(
        invoices.clone(),
        quotations.clone(),
        settings.clone(),
    ));
    let mailer = Arc::new(Mailer::new(settings.clone()));
    let auth_service = Arc::new(AuthService::new(config.auth.clone()));

    let jwt_secret = config.auth.jwt_secret.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(JwtAuth::new(jwt_secret.clone()))
            .wrap(cors)
            .app_data(web::Data::new(customers.clone()))
            .app_data(web::Data::new(motors.clone()))
            .app_data(web::Data::new(goods.clone()))
            .app_data(web::Data::new(invoice_service.clone()))
            .app_data(web::Data::new(quotation_service.clone()))
            .app_data(web::Data::new(report_service.clone()))
            .app_data(web::Data::new(document_service.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(settings.clone()))
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .service(
                web::scope("/api")
                    .configure(auth_controller::configure)
                    // Document routes register before the invoice and
                    // quotation scopes; see document_controller
                    .configure(document_controller::configure)
                    .configure(customer_controller::configure)
                    .configure(invoice_controller::configure)
                    .configure(quotation_controller::configure)
                    .configure(motor_controller::configure)
                    .configure(goods_controller::configure)
                    .configure(report_controller::configure)
                    .configure(email_controller::configure)
                    .configure(settings_controller::configure),
            )
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rewindery"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Rewindery Workshop Management Service",
        "version": "0.1.0",
        "status": "running"
    }))
}
