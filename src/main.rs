//! 병원 리뷰 서비스 메인 애플리케이션
//!
//! 설정에 따라 저장소(MongoDB + Redis 또는 메모리)를 고르고, 컨테이너를 조립한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use hospital_review_service::caching::RedisClient;
use hospital_review_service::config::{
    AdminSeedConfig, CacheConfig, DatabaseConfig, RateLimitConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
use hospital_review_service::core::{AppContainer, AppResult, Repositories};
use hospital_review_service::db::Database;
use hospital_review_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 병원 리뷰 서비스 시작중...");

    let repositories = match initialize_repositories().await {
        Ok(repositories) => repositories,
        Err(e) => {
            error!("저장소 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let container = web::Data::new(AppContainer::from_config(repositories));

    if let Some(seed) = AdminSeedConfig::load() {
        if let Err(e) = container.seed_admin.execute(&seed).await {
            error!("관리자 계정 준비 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    } else {
        warn!("ADMIN_EMAIL/ADMIN_PASSWORD 미설정: 기존 관리자가 없으면 가입 승인을 할 수 없습니다");
    }
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(container).await
}

async fn start_http_server(container: web::Data<AppContainer>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(container.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// `STORAGE_BACKEND`에 따라 저장소 구현을 고릅니다.
///
/// MongoDB 사용 시 Redis 연결에 실패하면 캐시 없이 계속 진행합니다.
async fn initialize_repositories() -> AppResult<Repositories> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작하면 데이터가 사라집니다");
            Ok(Repositories::in_memory())
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중... ({})", DatabaseConfig::database_name());
            let database = Database::from_config().await?;

            let redis = match RedisClient::connect(&CacheConfig::redis_url()).await {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Redis 없이 시작합니다: {}", e);
                    None
                }
            };

            Repositories::mongo(&database, redis).await
        }
    }
}

/// `PROFILE`(dev/prod)에 맞는 .env 파일을 로드합니다.
///
/// ```bash
/// PROFILE=dev cargo run    # .env.dev
/// PROFILE=prod cargo run   # .env.prod
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 (기본 `info,actix_web=debug`)
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
