//! 플랫폼 OAuth 게이트웨이 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 업스트림 커넥션 풀과 식별자 캐시는 여기서 한 번 생성되어 모든 워커가 공유합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use platform_oauth_gateway::caching::IdentityCache;
use platform_oauth_gateway::config::{
    DebugConfig, HttpClientConfig, OAuthConfig, PlatformConfig, ServerConfig,
};
use platform_oauth_gateway::domain::models::state::StateCodec;
use platform_oauth_gateway::middlewares::RequestDump;
use platform_oauth_gateway::routes::configure_all_routes;
use platform_oauth_gateway::services::{BizProxyService, OAuthBridgeService, PlatformClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 플랫폼 OAuth 게이트웨이 시작중...");

    let (bridge, proxy) = initialize_services()?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(bridge, proxy).await
}

/// 설정을 로드하고 서비스 그래프를 구성합니다
///
/// 두 서비스는 같은 `PlatformClient`(커넥션 풀)와 같은 `IdentityCache`를 공유합니다.
///
/// # Errors
///
/// * `std::io::Error` - 업스트림 HTTP 클라이언트 생성 실패
fn initialize_services() -> std::io::Result<(
    web::Data<OAuthBridgeService>,
    web::Data<BizProxyService>,
)> {
    let platform = PlatformConfig::from_env();
    info!(
        "플랫폼 엔드포인트: authorize={}, token={}",
        platform.authorize_url, platform.token_url
    );

    let client = PlatformClient::new(&HttpClientConfig::from_env()).map_err(|e| {
        error!("업스트림 클라이언트 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let identities = Arc::new(IdentityCache::new());
    let codec = StateCodec::new(OAuthConfig::state_secret());

    let bridge = OAuthBridgeService::new(
        client.clone(),
        identities.clone(),
        codec,
        platform.clone(),
    );
    let proxy = BizProxyService::new(client, identities, platform);

    Ok((web::Data::new(bridge), web::Data::new(proxy)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 요청 덤프, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    bridge: web::Data<OAuthBridgeService>,
    proxy: web::Data<BizProxyService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let debug = DebugConfig::is_debug_mode();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 OpenAPI: http://{}/openapi.yaml", bind_address);
    if debug {
        info!("🐞 DEBUG 모드: 요청 덤프 활성화");
    }

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(bridge.clone())
            .app_data(proxy.clone())
            .wrap(RequestDump::new(debug))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=platform_oauth_gateway::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 브라우저 기반 도구가 OpenAPI 문서와 API를 직접 호출할 수 있도록
/// 모든 Origin을 허용합니다. 자격 증명은 Bearer 헤더로만 전달되므로 쿠키는 지원하지 않습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
