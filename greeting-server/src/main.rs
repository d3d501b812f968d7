//! 이 예제는 모든 요청에 같은 인사말을 돌려주는 단일 응답 HTTP 서버입니다.
//! 라우팅 테이블 없이 fallback 핸들러 하나가 메서드/경로와 무관하게 모든 요청을 처리합니다.
//!
//! 실행 방법:
//!
//! ```not_rust
//! cargo run -p greeting-server
//! ```

use axum::{response::IntoResponse, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer; // TraceLayer: 요청 로그 추적용 미들웨어.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// 기본 포트 (환경변수 PORT 로 변경 가능)
const DEFAULT_PORT: &str = "3000";

// 모든 요청에 돌려주는 고정 응답 본문
const GREETING: &str = "Hi from the server ....";

/// --- 🔧 main()

#[tokio::main]
async fn main() {
    // 로그 시스템 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 포트 설정: 환경변수 PORT 가 없으면 3000 사용
    let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

    // TCP 리스너 바인딩
    let listener = TcpListener::bind(format!("127.0.0.1:{port}"))
        .await
        .unwrap();

    // 바인딩 성공 직후, 포트가 포함된 시작 로그를 한 줄 출력
    tracing::info!("listening on {}", listener.local_addr().unwrap());

    // Graceful shutdown 설정과 함께 서버 실행
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Having a function that produces our app makes it easy to call it from tests
/// without having to create an HTTP server.
fn app() -> Router {
    // 라우트 없음: fallback 하나가 모든 요청을 받음 (요청 내용은 전혀 검사하지 않음)
    Router::new()
        .fallback(greet)
        // 요청 추적용 미들웨어 적용
        .layer(TraceLayer::new_for_http())
}

// 어떤 요청이든 고정 문자열을 200 OK 로 돌려주는 핸들러
// 상태를 전혀 갖지 않으므로 요청마다 결과가 동일함
async fn greet() -> impl IntoResponse {
    GREETING
}

/// --- 🧠 종료 신호 처리

// 종료 신호를 대기하는 async 함수 (Ctrl+C 또는 SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // 둘 중 먼저 오는 시그널을 기다림
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// --- 🧪 테스트 모듈
