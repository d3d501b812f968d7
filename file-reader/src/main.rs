//! 이 예제는 텍스트 파일 하나를 동기적으로 읽어 stdout 에 출력한 뒤,
//! 별개의 파일 하나를 비동기로 삭제하고 그 결과를 로그로 남기는 프로그램입니다.
//!
//! 읽기 실패는 치명적(0 이 아닌 종료 코드), 삭제 실패는 로그만 남기고 계속 진행됩니다.
//!
//! 실행 방법:
//!
//! ```not_rust
//! cargo run -p file-reader
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// 기본 경로 리터럴 (환경변수 MESSAGE_FILE / DELETE_TARGET 으로 변경 가능)
const MESSAGE_FILE: &str = "message.txt";
const DELETE_TARGET: &str = "newNotes.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 로그 시스템 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 경로 설정: 환경변수가 없으면 기본 리터럴 사용
    let message_file =
        PathBuf::from(std::env::var("MESSAGE_FILE").unwrap_or_else(|_| MESSAGE_FILE.to_string()));
    let delete_target = PathBuf::from(
        std::env::var("DELETE_TARGET").unwrap_or_else(|_| DELETE_TARGET.to_string()),
    );

    // 1. 동기 읽기
    // 실패하면 ? 연산자로 에러를 전파하고, 내용 출력 없이 0 이 아닌 코드로 종료됨
    let text = read_message(&message_file)?;

    // 2. 파일 내용을 그대로 출력 (println! 이 마지막 개행을 붙임)
    println!("{text}");

    // 3. 읽기가 끝난 뒤 비동기 삭제를 제출 (fire-and-forget)
    // 완료 결과는 JoinHandle 을 통해 돌아오고, 성공/실패 모두 로그로 남음
    let removal = tokio::spawn(remove_notes(delete_target));

    // 삭제 완료 로그가 남기 전에 프로세스가 끝나지 않도록 핸들을 기다림
    removal.await?;

    Ok(())
}

// 파일 전체를 UTF-8 텍스트로 읽는 동기 호출
fn read_message(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

// 삭제를 수행하고 결과를 로그로 남기는 비동기 작업
// 대상이 없어도 치명적이지 않으므로 에러를 전파하지 않음
async fn remove_notes(path: PathBuf) {
    let result = tokio::fs::remove_file(&path).await;
    log_removal(&path, &result);
}

// 성공이든 실패든 무조건 한 줄씩 남김
fn log_removal(path: &Path, result: &std::io::Result<()>) {
    match result {
        Ok(()) => tracing::info!("removed {}, no error", path.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!("nothing to remove at {}: {}", path.display(), err);
        }
        Err(err) => tracing::warn!("failed to remove {}: {}", path.display(), err),
    }
}

/// --- 🧪 테스트 모듈
