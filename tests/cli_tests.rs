//! Command-line flow tests
mod common;

use clap::Parser;
use common::{get_test_client, project_json};
use serde_json::json;
use std::io::Cursor;
use todoist_export::cli::{Args, build_request};
use todoist_export::prompt::Prompter;
use todoist_export::{CompletedWindow, Config, ExportRequest, Exporter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn get_test_exporter(server: &MockServer) -> Exporter {
    Mock::given(method("GET"))
        .and(path("/rest/v2/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            project_json("123", "Work"),
            project_json("456", "Homework"),
            project_json("789", "Garden")
        ])))
        .mount(server)
        .await;
    Exporter::connect(get_test_client(server)).await.unwrap()
}

/// Run the question flow with `input` as stdin; returns the request and everything printed
fn run_flow(
    argv: &[&str],
    config: &Config,
    exporter: &Exporter,
    input: &str,
) -> (ExportRequest, String) {
    let args = Args::try_parse_from(argv).unwrap();
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::<u8>::new());
    let request = build_request(&args, config, exporter, &mut prompter).unwrap();
    let transcript = String::from_utf8(prompter.into_output()).unwrap();
    (request, transcript)
}

// --project-id指定時は一切質問しないことを確認
#[tokio::test]
async fn test_project_id_flag_is_non_interactive() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (request, transcript) = run_flow(
        &["todoist-export", "--project-id", "123"],
        &Config::default(),
        &exporter,
        "",
    );

    assert_eq!(request, ExportRequest::active_only("123"));
    assert_eq!(transcript, "");
}

// --completed付きでは完了タスクを含めたリクエストになることを確認
#[tokio::test]
async fn test_project_id_with_completed_flag() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let mut config = Config::default();
    let args = Args::try_parse_from([
        "todoist-export",
        "--project-id",
        "123",
        "--completed",
        "--since",
        "2021-4-29T10:13:00",
    ])
    .unwrap();
    args.apply_to(&mut config);

    let mut prompter = Prompter::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
    let request = build_request(&args, &config, &exporter, &mut prompter).unwrap();

    let window = CompletedWindow::parse(Some("2021-4-29T10:13:00"), None).unwrap();
    assert_eq!(request, ExportRequest::with_completed("123", window));
    assert!(prompter.into_output().is_empty());
}

// 対話モードで検索してから完了タスクを含めるまでの質問順と文言を確認
#[tokio::test]
async fn test_interactive_search_then_export() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (request, transcript) = run_flow(
        &["todoist-export"],
        &Config::default(),
        &exporter,
        "y\nwor\n123\ny\n",
    );

    assert_eq!(
        request,
        ExportRequest::with_completed("123", CompletedWindow::default())
    );
    assert_eq!(
        transcript,
        "Do you need to search for project id? [y/n] \
         Enter project name: \
         These are the project ids found matching the name:\n\
         123: Work\n\
         456: Homework\n\
         ---\n\
         Enter project id to export: \
         Do you want to export completed tasks? [y/n] "
    );
}

// 検索しない場合は検索関連の質問が出ないことを確認
#[tokio::test]
async fn test_interactive_without_search() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (request, transcript) = run_flow(&["todoist-export"], &Config::default(), &exporter, "n\n789\nn\n");

    assert_eq!(request, ExportRequest::active_only("789"));
    assert_eq!(
        transcript,
        "Do you need to search for project id? [y/n] \
         Enter project id to export: \
         Do you want to export completed tasks? [y/n] "
    );
}

// --completed指定時は完了タスクの質問を省略することを確認
#[tokio::test]
async fn test_completed_flag_skips_completed_question() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (request, transcript) = run_flow(
        &["todoist-export", "--completed"],
        &Config::default(),
        &exporter,
        "n\n456\n",
    );

    assert_eq!(
        request,
        ExportRequest::with_completed("456", CompletedWindow::default())
    );
    assert_eq!(
        transcript,
        "Do you need to search for project id? [y/n] Enter project id to export: "
    );
}

// --searchは一致したプロジェクトを「id: name」形式で出力することを確認
#[tokio::test]
async fn test_search_flag_prints_matches() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (request, transcript) = run_flow(
        &["todoist-export", "--search", "GARD", "--project-id", "789"],
        &Config::default(),
        &exporter,
        "",
    );

    assert_eq!(request, ExportRequest::active_only("789"));
    assert_eq!(
        transcript,
        "These are the project ids found matching the name:\n789: Garden\n---\n"
    );
}

// 一致するプロジェクトがない場合のメッセージを確認
#[tokio::test]
async fn test_search_without_matches() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let (_, transcript) = run_flow(
        &["todoist-export", "--search", "a.b", "--project-id", "1"],
        &Config::default(),
        &exporter,
        "",
    );

    assert_eq!(transcript, "No projects found matching 'a.b'\n---\n");
}

// 入力が途中で終わった場合はエラーになることを確認
#[tokio::test]
async fn test_closed_input_is_an_error() {
    let server = MockServer::start().await;
    let exporter = get_test_exporter(&server).await;

    let args = Args::try_parse_from(["todoist-export"]).unwrap();
    let mut prompter = Prompter::new(Cursor::new(b"n\n".to_vec()), Vec::<u8>::new());
    assert!(build_request(&args, &Config::default(), &exporter, &mut prompter).is_err());
}
