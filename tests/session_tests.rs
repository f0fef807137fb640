use credprobe::model::Credential;
use credprobe::session::SessionChannel;
use test_utils::{refused_port, spawn_login_service};


#[tokio::test]
async fn attempt_returns_the_final_response_only() {
    let addr = spawn_login_service("Welcome to testsvc\n", "USER-OK\n", |_| {
        "PASS-OK\n".to_string()
    })
    .await;

    let mut channel = SessionChannel::open(&addr.ip().to_string(), addr.port(), false)
        .await
        .unwrap();
    let response = channel
        .attempt(&Credential::new("admin", "hunter2"))
        .await
        .unwrap();

    // Banner and post-username reply are consumed, not reported
    assert_eq!(response, "PASS-OK");
}

#[tokio::test]
async fn multi_line_responses_are_flattened_to_tabs() {
    let addr = spawn_login_service("banner\n", "Password:\n", |_| {
        "Welcome!\nLast login: yesterday\n".to_string()
    })
    .await;

    let mut channel = SessionChannel::open(&addr.ip().to_string(), addr.port(), false)
        .await
        .unwrap();
    let response = channel
        .attempt(&Credential::new("root", "toor"))
        .await
        .unwrap();

    assert_eq!(response, "Welcome!\tLast login: yesterday");
}

#[tokio::test]
async fn one_channel_serves_consecutive_exchanges() {
    let addr = spawn_login_service("banner\n", "Password:\n", |pass| {
        format!("tried[{}]\n", pass)
    })
    .await;

    let mut channel = SessionChannel::open(&addr.ip().to_string(), addr.port(), false)
        .await
        .unwrap();

    let first = channel
        .attempt(&Credential::new("root", "abc123"))
        .await
        .unwrap();
    let second = channel
        .attempt(&Credential::new("root", "letmein"))
        .await
        .unwrap();

    assert_eq!(first, "tried[abc123]");
    assert_eq!(second, "tried[letmein]");
}

#[tokio::test]
async fn open_fails_when_nothing_listens() {
    let port = refused_port().await;
    let result = SessionChannel::open("127.0.0.1", port, false).await;
    assert!(result.is_err());
}
