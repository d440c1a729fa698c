use quizz::server::Server;
use quizz::store::fs::FileStore;
use quizz::store::QuizStore;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn converse(addr: std::net::SocketAddr, script: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(script.as_bytes()).await.unwrap();
    let mut transcript = String::new();
    stream.read_to_string(&mut transcript).await.unwrap();
    transcript
}

#[tokio::test]
async fn peer_plays_against_the_file_store() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("quizzes.json")));
    store.create("2+2".into(), "4".into()).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = Server::new(listener, Arc::clone(&store)).with_authors(vec!["Ada".into()]);
    let addr = server.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async {
        let _ = stop_rx.await;
    }));

    let transcript = converse(addr, "play\n 4 \ncredits\nquit\n").await;
    assert!(transcript.contains("Welcome to quizz."));
    assert!(transcript.contains(" CORRECT - 1 hits so far."));
    assert!(transcript.contains("Nothing left to ask. Game over. Hits: 1"));
    assert!(transcript.contains("Ada"));

    let transcript = converse(addr, "edit 1\n3+3\n6\nshow 1\nq\n").await;
    assert!(transcript.contains("Changed quiz 1 to: 3+3 => 6"));
    assert!(transcript.contains("[1]: 3+3 => 6"));

    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.answer, "6");

    let _ = stop_tx.send(());
    handle.await.unwrap();
}

#[tokio::test]
async fn dropped_connection_leaves_the_server_running() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("quizzes.json")));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = Server::new(listener, store);
    let addr = server.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async {
        let _ = stop_rx.await;
    }));

    // Hang up halfway through `add`.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"add\nhalf a question\n").await.unwrap();
    stream.shutdown().await.unwrap();
    let mut transcript = String::new();
    stream.read_to_string(&mut transcript).await.unwrap();
    assert!(!transcript.contains("Invalid quiz"));

    let transcript = converse(addr, "list\nquit\n").await;
    assert!(transcript.contains("No quizzes found."));

    let _ = stop_tx.send(());
    handle.await.unwrap();
}
