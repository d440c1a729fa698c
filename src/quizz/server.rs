use crate::io::stream::StreamConsole;
use crate::session::Session;
use crate::store::QuizStore;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};
use tokio::select;
use tracing::{info, warn};

/// Accepts TCP peers and runs one session per connection over a shared store.
pub struct Server<S: ?Sized> {
    listener: TcpListener,
    store: Arc<S>,
    authors: Vec<String>,
    color: bool,
}

impl<S: QuizStore + ?Sized + 'static> Server<S> {
    pub fn new(listener: TcpListener, store: Arc<S>) -> Self {
        Self {
            listener,
            store,
            authors: Vec::new(),
            color: false,
        }
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()> + Send,
    {
        tokio::pin!(shutdown);

        loop {
            select! {
                _ = &mut shutdown => {
                    info!("server shutting down");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => self.spawn_session(stream, peer),
                        Err(err) => warn!(error = ?err, "failed to accept connection"),
                    }
                }
            }
        }
    }

    pub async fn run_until_ctrl_c(self) {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }

    fn spawn_session(&self, stream: TcpStream, peer: SocketAddr) {
        info!(peer = %peer, "peer connected");
        let (reader, writer) = stream.into_split();
        let console = StreamConsole::new(BufReader::new(reader), writer).with_color(self.color);
        let session =
            Session::new(Arc::clone(&self.store), console).with_authors(self.authors.clone());

        tokio::spawn(async move {
            session.run().await;
            info!(peer = %peer, "peer disconnected");
        });
    }
}
