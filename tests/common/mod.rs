//! Shared utilities for integration tests.

use std::net::SocketAddr;

use answer_api::{HttpServer, ServiceConfig, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with `config` on 127.0.0.1:0.
pub async fn start_server(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let shutdown_rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, shutdown_rx).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that neither pools connections nor follows redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
