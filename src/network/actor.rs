//! Network actor - runs user fetches in the Tokio async runtime

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{execute_fetch, UserSource};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    source: Arc<dyn UserSource>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        source: Arc<dyn UserSource>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            source,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id }) => {
                            let response_tx = self.response_tx.clone();
                            let source = Arc::clone(&self.source);

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching users");
                                let result = execute_fetch(source.as_ref(), id).await;
                                if let NetworkResponse::Users { users, time_ms, .. } = &result {
                                    tracing::info!(id, count = users.len(), time_ms, "Users fetched");
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::fixtures::three_users;
    use crate::models::User;
    use async_trait::async_trait;

    struct Canned(Result<Vec<User>, FetchError>);

    #[async_trait]
    impl UserSource for Canned {
        async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
            self.0.clone()
        }
    }

    fn spawn_actor(
        result: Result<Vec<User>, FetchError>,
    ) -> (
        mpsc::UnboundedSender<NetworkCommand>,
        mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(Arc::new(Canned(result)), resp_tx);
        tokio::spawn(actor.run(cmd_rx));
        (cmd_tx, resp_rx)
    }

    #[tokio::test]
    async fn test_fetch_command_yields_users() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Ok(three_users()));
        cmd_tx.send(NetworkCommand::FetchUsers { id: 4 }).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Users { id, users, .. } => {
                assert_eq!(id, 4);
                assert_eq!(users, three_users());
            }
            other => panic!("expected users, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_command_yields_error() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Err(FetchError::Http { status: 500 }));
        cmd_tx.send(NetworkCommand::FetchUsers { id: 1 }).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Error { id, message, .. } => {
                assert_eq!(id, 1);
                assert_eq!(message, "HTTP error! status: 500");
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shutdown_stops_actor() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Ok(Vec::new()));
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        // Actor dropped its sender, so the channel closes
        assert!(resp_rx.recv().await.is_none());
    }
}
