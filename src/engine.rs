use crate::config::RunConfig;
use crate::model::{Credential, TrialError, TrialResult};
use crate::session::SessionChannel;
use tokio::sync::mpsc;

/// Drives a full probing run: shards the candidate list across a fixed pool
/// of workers, each owning one connection, and collects every outcome.
pub struct TrialEngine {
    config: RunConfig,
}

impl TrialEngine {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Try every credential and return one result per candidate.
    ///
    /// The returned set is complete even when connections fail: a worker that
    /// never gets a channel open reports every credential in its shard as a
    /// connect failure instead of dropping them. Results arrive in completion
    /// order, which carries no relation to submission order across workers.
    pub async fn run(&self, credentials: Vec<Credential>) -> Vec<TrialResult> {
        let total = credentials.len();
        let shards = partition(credentials, self.config.workers);

        // Workers push results through cloned senders; a single collector
        // loop below is the only writer of the final set.
        let (tx, mut rx) = mpsc::channel::<TrialResult>(total.max(1));

        for shard in shards {
            if shard.is_empty() {
                continue;
            }
            let tx = tx.clone();
            let host = self.config.host.clone();
            let port = self.config.port;
            let verbose = self.config.verbose;

            tokio::spawn(async move {
                run_worker(shard, &host, port, verbose, tx).await;
            });
        }

        // Close the original sender so the collector sees the end of input
        drop(tx);

        use std::io::Write;
        let mut results = Vec::with_capacity(total);
        while let Some(result) = rx.recv().await {
            results.push(result);
            print!("\rProgress: {}/{} attempts", results.len(), total);
            std::io::stdout().flush().ok();
        }
        println!();

        results
    }
}

/// Round-robin split of the candidate list into `workers` shards.
/// Every credential lands in exactly one shard; trailing shards may be empty
/// when there are fewer credentials than workers.
fn partition(credentials: Vec<Credential>, workers: usize) -> Vec<Vec<Credential>> {
    let workers = workers.max(1);
    let mut shards: Vec<Vec<Credential>> = (0..workers).map(|_| Vec::new()).collect();
    for (index, credential) in credentials.into_iter().enumerate() {
        shards[index % workers].push(credential);
    }
    shards
}

/// Process one shard serially on a single lazily-opened channel.
///
/// The channel is built on the first credential and reused for every later
/// one: one TCP handshake per worker, not per candidate. A failed open poisons
/// the whole shard with `Connect`; a transport error mid-exchange drops the
/// channel and poisons the remainder with the same `Io` error, since the
/// stream's state is no longer trustworthy.
async fn run_worker(
    shard: Vec<Credential>,
    host: &str,
    port: u16,
    verbose: bool,
    tx: mpsc::Sender<TrialResult>,
) {
    let mut link: Option<Result<SessionChannel, TrialError>> = None;

    for credential in shard {
        let state = match link.as_mut() {
            Some(state) => state,
            None => {
                let opened = SessionChannel::open(host, port, verbose)
                    .await
                    .map_err(|e| TrialError::Connect(e.to_string()));
                link.insert(opened)
            }
        };

        let (result, poison) = match state {
            Ok(session) => match session.attempt(&credential).await {
                Ok(response) => (TrialResult::completed(credential, response), None),
                Err(e) => {
                    let error = TrialError::Io(e.to_string());
                    (TrialResult::failed(credential, error.clone()), Some(error))
                }
            },
            Err(error) => (TrialResult::failed(credential, error.clone()), None),
        };

        if let Some(error) = poison {
            link = Some(Err(error));
        }
        if tx.send(result).await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;

    async fn spawn_echo_service() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let (read_half, mut write_half) = stream.into_split();
                    let _ = write_half.write_all(b"login:\n").await;
                    let mut lines = BufReader::new(read_half).lines();
                    loop {
                        let Ok(Some(_user)) = lines.next_line().await else {
                            break;
                        };
                        let _ = write_half.write_all(b"password:\n").await;
                        let Ok(Some(pass)) = lines.next_line().await else {
                            break;
                        };
                        let reply = format!("tried[{}]\n", pass);
                        let _ = write_half.write_all(reply.as_bytes()).await;
                    }
                });
            }
        });
        addr
    }

    #[test]
    fn partition_assigns_every_credential_exactly_once() {
        let credentials: Vec<Credential> = (0..7)
            .map(|i| Credential::new(format!("user{}", i), "pw"))
            .collect();
        let shards = partition(credentials.clone(), 3);

        assert_eq!(shards.len(), 3);
        let flattened: Vec<Credential> = shards.into_iter().flatten().collect();
        assert_eq!(flattened.len(), credentials.len());
        for credential in &credentials {
            assert_eq!(flattened.iter().filter(|c| *c == credential).count(), 1);
        }
    }

    #[test]
    fn partition_with_fewer_credentials_than_workers_leaves_empty_shards() {
        let credentials = vec![Credential::new("a", "1"), Credential::new("b", "2")];
        let shards = partition(credentials, 5);
        assert_eq!(shards.iter().filter(|s| !s.is_empty()).count(), 2);
        assert_eq!(shards.iter().map(Vec::len).sum::<usize>(), 2);
    }

    #[tokio::test]
    async fn failing_worker_does_not_disturb_a_healthy_one() {
        let addr = spawn_echo_service().await;

        // A bound-then-dropped listener leaves a port nothing accepts on
        let dead = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_port = dead.local_addr().unwrap().port();
        drop(dead);

        let healthy_shard = vec![
            Credential::new("root", "abc123"),
            Credential::new("root", "letmein"),
        ];
        let dead_shard = vec![
            Credential::new("admin", "admin"),
            Credential::new("admin", "toor"),
        ];

        let (tx, mut rx) = mpsc::channel(8);
        let healthy = tokio::spawn({
            let tx = tx.clone();
            let host = addr.ip().to_string();
            async move { run_worker(healthy_shard, &host, addr.port(), false, tx).await }
        });
        let failing = tokio::spawn(async move {
            run_worker(dead_shard, "127.0.0.1", dead_port, false, tx).await
        });
        healthy.await.unwrap();
        failing.await.unwrap();

        let mut results = Vec::new();
        while let Some(result) = rx.recv().await {
            results.push(result);
        }

        assert_eq!(results.len(), 4);
        for result in &results {
            if result.credential.username == "admin" {
                assert!(matches!(result.error, Some(TrialError::Connect(_))));
            } else {
                assert!(result.error.is_none());
                assert_eq!(
                    result.response,
                    format!("tried[{}]", result.credential.password)
                );
            }
        }
    }
}
