use crate::constants::{NEWLINE_SEPARATOR, RECV_BUFFER_SIZE, SETTLE_DELAY_MS};
use crate::model::Credential;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::sleep;

/// One live connection to the target service, exclusively owned by a single
/// worker for its whole lifetime. `&mut self` on every operation keeps the
/// exchange strictly serial per channel.
pub struct SessionChannel {
    stream: TcpStream,
    verbose: bool,
}

impl SessionChannel {
    /// Connect to `host:port` and consume the greeting banner the service
    /// prints on accept (up to one receive-buffer's worth).
    pub async fn open(host: &str, port: u16, verbose: bool) -> io::Result<Self> {
        println!("Connecting to {} on port {}", host, port);
        let stream = TcpStream::connect((host, port)).await?;

        let mut channel = Self { stream, verbose };
        let banner = channel.read_chunk().await?;
        if channel.verbose {
            println!("{}", banner);
        }
        Ok(channel)
    }

    /// Drive the fixed two-step login exchange for one credential.
    ///
    /// Writes the username, waits the settle delay for the remote to produce
    /// its password prompt, discards that intermediate response, then writes
    /// the password and reads the remote's verdict. No prompt parsing is
    /// attempted; the settle delay stands in for it. The returned text is the
    /// final response only, flattened onto a single line.
    ///
    /// Errs only when the transport itself fails; an unconvincing reply from
    /// the remote is still a completed exchange.
    pub async fn attempt(&mut self, credential: &Credential) -> io::Result<String> {
        if self.verbose {
            println!(
                "Attempting login {}:{}",
                credential.username, credential.password
            );
        }

        self.send_line(&credential.username).await?;
        sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
        let prompt = self.read_chunk().await?;
        if self.verbose {
            println!("{}", prompt);
        }

        self.send_line(&credential.password).await?;
        sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
        let response = self.read_chunk().await?;

        Ok(flatten_response(&response))
    }

    async fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.stream.write_all(line.as_bytes()).await?;
        self.stream.write_all(b"\n").await
    }

    async fn read_chunk(&mut self) -> io::Result<String> {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await?;
        Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
    }
}

/// Strip the trailing line ending and replace embedded ones, so the response
/// survives as one field of a single CSV row
fn flatten_response(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n'])
        .replace("\r\n", NEWLINE_SEPARATOR)
        .replace(['\r', '\n'], NEWLINE_SEPARATOR)
}
