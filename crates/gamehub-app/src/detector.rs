//! Line-oriented TCP front for the posture detector.
//!
//! Each line `bad` fires the trigger port and is answered with
//! `ok <outcome>`; anything else gets `err <reason>`. A line longer than
//! [`MAX_LINE`] bytes closes the connection.

use std::net::SocketAddr;

use gamehub_launcher::TriggerPort;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const MAX_LINE: usize = 256;

pub async fn serve(listener: TcpListener, trigger: TriggerPort, stop: CancellationToken) {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "posture detector adapter listening");
    }
    loop {
        tokio::select! {
            _ = stop.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let trigger = trigger.clone();
                    let stop = stop.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            _ = stop.cancelled() => {}
                            r = handle_connection(stream, peer, trigger) => {
                                if let Err(e) = r {
                                    debug!(%peer, error = %e, "detector connection ended");
                                }
                            }
                        }
                    });
                }
                Err(e) => warn!(error = %e, "detector accept failed"),
            },
        }
    }
    debug!("posture detector adapter stopped");
}

async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    trigger: TriggerPort,
) -> std::io::Result<()> {
    debug!(%peer, "detector connected");
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);
    let mut buf = Vec::with_capacity(64);
    loop {
        buf.clear();
        let limit = MAX_LINE as u64 + 1;
        if (&mut reader).take(limit).read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        if buf.len() > MAX_LINE && !buf.ends_with(b"\n") {
            warn!(%peer, "detector line too long, closing");
            write.write_all(b"err line too long\n").await?;
            break;
        }
        let reply = respond(&String::from_utf8_lossy(&buf), &trigger);
        write.write_all(reply.as_bytes()).await?;
        write.write_all(b"\n").await?;
    }
    debug!(%peer, "detector disconnected");
    Ok(())
}

fn respond(line: &str, trigger: &TriggerPort) -> String {
    let line = line.trim();
    if line.eq_ignore_ascii_case("bad") {
        let outcome = trigger.fire();
        info!(%outcome, "detector reported bad posture");
        format!("ok {outcome}")
    } else if line.is_empty() {
        "err empty".to_string()
    } else {
        format!("err unknown report {line:?}")
    }
}
