//! Minimal line client for talking to a running server from a terminal.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Connect to `address` and bridge the terminal to the socket until either
/// side closes.
pub async fn connect(address: &str) -> io::Result<()> {
    let stream = TcpStream::connect(address).await?;
    debug!("Connected to {}", address);
    let stdin = io::BufReader::new(io::stdin());
    bridge(stream, stdin, io::stdout()).await
}

/// Copy server output to `output` and each line of `input` to the server.
///
/// Returns once the server closes the connection. End of `input` half-closes
/// the socket and waits for the server to finish.
pub async fn bridge<S, I, O>(stream: S, input: I, mut output: O) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let (mut from_server, mut to_server) = io::split(stream);
    let mut lines = input.lines();
    let mut input_open = true;

    {
        let copy = io::copy(&mut from_server, &mut output);
        tokio::pin!(copy);

        loop {
            tokio::select! {
                copied = &mut copy => {
                    copied?;
                    break;
                }
                line = lines.next_line(), if input_open => match line? {
                    Some(line) => {
                        to_server.write_all(line.as_bytes()).await?;
                        to_server.write_all(b"\n").await?;
                        to_server.flush().await?;
                    }
                    None => {
                        input_open = false;
                        to_server.shutdown().await?;
                    }
                },
            }
        }
    }

    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_bridge_forwards_lines_and_stops_on_server_close() {
        let (client_side, mut server_side) = io::duplex(4096);

        let server = tokio::spawn(async move {
            server_side.write_all(b"Bienvenido\n> ").await.unwrap();
            let mut buf = vec![0u8; 64];
            let mut received = Vec::new();
            while !received.ends_with(b"salir\n") {
                let n = server_side.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
            }
            server_side.write_all(b"chau\n").await.unwrap();
            String::from_utf8(received).unwrap()
        });

        let mut output = Vec::new();
        bridge(client_side, &b"hola\nsalir\n"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(server.await.unwrap(), "hola\nsalir\n");
        assert_eq!(String::from_utf8(output).unwrap(), "Bienvenido\n> chau\n");
    }
}
