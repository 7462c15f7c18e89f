//! Line-oriented wire protocol.
//!
//! Every server message that expects input ends with [`PROMPT`]. Input is
//! one UTF-8 line per message; invalid bytes are replaced and lines longer
//! than the configured limit are cut, with the excess discarded.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Prompt marker sent after the welcome banner and every reply.
pub const PROMPT: &str = "> ";

pub fn welcome(assistant_name: &str, session_id: &str) -> String {
    format!(
        "Bienvenido a {}👋\nTu session_id es: {}\nEscribí tu pregunta de economía o 'salir' para desconectarte.\n\n{}",
        assistant_name, session_id, PROMPT
    )
}

/// Reply framing: leading newline, assistant prefix, trailing prompt.
pub fn reply(assistant_name: &str, answer: &str) -> String {
    format!("\n{}: {}\n\n{}", assistant_name, answer, PROMPT)
}

pub fn goodbye(assistant_name: &str) -> String {
    format!("👋 Cerrando sesión. Gracias por usar {}.\n", assistant_name)
}

pub fn error_notice(detail: &str) -> String {
    format!("\n[ERROR] {}\n", detail)
}

/// Result of one line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    Line(String),
    /// Peer closed the connection.
    Eof,
}

/// Read one line of at most `max_bytes` bytes, newline excluded.
pub async fn read_line<R>(reader: &mut R, max_bytes: usize) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = (&mut *reader)
        .take(max_bytes as u64)
        .read_until(b'\n', &mut buf)
        .await?;
    if n == 0 {
        return Ok(LineRead::Eof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    } else if buf.len() >= max_bytes {
        discard_rest_of_line(reader).await?;
    }

    Ok(LineRead::Line(String::from_utf8_lossy(&buf).into_owned()))
}

async fn discard_rest_of_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|b| *b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}
