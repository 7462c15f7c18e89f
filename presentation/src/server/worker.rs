//! Session worker: owns one client connection from accept to close.
//!
//! State flow: `Handshake` → `Active` → `Closing` → `Closed`.
//!
//! - **Handshake**: register the session and send the welcome banner
//! - **Active**: read a line, dispatch it, write the reply, repeat
//! - **Closing**: shut the connection down and release shared state
//!
//! A cancelled session token (admin kill, server shutdown) moves the worker
//! to `Closing` from any wait point, writes included, so a client that never
//! reads cannot pin the worker. A panic while answering one message is
//! reported to the client and the session keeps going.

use super::context::ServerContext;
use super::protocol::{self, LineRead};
use ecobot_application::{ConversationEvent, DispatchInput, Registration};
use ecobot_domain::util::preview;
use ecobot_domain::{PromptTemplate, is_exit_keyword};
use futures::FutureExt;
use serde_json::json;
use std::any::Any;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::io::{self, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf};
use tracing::{debug, info, warn};

/// Upper bound on the graceful write shutdown during close.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Lifecycle of a session worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Handshake,
    Active,
    Closing,
    Closed,
}

/// Why the active loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseReason {
    ClientExit,
    PeerClosed,
    Killed,
    IdleTimeout,
    IoError,
}

impl CloseReason {
    fn as_str(&self) -> &'static str {
        match self {
            CloseReason::ClientExit => "client_exit",
            CloseReason::PeerClosed => "peer_closed",
            CloseReason::Killed => "killed",
            CloseReason::IdleTimeout => "idle_timeout",
            CloseReason::IoError => "io_error",
        }
    }
}

/// One worker per accepted connection.
pub struct SessionWorker<S> {
    ctx: ServerContext,
    peer: SocketAddr,
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    state: WorkerState,
}

impl<S> SessionWorker<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    pub fn new(ctx: ServerContext, stream: S, peer: SocketAddr) -> Self {
        let (read_half, writer) = io::split(stream);
        Self {
            ctx,
            peer,
            reader: BufReader::new(read_half),
            writer,
            state: WorkerState::Handshake,
        }
    }

    /// Drive the session to completion. Never panics on client input; all
    /// failures end in `Closed` with shared state released.
    pub async fn run(mut self) -> WorkerState {
        let registration = self.ctx.registry.register(self.peer);
        info!(
            "[Sesión {}] Nueva conexión desde {} (sid={})",
            registration.sequence, self.peer, registration.id
        );
        self.ctx.conversation_logger.log(ConversationEvent::new(
            "session_open",
            json!({
                "session": registration.id.as_str(),
                "sequence": registration.sequence,
                "peer": self.peer.to_string(),
            }),
        ));

        let reason = match self.handshake(&registration).await {
            Ok(()) => {
                self.state = WorkerState::Active;
                self.serve(&registration).await
            }
            Err(_) if registration.cancel.is_cancelled() => CloseReason::Killed,
            Err(e) => {
                warn!(session = %registration.id, "Welcome failed: {}", e);
                CloseReason::IoError
            }
        };

        self.state = WorkerState::Closing;
        self.close(&registration, reason).await;
        self.state = WorkerState::Closed;
        self.state
    }

    async fn handshake(&mut self, registration: &Registration) -> io::Result<()> {
        let banner = protocol::welcome(&self.ctx.params.assistant_name, registration.id.as_str());
        self.send(registration, &banner).await
    }

    async fn serve(&mut self, registration: &Registration) -> CloseReason {
        loop {
            let line = tokio::select! {
                _ = registration.cancel.cancelled() => return CloseReason::Killed,
                read = self.next_line() => read,
            };

            let text = match line {
                Ok(Some(LineRead::Line(text))) => text,
                Ok(Some(LineRead::Eof)) => return CloseReason::PeerClosed,
                Ok(None) => {
                    // idle timeout
                    let bye = protocol::goodbye(&self.ctx.params.assistant_name);
                    let _ = self.send(registration, &bye).await;
                    return CloseReason::IdleTimeout;
                }
                Err(e) => return self.fail(registration, e).await,
            };

            let question = text.trim();
            if question.is_empty() {
                if let Err(e) = self.send(registration, protocol::PROMPT).await {
                    return self.fail(registration, e).await;
                }
                continue;
            }

            if is_exit_keyword(question) {
                let bye = protocol::goodbye(&self.ctx.params.assistant_name);
                let _ = self.send(registration, &bye).await;
                return CloseReason::ClientExit;
            }

            // A kill drops the in-flight dispatch; its reply is never written.
            let answer = tokio::select! {
                _ = registration.cancel.cancelled() => return CloseReason::Killed,
                answer = self.answer(registration, question) => answer,
            };

            self.ctx.histories.append(
                &registration.id,
                registration.sequence,
                question,
                &answer,
            );
            self.ctx.registry.touch(&registration.id);

            let framed = protocol::reply(&self.ctx.params.assistant_name, &answer);
            if let Err(e) = self.send(registration, &framed).await {
                return self.fail(registration, e).await;
            }
        }
    }

    /// `Ok(None)` means the idle timeout elapsed.
    async fn next_line(&mut self) -> io::Result<Option<LineRead>> {
        let max = self.ctx.params.max_line_bytes;
        match self.ctx.params.idle_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, protocol::read_line(&mut self.reader, max)).await
                {
                    Ok(read) => read.map(Some),
                    Err(_) => Ok(None),
                }
            }
            None => protocol::read_line(&mut self.reader, max).await.map(Some),
        }
    }

    async fn answer(&self, registration: &Registration, question: &str) -> String {
        let id = &registration.id;
        debug!(session = %id, "Question: {}", preview(question, 80));
        let history = self.ctx.histories.get(id, registration.sequence);
        let input = DispatchInput::new(id.clone(), question, history);
        let dispatch = self.ctx.dispatcher.execute(input);

        match AssertUnwindSafe(dispatch).catch_unwind().await {
            Ok(outcome) => outcome.reply,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                warn!(session = %id, "Dispatch panicked: {}", detail);
                PromptTemplate::internal_error(&detail)
            }
        }
    }

    async fn fail(&mut self, registration: &Registration, error: io::Error) -> CloseReason {
        if registration.cancel.is_cancelled() {
            return CloseReason::Killed;
        }
        warn!(session = %registration.id, "Connection error: {}", error);
        let notice = protocol::error_notice(&error.to_string());
        let _ = self.send(registration, &notice).await;
        CloseReason::IoError
    }

    /// Write and flush, giving up as soon as the session is cancelled.
    async fn send(&mut self, registration: &Registration, text: &str) -> io::Result<()> {
        let writer = &mut self.writer;
        tokio::select! {
            _ = registration.cancel.cancelled() => Err(io::Error::new(
                io::ErrorKind::ConnectionAborted,
                "session terminated",
            )),
            written = async {
                writer.write_all(text.as_bytes()).await?;
                writer.flush().await
            } => written,
        }
    }

    async fn close(&mut self, registration: &Registration, reason: CloseReason) {
        self.ctx
            .registry
            .unregister(&registration.id, registration.sequence);
        self.ctx
            .histories
            .remove(&registration.id, registration.sequence);
        let _ = tokio::time::timeout(SHUTDOWN_GRACE, self.writer.shutdown()).await;

        info!(
            reason = reason.as_str(),
            "[Sesión {}] Conexión cerrada", registration.sequence
        );
        self.ctx.conversation_logger.log(ConversationEvent::new(
            "session_closed",
            json!({
                "session": registration.id.as_str(),
                "sequence": registration.sequence,
                "reason": reason.as_str(),
            }),
        ));
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "error desconocido".to_string())
}
