//! Operator console running alongside the server.
//!
//! Reads commands line by line from any async reader (stdin in production):
//!
//! - `list`: show every live session
//! - `kill <session_id>`: terminate one session
//! - `exit` / `quit`: leave the console; the server keeps running
//!
//! Reaching end of input ends the console the same way `exit` does.

use colored::Colorize;
use ecobot_application::{ConversationEvent, ConversationLogger, NoConversationLogger, SessionRegistry};
use ecobot_domain::{SessionId, SessionInfo};
use serde_json::json;
use std::sync::Arc;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

const PROMPT: &str = "(admin)> ";
const COMMANDS: &str = "list, kill <session_id>, exit";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    List,
    Kill(Option<SessionId>),
    Exit,
    Empty,
    Unknown(String),
}

impl AdminCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => AdminCommand::Empty,
            Some("list") => AdminCommand::List,
            Some("exit") | Some("quit") => AdminCommand::Exit,
            Some("kill") => AdminCommand::Kill(parts.next().map(SessionId::from)),
            Some(_) => AdminCommand::Unknown(line.to_string()),
        }
    }
}

/// Admin console bound to the shared session registry.
pub struct AdminConsole {
    registry: Arc<SessionRegistry>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AdminConsole {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self {
            registry,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run until `exit` or end of input.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        write_out(
            &mut output,
            &format!("{}\n", format!("Consola admin lista. Comandos: {}", COMMANDS).bold()),
        )
        .await?;

        loop {
            write_out(&mut output, PROMPT).await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match AdminCommand::parse(&line) {
                AdminCommand::Exit => {
                    write_out(
                        &mut output,
                        "Saliendo consola admin (el server sigue corriendo)...\n",
                    )
                    .await?;
                    break;
                }
                command => {
                    let text = self.execute(&command);
                    if !text.is_empty() {
                        write_out(&mut output, &format!("{}\n", text)).await?;
                    }
                }
            }
        }

        info!("Admin console closed");
        Ok(())
    }

    /// Execute one command and return the text to print. `Exit` is handled
    /// by [`run`](Self::run).
    pub fn execute(&self, command: &AdminCommand) -> String {
        match command {
            AdminCommand::List => self.list(),
            AdminCommand::Kill(Some(id)) => self.kill(id),
            AdminCommand::Kill(None) => "Uso: kill <session_id>".yellow().to_string(),
            AdminCommand::Unknown(_) => format!("Comandos disponibles: {}", COMMANDS)
                .yellow()
                .to_string(),
            AdminCommand::Empty | AdminCommand::Exit => String::new(),
        }
    }

    fn list(&self) -> String {
        let sessions = self.registry.list();
        if sessions.is_empty() {
            return "No hay conexiones activas.".to_string();
        }
        sessions
            .iter()
            .map(format_session)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn kill(&self, id: &SessionId) -> String {
        if !self.registry.terminate(id) {
            return "No existe esa sesión o ya está cerrada.".red().to_string();
        }
        self.conversation_logger.log(ConversationEvent::new(
            "session_killed",
            json!({ "session": id.as_str() }),
        ));
        format!("Sesión {} cerrada desde admin.", id).green().to_string()
    }
}

fn format_session(info: &SessionInfo) -> String {
    format!(
        "Sesión {} ({}) | {} | started={} | last_seen={}",
        info.sequence,
        info.id,
        info.peer,
        SessionInfo::format_timestamp(&info.started_at),
        SessionInfo::format_timestamp(&info.last_active),
    )
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::Mutex;

    struct RecordingLogger(Mutex<Vec<String>>);

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.0.lock().unwrap().push(event.event_type.to_string());
        }
    }

    fn peer(port: u16) -> SocketAddr {
        SocketAddr::from(([10, 0, 0, 7], port))
    }

    async fn run_script(console: &AdminConsole, script: &str) -> String {
        let mut output = Vec::new();
        console.run(script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(AdminCommand::parse("  list "), AdminCommand::List);
        assert_eq!(AdminCommand::parse("quit"), AdminCommand::Exit);
        assert_eq!(AdminCommand::parse(""), AdminCommand::Empty);
        assert_eq!(AdminCommand::parse("kill"), AdminCommand::Kill(None));
        assert_eq!(
            AdminCommand::parse("kill e750230a"),
            AdminCommand::Kill(Some(SessionId::from("e750230a")))
        );
        assert_eq!(
            AdminCommand::parse("status"),
            AdminCommand::Unknown("status".to_string())
        );
    }

    #[test]
    fn test_list_empty_and_populated() {
        let registry = Arc::new(SessionRegistry::new());
        let console = AdminConsole::new(registry.clone());
        assert_eq!(console.execute(&AdminCommand::List), "No hay conexiones activas.");

        let first = registry.register(peer(5000));
        let second = registry.register(peer(5001));
        let listing = console.execute(&AdminCommand::List);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("Sesión 1 ({}) | 10.0.0.7:5000 | started=", first.id)));
        assert!(lines[1].starts_with(&format!("Sesión 2 ({})", second.id)));
        assert!(lines[1].contains("| last_seen="));
    }

    #[test]
    fn test_kill_live_session_cancels_worker_token() {
        let registry = Arc::new(SessionRegistry::new());
        let logger = Arc::new(RecordingLogger(Mutex::new(Vec::new())));
        let console = AdminConsole::new(registry.clone()).with_conversation_logger(logger.clone());
        let registration = registry.register(peer(5000));

        let text = console.execute(&AdminCommand::Kill(Some(registration.id.clone())));
        assert!(text.contains(&format!("Sesión {} cerrada desde admin.", registration.id)));
        assert!(registration.cancel.is_cancelled());
        assert!(registry.is_empty());
        assert_eq!(*logger.0.lock().unwrap(), vec!["session_killed".to_string()]);
    }

    #[tokio::test]
    async fn test_kill_unknown_session_changes_nothing() {
        let registry = Arc::new(SessionRegistry::new());
        let registration = registry.register(peer(5000));
        let console = AdminConsole::new(registry.clone());

        let output = run_script(&console, "kill deadbeef\n").await;
        assert!(output.contains("No existe esa sesión o ya está cerrada."));
        assert_eq!(registry.len(), 1);
        assert!(!registration.cancel.is_cancelled());
    }

    #[tokio::test]
    async fn test_script_until_exit() {
        let registry = Arc::new(SessionRegistry::new());
        let console = AdminConsole::new(registry);

        let output = run_script(&console, "\nkill\nfoo\nexit\nlist\n").await;
        assert!(output.contains("Consola admin lista. Comandos: list, kill <session_id>, exit"));
        assert!(output.contains("Uso: kill <session_id>"));
        assert!(output.contains("Comandos disponibles: list, kill <session_id>, exit"));
        assert!(output.ends_with("Saliendo consola admin (el server sigue corriendo)...\n"));
        assert!(!output.contains("No hay conexiones activas."));
    }

    #[tokio::test]
    async fn test_end_of_input_ends_console() {
        let console = AdminConsole::new(Arc::new(SessionRegistry::new()));
        let output = run_script(&console, "list").await;
        assert!(output.contains("No hay conexiones activas."));
        assert!(output.ends_with(PROMPT));
    }
}
