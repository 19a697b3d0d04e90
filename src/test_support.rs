//! In-memory SMTP peers for unit tests. Nothing here touches the network.

use std::collections::{HashMap, VecDeque};
use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::transport::{BoxedStream, DialFn, DialerProvider, TransportError};

/// Ordered server side of a conversation: each entry answers the next
/// command starting with its prefix.
#[derive(Debug, Clone)]
pub(crate) struct Script {
    greeting: Vec<u8>,
    steps: VecDeque<(String, String)>,
}

impl Script {
    pub(crate) fn new() -> Self {
        Self::with_greeting("220 mx.example.com ESMTP ready")
    }

    pub(crate) fn with_greeting(greeting: &str) -> Self {
        Self::with_raw_greeting(greeting.as_bytes())
    }

    /// Greeting bytes sent verbatim, CRLF appended.
    pub(crate) fn with_raw_greeting(greeting: &[u8]) -> Self {
        let mut line = greeting.to_vec();
        line.extend_from_slice(b"\r\n");
        Self {
            greeting: line,
            steps: VecDeque::new(),
        }
    }

    pub(crate) fn on(mut self, prefix: &str, reply: &str) -> Self {
        let reply = if reply.ends_with("\r\n") {
            reply.to_string()
        } else {
            format!("{reply}\r\n")
        };
        self.steps.push_back((prefix.to_string(), reply));
        self
    }

    /// `EHLO` and `MAIL FROM` both accepted.
    pub(crate) fn handshake() -> Self {
        Self::new()
            .on("EHLO", "250-mx.example.com\r\n250 SIZE 35882577\r\n")
            .on("MAIL FROM", "250 2.1.0 OK")
    }
}

/// Commands received by the fake server, shared with the test body.
#[derive(Debug, Clone, Default)]
pub(crate) struct Transcript(Arc<Mutex<Vec<String>>>);

impl Transcript {
    pub(crate) fn commands(&self) -> Vec<String> {
        self.0.lock().expect("transcript lock").clone()
    }

    pub(crate) fn rcpt_targets(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|cmd| {
                cmd.strip_prefix("RCPT TO:<")
                    .and_then(|rest| rest.strip_suffix('>'))
                    .map(str::to_string)
            })
            .collect()
    }

    fn push(&self, command: String) {
        self.0.lock().expect("transcript lock").push(command);
    }
}

/// Reads return scripted replies; writes are parsed into commands. An
/// unscripted command other than `QUIT` makes the server hang up.
pub(crate) struct ScriptedStream {
    outbound: Vec<u8>,
    read_pos: usize,
    pending: Vec<u8>,
    steps: VecDeque<(String, String)>,
    transcript: Transcript,
    closed: bool,
}

impl ScriptedStream {
    pub(crate) fn new(script: Script) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let stream = Self::with_transcript(script, transcript.clone());
        (stream, transcript)
    }

    fn with_transcript(script: Script, transcript: Transcript) -> Self {
        Self {
            outbound: script.greeting,
            read_pos: 0,
            pending: Vec::new(),
            steps: script.steps,
            transcript,
            closed: false,
        }
    }

    fn answer(&mut self, command: String) {
        let matches = self
            .steps
            .front()
            .is_some_and(|(prefix, _)| command.to_ascii_uppercase().starts_with(prefix.as_str()));
        if matches {
            if let Some((_, reply)) = self.steps.pop_front() {
                self.outbound.extend_from_slice(reply.as_bytes());
            }
        } else if command.eq_ignore_ascii_case("QUIT") {
            self.outbound.extend_from_slice(b"221 2.0.0 Bye\r\n");
        } else {
            self.closed = true;
        }
        self.transcript.push(command);
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.outbound[self.read_pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.read_pos += n;
        Ok(n)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.windows(2).position(|w| w == b"\r\n") {
            let line: Vec<u8> = self.pending.drain(..pos + 2).collect();
            let command = String::from_utf8_lossy(&line[..pos]).into_owned();
            self.answer(command);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Peer {
    Refuse,
    Unresolvable,
    Hang(Duration),
    Serve(Script),
}

/// A [`DialerProvider`] routing `host:port` to scripted peers.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeNetwork {
    peers: HashMap<String, Peer>,
    dialed: Arc<Mutex<Vec<String>>>,
    transcript: Transcript,
}

impl FakeNetwork {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn peer(mut self, host: &str, peer: Peer) -> Self {
        self.peers.insert(host.to_string(), peer);
        self
    }

    pub(crate) fn dialed(&self) -> Vec<String> {
        self.dialed.lock().expect("dialed lock").clone()
    }

    pub(crate) fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

impl DialerProvider for FakeNetwork {
    fn make_dial(&self, _network: &str, addr: &str) -> DialFn {
        self.dialed.lock().expect("dialed lock").push(addr.to_string());
        let host = addr.rsplit_once(':').map_or(addr, |(host, _)| host);
        let peer = self.peers.get(host).cloned().unwrap_or(Peer::Refuse);
        let transcript = self.transcript.clone();
        let addr = addr.to_string();
        Box::new(move || match peer {
            Peer::Refuse => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("dial tcp {addr}: connect: connection refused"),
            )),
            Peer::Unresolvable => {
                let host = addr.rsplit_once(':').map_or(addr.as_str(), |(host, _)| host);
                Err(TransportError::unresolved(
                    host,
                    io::Error::other("failed to lookup address information: Name or service not known"),
                ))
            }
            Peer::Hang(delay) => {
                thread::sleep(delay);
                Err(io::Error::new(io::ErrorKind::ConnectionRefused, "late refusal"))
            }
            Peer::Serve(script) => {
                Ok(Box::new(ScriptedStream::with_transcript(script, transcript)) as BoxedStream)
            }
        })
    }
}
