use super::error::TransportError;
use super::packet::*;
use super::transport::*;
use anyhow::Context;
use futures::SinkExt;
use futures::StreamExt;
use serde_json::Value;
use std::collections::HashMap;
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

type Stream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type Waiter = oneshot::Sender<Result<Value, TransportError>>;

/// A frame to write, optionally registering who waits for its acknowledgment.
struct Request {
    packet: Packet,
    waiter: Option<(u64, Waiter)>,
}

/// Socket.IO session with the coordinator.
///
/// A background pump owns the websocket. It answers pings, hands
/// acknowledgments to the emit waiting on them, and queues events for
/// [`recv`](Transport::recv). When the socket closes the queue ends and
/// every outstanding emit fails with [`TransportError::Closed`].
pub struct Socket {
    outbox: UnboundedSender<Request>,
    inbox: UnboundedReceiver<Notice>,
    acks: u64,
}

impl Socket {
    /// Opens the websocket and completes the Socket.IO handshake.
    pub async fn connect(host: &str) -> anyhow::Result<Self> {
        let url = endpoint(host);
        log::info!("connecting to {}", url);
        let (mut stream, _) = tokio_tungstenite::connect_async(url.as_str())
            .await
            .with_context(|| format!("connect {}", url))?;
        Self::handshake(&mut stream).await?;
        log::info!("client connect successfully");
        let (outbox, requests) = unbounded_channel();
        let (notices, inbox) = unbounded_channel();
        tokio::spawn(Self::pump(stream, requests, notices));
        Ok(Self {
            outbox,
            inbox,
            acks: 0,
        })
    }

    async fn handshake(stream: &mut Stream) -> anyhow::Result<()> {
        loop {
            match Self::next(stream).await? {
                Packet::Open(info) => {
                    log::debug!("engine open {}", info);
                    Self::write(stream, &Packet::Connect(None)).await?;
                }
                Packet::Ping => Self::write(stream, &Packet::Pong).await?,
                Packet::Connect(_) => return Ok(()),
                Packet::ConnectError(err) => anyhow::bail!("connection refused: {}", err),
                packet => log::trace!("ignoring {:?} during handshake", packet),
            }
        }
    }

    async fn next(stream: &mut Stream) -> anyhow::Result<Packet> {
        loop {
            match stream.next().await {
                Some(Ok(msg)) if msg.is_text() => return Ok(Packet::try_from(msg.to_text()?)?),
                Some(Ok(Message::Close(_))) | None => anyhow::bail!("socket closed during handshake"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
            }
        }
    }

    async fn write(stream: &mut Stream, packet: &Packet) -> Result<(), TransportError> {
        stream
            .send(Message::text(packet.encode()))
            .await
            .map_err(|e| TransportError::Socket(e.to_string()))
    }

    async fn pump(
        mut stream: Stream,
        mut requests: UnboundedReceiver<Request>,
        notices: UnboundedSender<Notice>,
    ) {
        let mut pending = HashMap::<u64, Waiter>::new();
        'sesh: loop {
            tokio::select! {
                biased;
                request = requests.recv() => match request {
                    Some(Request { packet, waiter }) => {
                        if let Some((id, waiter)) = waiter {
                            pending.insert(id, waiter);
                        }
                        if let Err(e) = Self::write(&mut stream, &packet).await {
                            log::error!("{}", e);
                            break 'sesh;
                        }
                    }
                    None => break 'sesh,
                },
                frame = stream.next() => match frame {
                    Some(Ok(msg)) if msg.is_text() => {
                        let packet = msg
                            .to_text()
                            .map_err(|e| TransportError::Malformed(e.to_string()))
                            .and_then(Packet::try_from);
                        match packet {
                            Ok(Packet::Ping) => {
                                if Self::write(&mut stream, &Packet::Pong).await.is_err() {
                                    break 'sesh;
                                }
                            }
                            Ok(Packet::Event { name, args, .. }) => {
                                let payload = args.into_iter().next().unwrap_or(Value::Null);
                                if notices.send(Notice { name, payload }).is_err() {
                                    break 'sesh;
                                }
                            }
                            Ok(Packet::Ack { id, args }) => match pending.remove(&id) {
                                Some(waiter) => {
                                    let _ = waiter.send(Packet::answer(args));
                                }
                                None => log::warn!("unexpected ack {}", id),
                            },
                            Ok(Packet::Close | Packet::Disconnect) => break 'sesh,
                            Ok(Packet::ConnectError(err)) => {
                                log::error!("connection error {}", err);
                                break 'sesh;
                            }
                            Ok(packet) => log::trace!("ignoring {:?}", packet),
                            Err(e) => log::warn!("{}", e),
                        }
                    }
                    Some(Ok(Message::Close(_))) => break 'sesh,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::error!("socket error {}", e);
                        break 'sesh;
                    }
                    None => break 'sesh,
                },
            }
        }
        log::info!("client disconnect");
        for waiter in pending.into_values() {
            let _ = waiter.send(Err(TransportError::Closed));
        }
    }
}

#[async_trait::async_trait]
impl Transport for Socket {
    async fn emit(&mut self, name: &str, payload: Value) -> Result<Value, TransportError> {
        let id = self.acks;
        self.acks += 1;
        let (tx, rx) = oneshot::channel();
        self.outbox
            .send(Request {
                packet: Packet::event(Some(id), name, payload),
                waiter: Some((id, tx)),
            })
            .map_err(|_| TransportError::Closed)?;
        rx.await.unwrap_or(Err(TransportError::Closed))
    }
    async fn recv(&mut self) -> Option<Notice> {
        self.inbox.recv().await
    }
}
