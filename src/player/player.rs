use super::settings::Settings;
use crate::cards::*;
use crate::engine::*;
use crate::protocol::*;
use crate::tracker::*;
use crate::transport::*;
use anyhow::Context;
use serde_json::Value;

/// The autonomous player: owns its identity, the declaration table, and
/// the decision policy, and reacts to one notice at a time.
///
/// Every emit is awaited before the next notice is read, so the tracker
/// and identity are never touched concurrently.
#[derive(Debug)]
pub struct Player<D = Random> {
    me: Option<PlayerId>,
    declarations: Declarations,
    strategy: Strategy<D>,
    settings: Settings,
}

impl Default for Player<Random> {
    fn default() -> Self {
        Self::new(Strategy::default(), Settings::default())
    }
}

impl<D> Player<D>
where
    D: Dice,
{
    pub fn new(strategy: Strategy<D>, settings: Settings) -> Self {
        Self {
            me: None,
            declarations: Declarations::default(),
            strategy,
            settings,
        }
    }
    pub fn me(&self) -> Option<&PlayerId> {
        self.me.as_ref()
    }
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }
    pub fn strategy(&self) -> &Strategy<D> {
        &self.strategy
    }

    /// Joins a room and adopts the id the coordinator hands back.
    pub async fn join<T>(&mut self, transport: &mut T, player: &str, room: &str) -> anyhow::Result<PlayerId>
    where
        T: Transport + ?Sized,
    {
        let command = Command::JoinRoom {
            player: player.to_string(),
            room_name: room.to_string(),
        };
        let (event, payload) = Protocol::encode(&command);
        log::info!("-> {} {}", event, payload);
        let ack = transport
            .emit(event.as_str(), payload)
            .await
            .with_context(|| format!("join room {}", room))?;
        let joined = Protocol::decode::<Joined>(event, &ack)?;
        log::info!("joined {} as {}", room, joined.your_id);
        self.me = Some(joined.your_id.clone());
        Ok(joined.your_id)
    }

    /// Handles notices until the session ends.
    pub async fn run<T>(&mut self, transport: &mut T)
    where
        T: Transport + ?Sized,
    {
        while let Some(notice) = transport.recv().await {
            self.dispatch(transport, notice).await;
        }
        log::info!("session closed");
    }

    /// Handles one notice to completion. Unknown or malformed notices are
    /// logged and otherwise ignored.
    pub async fn dispatch<T>(&mut self, transport: &mut T, notice: Notice)
    where
        T: Transport + ?Sized,
    {
        log::info!("<- {}", notice.name);
        log::debug!("<- {} {}", notice.name, notice.payload);
        let handled = match Protocol::event(&notice.name) {
            Ok(event) => self.handle(transport, event, &notice.payload).await,
            Err(e) => Err(e),
        };
        handled.inspect_err(|e| log::warn!("{}", e)).ok();
    }

    async fn handle<T>(&mut self, transport: &mut T, event: Event, payload: &Value) -> Result<(), ProtocolError>
    where
        T: Transport + ?Sized,
    {
        match event {
            Event::PlayCard | Event::PlayDrawCard => {
                let yell = Protocol::decode::<Yell>(event, payload)?;
                if yell.yell_uno && self.me.as_ref() != Some(&yell.player) {
                    self.declarations.declare(yell.player);
                }
            }
            Event::DrawCard | Event::Penalty => {
                let grew = Protocol::decode::<Grew>(event, payload)?;
                self.declarations.forget(&grew.player);
            }
            Event::ShuffleWild => {
                let shuffled = Protocol::decode::<Shuffled>(event, payload)?;
                if let Some(player) = &shuffled.player {
                    log::info!("{} shuffled every hand", player);
                }
                self.declarations.reshuffle(&shuffled.number_card_of_player);
            }
            Event::FinishTurn | Event::FinishGame => self.declarations.clear(),
            Event::UpdateColor => {
                let recolored = Protocol::decode::<Recolored>(event, payload)?;
                log::info!("pile is now {}", recolored.color);
            }
            Event::ColorOfWild => {
                let color = self.strategy.choose_color();
                Self::send(transport, Command::ColorOfWild(color)).await;
            }
            Event::NextPlayer => {
                let turn = Protocol::decode::<NextPlayer>(event, payload)?;
                self.turn(transport, turn).await;
            }
            _ => {}
        }
        Ok(())
    }

    async fn turn<T>(&mut self, transport: &mut T, turn: NextPlayer)
    where
        T: Transport + ?Sized,
    {
        if let Some(target) = self
            .declarations
            .observe(self.me.as_ref(), &turn.number_card_of_player)
        {
            Self::send(transport, Command::PointOut(target)).await;
            tokio::time::sleep(self.settings.pacing).await;
        }
        if turn.must_call_draw_card {
            Self::send(transport, Command::Draw).await;
            return;
        }
        if turn.draw_reason.is_challengeable() && self.strategy.challenge() {
            Self::send(transport, Command::Challenge(true)).await;
            return;
        }
        if self.settings.special_logic && self.strategy.special_logic() {
            Self::send(transport, Command::SpecialLogic(self.settings.title.clone())).await;
        }
        match self
            .strategy
            .choose_card(&turn.card_of_player, &turn.card_before)
        {
            Some(card) => {
                log::info!("selected card {}", card);
                let command = Command::Play {
                    card,
                    yell_uno: turn.card_of_player.after_play(0) == 1,
                    color: self.recolor(&card),
                };
                Self::send(transport, command).await;
            }
            None => self.draw(transport, &turn.card_of_player).await,
        }
    }

    /// Draws a card and plays it right away when the coordinator allows.
    async fn draw<T>(&mut self, transport: &mut T, hand: &Hand)
    where
        T: Transport + ?Sized,
    {
        let Some(ack) = Self::send(transport, Command::Draw).await else {
            return;
        };
        let drew = match Protocol::decode::<Drew>(Event::DrawCard, &ack) {
            Ok(drew) => drew,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };
        if let Some(card) = drew.playable() {
            log::info!("playing drawn card {}", card);
            let command = Command::PlayDrawn {
                yell_uno: hand.after_play(drew.draw_card.len()) == 1,
                color: self.recolor(&card),
            };
            Self::send(transport, command).await;
        }
    }

    fn recolor(&mut self, card: &Card) -> Option<Color> {
        card.takes_color().then(|| self.strategy.choose_color())
    }

    /// Emits a command. A rejected or lost acknowledgment abandons the
    /// action and yields None.
    async fn send<T>(transport: &mut T, command: Command) -> Option<Value>
    where
        T: Transport + ?Sized,
    {
        let (event, payload) = Protocol::encode(&command);
        log::info!("-> {} {}", event, payload);
        transport
            .emit(event.as_str(), payload)
            .await
            .inspect(|ack| log::debug!("<- {} ack {}", event, ack))
            .inspect_err(|e| log::error!("{} failed: {}", command, e))
            .ok()
    }
}
