//! Rehearsal against the development test tool.
//!
//! The tool listens on port 3000 and checks that a client sends each
//! outbound event in the expected shape. Instead of joining a room the
//! player emits one canned payload for the event named on the command line.

use crate::cards::*;
use crate::protocol::*;
use crate::transport::Transport;

pub const TEST_TOOL_PORT: &str = "3000";

/// Whether the host points at the development test tool.
pub fn is_test_tool(host: &str) -> bool {
    host.contains(TEST_TOOL_PORT)
}

/// A representative outbound command for each event the tool can check.
pub fn sample(event: Event, player: &str, room: &str) -> Option<Command> {
    match event {
        Event::JoinRoom => Some(Command::JoinRoom {
            player: player.to_string(),
            room_name: room.to_string(),
        }),
        Event::ColorOfWild => Some(Command::ColorOfWild(Color::Red)),
        Event::PlayCard => Some(Command::Play {
            card: Card::wild(Special::Wild),
            yell_uno: false,
            color: Some(Color::Blue),
        }),
        Event::DrawCard => Some(Command::Draw),
        Event::PlayDrawCard => Some(Command::PlayDrawn {
            yell_uno: true,
            color: Some(Color::Blue),
        }),
        Event::Challenge => Some(Command::Challenge(true)),
        Event::PointedNotSayUno => Some(Command::PointOut(PlayerId::from("Player 1"))),
        Event::SpecialLogic => Some(Command::SpecialLogic(
            crate::player::Settings::TITLE.to_string(),
        )),
        _ => None,
    }
}

/// Emits the canned payload for `name`, if there is one.
pub async fn rehearse<T>(transport: &mut T, name: Option<&str>, player: &str, room: &str)
where
    T: Transport + ?Sized,
{
    let Some(name) = name else {
        log::warn!("no event name given");
        return;
    };
    match Protocol::event(name).map(|event| sample(event, player, room)) {
        Ok(Some(command)) => {
            let (event, payload) = Protocol::encode(&command);
            log::info!("-> {} {}", event, payload);
            transport
                .emit(event.as_str(), payload)
                .await
                .inspect(|ack| log::info!("<- {} ack {}", event, ack))
                .inspect_err(|e| log::error!("{} failed: {}", event, e))
                .ok();
        }
        Ok(None) | Err(_) => log::warn!("undefined test data for event {}", name),
    }
}
