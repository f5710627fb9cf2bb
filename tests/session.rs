use serde_json::json;
use std::time::Duration;
use unobot::engine::*;
use unobot::player::*;
use unobot::protocol::*;
use unobot::transport::*;

fn player(rolls: &[usize]) -> Player<Scripted> {
    let settings = Settings {
        special_logic: false,
        pacing: Duration::ZERO,
        ..Settings::default()
    };
    Player::new(Strategy::new(Scripted::new(rolls.iter().copied())), settings)
}

#[tokio::test]
async fn plays_through_a_round() {
    let mut transport = Loopback::default()
        .reply(Event::JoinRoom, Ok(json!({"room_name": "Dealer 1", "your_id": "me"})))
        .notice(Event::JoinRoom, json!({"player": "me", "room_name": "Dealer 1"}))
        .notice(
            Event::ReceiverCard,
            json!({"cards_receive": [{"color": "red", "number": 0}], "is_penalty": false}),
        )
        .notice(
            Event::FirstPlayer,
            json!({"first_player": "p2", "first_card": {"color": "green", "number": 0}}),
        )
        .notice(Event::PlayCard, json!({"player": "p2", "card_play": {"color": "green", "number": 7}, "yell_uno": false}))
        .notice(
            Event::NextPlayer,
            json!({
                "next_player": "me",
                "before_player": "p2",
                "number_card_of_player": {"p2": 1, "me": 3, "p3": 1},
                "card_of_player": [
                    {"color": "black", "special": "wild_draw_4"},
                    {"color": "blue", "number": 0},
                    {"color": "black", "special": "wild"},
                ],
                "card_before": {"color": "green", "number": 7},
                "draw_reason": "nothing",
                "must_call_draw_card": false,
            }),
        )
        .notice(Event::UpdateColor, json!({"color": "yellow"}))
        .notice(Event::PlayCard, json!({"player": "p3", "card_play": {"color": "yellow", "number": 1}, "yell_uno": true}))
        .notice(Event::FinishTurn, json!({"turn": 1, "winner": "p3"}))
        .notice(Event::FinishGame, json!({"winner": "p3", "turn_win": 1}));
    let mut player = player(&[1]);
    let id = player.join(&mut transport, "Bot", "Dealer 1").await.unwrap();
    assert_eq!(id, PlayerId::from("me"));
    player.run(&mut transport).await;
    assert_eq!(
        transport.sent_names(),
        vec!["join-room", "pointed-not-say-uno", "play-card"]
    );
    assert_eq!(transport.sent()[1].1, json!({"target": "p2"}));
    assert_eq!(
        transport.sent()[2].1,
        json!({
            "card_play": {"color": "black", "special": "wild"},
            "yell_uno": false,
            "color_of_wild": "yellow",
        })
    );
    assert!(player.declarations().is_empty());
}

#[tokio::test]
async fn answers_shuffle_and_draws_through() {
    let mut transport = Loopback::default()
        .reply(Event::JoinRoom, Ok(json!({"your_id": "me"})))
        .reply(
            Event::DrawCard,
            Ok(json!({"can_play_draw_card": true, "draw_card": [{"color": "blue", "number": 9}]})),
        )
        .notice(Event::ColorOfWild, json!({}))
        .notice(
            Event::ShuffleWild,
            json!({"player": "me", "number_card_of_player": {"me": 2, "p2": 1, "p3": 3}}),
        )
        .notice(
            Event::NextPlayer,
            json!({
                "number_card_of_player": {"me": 2, "p2": 1, "p3": 3},
                "card_of_player": [{"color": "red", "number": 4}, {"color": "red", "special": "skip"}],
                "card_before": {"color": "blue", "number": 2},
                "draw_reason": "nothing",
                "must_call_draw_card": false,
            }),
        );
    let mut player = player(&[3]);
    player.join(&mut transport, "Bot", "Dealer 1").await.unwrap();
    player.run(&mut transport).await;
    assert_eq!(
        transport.sent_names(),
        vec!["join-room", "color-of-wild", "draw-card", "play-draw-card"]
    );
    assert_eq!(transport.sent()[1].1, json!({"color_of_wild": "blue"}));
    assert_eq!(
        transport.sent()[3].1,
        json!({"is_play_card": true, "yell_uno": false})
    );
    assert!(player.declarations().is_declared(&PlayerId::from("p2")));
}
