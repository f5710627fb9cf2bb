use clap::Parser;
use unobot::args::Args;
use unobot::harness;
use unobot::player::Player;
use unobot::transport::Socket;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    unobot::log();
    unobot::kys();
    log::info!("dealer: {}, player: {}", args.room_name, args.player);
    let mut socket = Socket::connect(&args.host).await?;
    let mut player = Player::new(args.strategy(), settings);
    if args.is_test_tool() {
        harness::rehearse(
            &mut socket,
            args.event_name.as_deref(),
            &args.player,
            &args.room_name,
        )
        .await;
    } else {
        player.join(&mut socket, &args.player, &args.room_name).await?;
    }
    player.run(&mut socket).await;
    Ok(())
}
