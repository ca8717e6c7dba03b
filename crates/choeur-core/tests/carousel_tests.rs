mod common;

use std::time::Duration;

use choeur_core::carousel::{CarouselCommand, CarouselConfig, PlayState};
use common::{last, spawn_carousel};
use tokio::time;

const SETTLE: Duration = Duration::from_millis(10);

#[tokio::test(start_paused = true)]
async fn test_autoplay_cycles_through_every_slide() {
    let (commands, handle, observed) = spawn_carousel(CarouselConfig::default(), false);

    time::sleep(SETTLE).await;
    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.play_state, PlayState::Playing);
    assert_eq!(timers, 1);

    // First advance once the start delay and one interval have elapsed
    time::sleep(Duration::from_millis(1500 + 6000 - 20)).await;
    assert_eq!(last(&observed).0.current_index, 0);
    time::sleep(Duration::from_millis(20)).await;
    assert_eq!(last(&observed).0.current_index, 1);

    // Five more ticks wrap around to the first slide
    time::sleep(Duration::from_millis(5 * 6000)).await;
    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 0);
    assert_eq!(timers, 1);

    commands.send(CarouselCommand::Quit).await.unwrap();
    let final_state = handle.await.unwrap();
    assert_eq!(final_state.current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_stops_autoplay() {
    let (commands, handle, observed) = spawn_carousel(CarouselConfig::default(), false);

    time::sleep(Duration::from_millis(7600)).await;
    assert_eq!(last(&observed).0.current_index, 1);

    commands.send(CarouselCommand::Next).await.unwrap();
    time::sleep(SETTLE).await;
    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 2);
    assert_eq!(state.play_state, PlayState::Paused);
    assert_eq!(timers, 0);

    time::sleep(Duration::from_secs(60)).await;
    assert_eq!(last(&observed).0.current_index, 2);

    drop(commands);
    let final_state = handle.await.unwrap();
    assert_eq!(final_state.current_index, 2);
    assert_eq!(final_state.play_state, PlayState::Paused);
}

#[tokio::test(start_paused = true)]
async fn test_resume_restarts_the_start_delay() {
    let (commands, handle, observed) = spawn_carousel(CarouselConfig::default(), false);

    commands.send(CarouselCommand::TogglePlayPause).await.unwrap();
    time::sleep(SETTLE).await;
    assert_eq!(last(&observed).0.play_state, PlayState::Paused);

    commands.send(CarouselCommand::GoTo(4)).await.unwrap();
    commands.send(CarouselCommand::TogglePlayPause).await.unwrap();
    time::sleep(SETTLE).await;
    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 4);
    assert_eq!(state.play_state, PlayState::Playing);
    assert_eq!(timers, 1);

    time::sleep(Duration::from_millis(7500)).await;
    assert_eq!(last(&observed).0.current_index, 5);

    commands.send(CarouselCommand::Quit).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_reduced_motion_never_advances() {
    let (commands, handle, observed) = spawn_carousel(CarouselConfig::default(), true);
    time::sleep(SETTLE).await;
    assert_eq!(last(&observed).0.play_state, PlayState::Paused);

    commands.send(CarouselCommand::TogglePlayPause).await.unwrap();
    time::sleep(Duration::from_secs(30)).await;

    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.play_state, PlayState::Playing);
    assert_eq!(timers, 0);

    commands.send(CarouselCommand::Previous).await.unwrap();
    time::sleep(SETTLE).await;
    let (state, timers) = last(&observed);
    assert_eq!(state.current_index, 5);
    assert_eq!(state.play_state, PlayState::Paused);
    assert_eq!(timers, 0);

    commands.send(CarouselCommand::Quit).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_jump_is_ignored() {
    let config = CarouselConfig {
        autoplay: false,
        ..CarouselConfig::default()
    };
    let (commands, handle, observed) = spawn_carousel(config, false);

    commands.send(CarouselCommand::GoTo(3)).await.unwrap();
    commands.send(CarouselCommand::GoTo(42)).await.unwrap();
    time::sleep(SETTLE).await;
    assert_eq!(last(&observed).0.current_index, 3);

    commands.send(CarouselCommand::Quit).await.unwrap();
    assert_eq!(handle.await.unwrap().current_index, 3);
}
