#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use choeur_core::carousel::{
    run_carousel, Carousel, CarouselCommand, CarouselConfig, CarouselState, SlideList, TokioHost,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::{sync::mpsc, task::JoinHandle};

/// States observed by the event loop, with the number of live timers at
/// each change.
pub type Observed = Arc<Mutex<Vec<(CarouselState, usize)>>>;

/// Helper function to start a carousel event loop on the home page slides
pub fn spawn_carousel(
    config: CarouselConfig,
    reduced_motion: bool,
) -> (
    mpsc::Sender<CarouselCommand>,
    JoinHandle<CarouselState>,
    Observed,
) {
    let (host, fired) = TokioHost::new(reduced_motion);
    let carousel = Carousel::new(SlideList::home_page(), config, host);
    let (commands, receiver) = mpsc::channel(16);
    let observed: Observed = Arc::default();

    let sink = Arc::clone(&observed);
    let handle = tokio::spawn(run_carousel(carousel, fired, receiver, move |carousel| {
        sink.lock()
            .expect("observed lock")
            .push((carousel.state(), carousel.host().live_timers()));
    }));
    (commands, handle, observed)
}

/// Last state seen by the event loop
pub fn last(observed: &Observed) -> (CarouselState, usize) {
    *observed
        .lock()
        .expect("observed lock")
        .last()
        .expect("at least the mount state")
}

/// A valid concert record whose media lives at `/concerts/{slug}.jpg`
pub fn concert(slug: &str) -> Value {
    json!({
        "title": "Concert de printemps",
        "slug": slug,
        "date": ["2025-04-12T20:30:00+02:00"],
        "location": "Église de Saint-Gervais",
        "media": format!("/concerts/{slug}.jpg"),
        "programme": ["Ave verum corpus", "Cantique de Jean Racine"]
    })
}

/// Lays out `<root>/assets/contents/concerts.json` and `<root>/public`
/// the way the site repository does.
pub fn create_site(concerts: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let contents = temp_dir.path().join("assets").join("contents");
    std::fs::create_dir_all(&contents).expect("Failed to create contents dir");
    std::fs::create_dir_all(temp_dir.path().join("public").join("concerts"))
        .expect("Failed to create public dir");

    let file = contents.join("concerts.json");
    std::fs::write(&file, serde_json::to_string_pretty(concerts).expect("serializable"))
        .expect("Failed to write concerts file");
    (temp_dir, file)
}

/// Creates an empty media file under `public/`
pub fn add_media(site: &Path, media: &str) {
    let path = site.join("public").join(media.trim_start_matches('/'));
    std::fs::write(path, b"").expect("Failed to write media file");
}
