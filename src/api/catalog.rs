//! Static track catalog. The rest of the app treats this as an ordered,
//! read-only collection; replacing it with a fetched library later only
//! requires keeping the `Track` shape.

use once_cell::sync::Lazy;

use crate::api::models::Track;

fn sample(id: &str, title: &str, artist: &str, song_number: u32) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        url: format!("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{song_number}.mp3"),
        artwork: None,
    }
}

static CATALOG: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        sample("daily-mix-1", "Daily Mix 1", "Various Artists", 1),
        sample("chill-vibes", "Chill Vibes", "Lo-Fi Collective", 2),
        sample("throwback-hits", "Throwback Hits", "2000s Legends", 3),
        sample("top-50-global", "Top 50 Global", "Chart Toppers", 4),
        sample("morning-vibes", "Morning Vibes", "Sunrise Ensemble", 5),
        sample("workout-beats", "Workout Beats", "Pulse Department", 6),
        sample("relax-and-focus", "Relax & Focus", "Still Waters", 7),
        sample("party-time", "Party Time", "The Night Shift", 8),
    ]
});

pub fn catalog_tracks() -> &'static [Track] {
    &CATALOG
}
