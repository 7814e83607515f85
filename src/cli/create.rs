use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info, mixtape, success,
    types::{PlaylistPreview, TrackTableRow},
    warning,
};

pub async fn create(playlist: String, open: bool) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Importing playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let preview = match mixtape::import(&playlist).await {
        Ok(preview) => {
            pb.finish_and_clear();
            preview
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Import failed: {}", e);
        }
    };

    print_preview(&preview);

    let record = mixtape::preview_to_mixtape(&preview);
    let token = mixtape::encode_mixtape(&record);
    let link = format!(
        "{base}/listen/{token}",
        base = config::listen_base_url(),
        token = token
    );

    success!("Mixtape link created:");
    println!("{}", link);

    if open {
        if webbrowser::open(&link).is_err() {
            warning!("Failed to open browser. Copy the link above manually.");
        }
    }
}

fn print_preview(preview: &PlaylistPreview) {
    info!(
        "{} ({} tracks, by {})",
        preview.name,
        preview.tracks.len(),
        preview.owner
    );
    if !preview.description.is_empty() {
        info!("{}", preview.description);
    }

    let table_rows: Vec<TrackTableRow> = preview
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            name: t.name.clone(),
            artist: t.artist.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
