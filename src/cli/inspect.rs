use tabled::Table;

use crate::{error, info, mixtape, types::TrackTableRow};

pub async fn inspect(token: String) {
    let Some(record) = mixtape::decode_mixtape(&token) else {
        error!("Invalid mixtape link. Ask the person who shared it to generate a new one.");
    };

    info!(
        "{} ({} tracks, by {})",
        record.n,
        record.t.len(),
        record.o
    );
    if !record.d.is_empty() {
        info!("{}", record.d);
    }

    // Only identifiers are persisted in the link; titles and artists are
    // rendered by the external player at listen time.
    let table_rows: Vec<TrackTableRow> = record
        .t
        .iter()
        .enumerate()
        .map(|(i, id)| TrackTableRow {
            position: i + 1,
            name: format!("spotify:track:{id}"),
            artist: String::new(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
