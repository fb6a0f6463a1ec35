use clap::Parser;
use media_playlist::{
    MediaItem, MediaPlaylistError, Movie, Playlist, Program, Series, playlist_to_json,
    render_playlist,
};
use std::process;
use tracing_subscriber::EnvFilter;

/// Print a demo weekend playlist of movies and series
#[derive(Parser, Debug)]
#[command(name = "media-playlist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Title of the playlist
    #[arg(short, long, default_value = "Weekend")]
    title: String,

    /// Print the playlist as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the tracing subscriber, honouring RUST_LOG when it is set
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("media_playlist={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the demo catalogue with a few likes already given
fn weekend_playlist(title: &str) -> Playlist {
    let mut nemo = Movie::new("finding nemo", 2003, 100);
    let mut mandalorian = Series::new("the mandalorian", 2019, 2);
    let mut scary_movie = Movie::new("scary movie", 2000, 88);
    let mut daredevil = Series::new("daredevil", 2015, 3);

    nemo.increment_like();
    scary_movie.increment_like();
    scary_movie.increment_like();
    for _ in 0..3 {
        daredevil.increment_like();
    }
    mandalorian.increment_like();
    mandalorian.increment_like();

    let items: Vec<MediaItem> = vec![
        nemo.into(),
        mandalorian.into(),
        daredevil.into(),
        scary_movie.into(),
    ];

    Playlist::new(title, items)
}

fn run(cli: &Cli) -> Result<(), MediaPlaylistError> {
    let playlist = weekend_playlist(&cli.title);

    if cli.json {
        println!("{}", playlist_to_json(&playlist)?);
        return Ok(());
    }

    print!("{}", render_playlist(&playlist));

    let daredevil = playlist.item_at(2)?;
    println!(
        "\nIs '{}' in the playlist? {}",
        daredevil.name(),
        playlist.contains(daredevil)
    );

    let lookalike = daredevil.clone();
    println!(
        "Is an identical copy of '{}' in the playlist? {}",
        lookalike.name(),
        playlist.contains(&lookalike)
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
