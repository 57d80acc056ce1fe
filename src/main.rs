#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

fn main() {
    if let Err(e) = vigil_watcher::run() {
        eprintln!("vigil-watcher: {e}");
        std::process::exit(1);
    }
}
