//! The tag search screen on the terminal.

use connect_screens::tag_search::TagSearch;

use crate::config::Config;

pub async fn search(config: &Config, tag: &str) -> anyhow::Result<()> {
    let session = super::load_session(config)?;
    let api = super::http_api(config, &session);

    let mut screen = TagSearch::new(api, super::notifier());
    screen.search(tag).await;

    if let Some(error) = screen.error() {
        anyhow::bail!("{error}");
    }
    for user in screen.results() {
        println!(
            "{:<20} {}",
            user.username,
            user.bio.as_deref().unwrap_or("No bio available")
        );
        if let Some(tags) = &user.tags {
            println!("{:<20} #{tags}", "");
        }
    }
    Ok(())
}
