//! The own-profile screen on the terminal.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use connect_api::http::HttpConnectApi;
use connect_api::session::FileSession;
use connect_screens::profile::ProfileScreen;

use crate::config::Config;
use crate::notify::TerminalNotifier;

type Profile = ProfileScreen<HttpConnectApi, Arc<FileSession>, TerminalNotifier>;

async fn load(config: &Config) -> anyhow::Result<Profile> {
    let session = super::load_session(config)?;
    let api = super::http_api(config, &session);
    let mut screen = ProfileScreen::new(api, session, super::notifier());
    screen.load().await;
    Ok(screen)
}

pub async fn show(config: &Config) -> anyhow::Result<()> {
    let screen = load(config).await?;
    render(&screen);
    Ok(())
}

pub async fn edit(
    config: &Config,
    bio: Option<String>,
    tags: Option<String>,
) -> anyhow::Result<()> {
    let mut screen = load(config).await?;
    if let Some(error) = screen.error() {
        anyhow::bail!("{error}");
    }

    screen.begin_edit();
    if let Some(draft) = screen.draft_mut() {
        if let Some(bio) = bio {
            draft.bio = bio;
        }
        if let Some(tags) = tags {
            draft.tags = tags;
        }
    }
    screen.submit_edit().await;

    if screen.take_edit_saved() {
        screen.load().await;
        render(&screen);
        Ok(())
    } else {
        anyhow::bail!("{}", screen.error().unwrap_or("Error updating profile"))
    }
}

pub async fn upload(config: &Config, file: &Path) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());

    let mut screen = load(config).await?;
    if let Some(error) = screen.error() {
        anyhow::bail!("{error}");
    }

    screen.select_file(file_name, bytes);
    screen.upload_avatar().await;

    match screen.error() {
        Some(error) => anyhow::bail!("{error}"),
        None => {
            if let Some(image) = screen
                .profile()
                .and_then(|profile| profile.profile_image.as_deref())
            {
                println!("Profile picture updated: {image}");
            }
            Ok(())
        }
    }
}

fn render(screen: &Profile) {
    if let Some(error) = screen.error() {
        println!("{error}");
        return;
    }

    match screen.profile() {
        Some(profile) => {
            println!("{}", profile.username);
            println!("{}", screen.display_bio());
            println!(
                "Posts: {}  Followers: {}  Following: {}",
                profile.posts_count, profile.followers_count, profile.following_count
            );
            if let Some(tags) = &profile.tags {
                let tags: Vec<String> = tags
                    .split(',')
                    .map(|tag| format!("#{}", tag.trim()))
                    .collect();
                println!("{}", tags.join(" "));
            }
        }
        None => println!("Profile not found"),
    }
}
