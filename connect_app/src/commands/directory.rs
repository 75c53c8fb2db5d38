//! The all-users screen on the terminal.

use std::sync::Arc;

use connect_api::avatar::AvatarOverrides;
use connect_api::http::HttpConnectApi;
use connect_api::session::FileSession;
use connect_core::UserId;
use connect_screens::directory::{FollowState, UserDirectory};

use crate::config::Config;
use crate::notify::TerminalNotifier;

type Directory = UserDirectory<HttpConnectApi, Arc<FileSession>, AvatarOverrides, TerminalNotifier>;

fn build(config: &Config) -> anyhow::Result<Directory> {
    let session = super::load_session(config)?;
    let api = super::http_api(config, &session);
    let avatars = AvatarOverrides::load(&config.avatars_path())?;
    Ok(UserDirectory::new(api, session, avatars, super::notifier()))
}

pub async fn users(config: &Config) -> anyhow::Result<()> {
    let mut directory = build(config)?;
    directory.load().await;
    render(&directory);
    Ok(())
}

pub async fn follow(config: &Config, user_id: &str) -> anyhow::Result<()> {
    let mut directory = build(config)?;
    directory.load().await;

    let id = UserId::from(user_id);
    let Some(buttons) = directory.button_state(&id) else {
        anyhow::bail!("No user with id {user_id} in the directory.");
    };
    if buttons.follow_disabled {
        anyhow::bail!("Already following {user_id}.");
    }

    directory.follow(&id).await;
    render_entry(&directory, &id);
    Ok(())
}

pub async fn unfollow(config: &Config, user_id: &str) -> anyhow::Result<()> {
    let mut directory = build(config)?;
    directory.load().await;

    let id = UserId::from(user_id);
    let Some(buttons) = directory.button_state(&id) else {
        anyhow::bail!("No user with id {user_id} in the directory.");
    };
    if buttons.unfollow_disabled {
        anyhow::bail!("Not following {user_id}.");
    }

    directory.unfollow(&id).await;
    render_entry(&directory, &id);
    Ok(())
}

fn render(directory: &Directory) {
    if let Some(current) = directory.current_user() {
        println!("Logged in as {}", current.username);
        println!();
    }
    for entry in directory.entries() {
        let marker = match directory.follow_state(&entry.id) {
            Some(FollowState::Followed) | Some(FollowState::FollowPending) => "following",
            _ => "not following",
        };
        println!(
            "{:<20} {:<14} followers: {:<5} id: {}",
            entry.username, marker, entry.followers_count, entry.id.0
        );
    }
}

fn render_entry(directory: &Directory, user_id: &UserId) {
    if let Some(entry) = directory.entries().iter().find(|entry| &entry.id == user_id) {
        let marker = match directory.follow_state(user_id) {
            Some(FollowState::Followed) => "following",
            _ => "not following",
        };
        println!(
            "{}: {} (followers: {})",
            entry.username, marker, entry.followers_count
        );
    }
}
