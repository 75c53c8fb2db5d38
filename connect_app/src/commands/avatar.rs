//! Local avatar overrides, preferred over server images in the directory.

use connect_api::avatar::AvatarOverrides;

use crate::config::Config;

pub fn set(config: &Config, username: String, image: String) -> anyhow::Result<()> {
    let path = config.avatars_path();
    let mut overrides = AvatarOverrides::load(&path)?;
    overrides.set(username.clone(), image);
    overrides.save(&path)?;

    println!("Stored avatar override for {username}.");
    Ok(())
}

pub fn clear(config: &Config, username: &str) -> anyhow::Result<()> {
    let path = config.avatars_path();
    let mut overrides = AvatarOverrides::load(&path)?;

    match overrides.remove(username) {
        Some(_) => {
            overrides.save(&path)?;
            println!("Removed avatar override for {username}.");
        }
        None => println!("No avatar override for {username}."),
    }
    Ok(())
}
