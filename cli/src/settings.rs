use anyhow::Result;
use clap::Args;
use skillet_core::{PrefsStore, ProfileService, ThemeService};

#[derive(Args)]
pub struct ProfileArgs {
    /// Set the display name
    #[arg(long)]
    set_name: Option<String>,
    /// Set the profile picture URI
    #[arg(long)]
    set_picture: Option<String>,
    /// Clear the profile picture
    #[arg(long, conflicts_with = "set_picture")]
    clear_picture: bool,
}

pub fn theme(toggle: bool) -> Result<()> {
    let mut service = ThemeService::load(PrefsStore::open_default());

    if toggle {
        let mode = service.toggle()?;
        println!("Theme set to {}", mode.as_str());
    } else {
        println!("Theme: {}", service.mode().as_str());
    }

    Ok(())
}

pub fn profile(args: ProfileArgs) -> Result<()> {
    let mut service = ProfileService::load(PrefsStore::open_default());

    if let Some(name) = &args.set_name {
        service.set_name(name)?;
    }
    if args.clear_picture {
        service.set_picture(None)?;
    } else if let Some(picture) = args.set_picture.as_deref() {
        service.set_picture(Some(picture))?;
    }

    let profile = service.profile();
    println!("Name: {}", profile.name);
    match &profile.profile_picture {
        Some(picture) => println!("Picture: {}", picture),
        None => println!("Picture: (none)"),
    }

    Ok(())
}
