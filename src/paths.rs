use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Where settings.json and catalog.json live.
pub static PATH_DATA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME")
        && !xdg_data_home.is_empty()
    {
        return PathBuf::from(xdg_data_home).join("savekeep");
    }
    PATH_LOCAL_SHARE.join("savekeep")
});

pub static PATH_DEFAULT_BACKUPS: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_HOME.join("SaveBackups"));

/// Steam's userdata directory, if a Steam install can be located.
pub fn steam_userdata_dir() -> Option<PathBuf> {
    let steam_dir = steamlocate::SteamDir::locate().ok()?;
    let userdata = steam_dir.path().join("userdata");
    userdata.is_dir().then_some(userdata)
}
