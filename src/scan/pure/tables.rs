// Static discovery data

use crate::catalog::Platform;
use crate::scan::types::KnownApplication;

/// Where each store's games usually keep their saves
pub const PLATFORM_ROOTS: &[(Platform, &[&str])] = &[
    (
        Platform::Steam,
        &[
            "%USERPROFILE%/Documents/My Games",
            "%APPDATA%",
            "%LOCALAPPDATA%",
            "%USERPROFILE%/Saved Games",
            "C:/Program Files (x86)/Steam/userdata",
            "C:/Program Files/Steam/userdata",
        ],
    ),
    (
        Platform::Epic,
        &["%LOCALAPPDATA%/EpicGamesLauncher/Saved", "%USERPROFILE%/Documents/My Games"],
    ),
    (
        Platform::Uplay,
        &["%USERPROFILE%/Documents/My Games", "%APPDATA%/Ubisoft"],
    ),
    (
        Platform::Origin,
        &["%USERPROFILE%/Documents/Electronic Arts", "%LOCALAPPDATA%/Electronic Arts"],
    ),
    (
        Platform::Gog,
        &["%USERPROFILE%/Documents/My Games", "%APPDATA%/GOG.com"],
    ),
    (
        Platform::Xbox,
        &["%LOCALAPPDATA%/Packages", "%USERPROFILE%/Documents/My Games"],
    ),
];

pub const KNOWN_APPLICATIONS: &[KnownApplication] = &[
    KnownApplication {
        id: "elden-ring",
        name: "Elden Ring",
        platform: Platform::Steam,
        save_paths: &["%APPDATA%/EldenRing"],
        patterns: &["*.sl2"],
        publisher: "FromSoftware",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "dark-souls-3",
        name: "Dark Souls III",
        platform: Platform::Steam,
        save_paths: &["%APPDATA%/DarkSoulsIII"],
        patterns: &["*.sl2"],
        publisher: "FromSoftware",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "cyberpunk-2077",
        name: "Cyberpunk 2077",
        platform: Platform::Multiple,
        save_paths: &["%USERPROFILE%/Saved Games/CD Projekt Red/Cyberpunk 2077"],
        patterns: &["*.dat", "*.json"],
        publisher: "CD Projekt RED",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "witcher-3",
        name: "The Witcher 3: Wild Hunt",
        platform: Platform::Multiple,
        save_paths: &["%USERPROFILE%/Documents/The Witcher 3"],
        patterns: &["*.sav"],
        publisher: "CD Projekt RED",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "skyrim-se",
        name: "The Elder Scrolls V: Skyrim Special Edition",
        platform: Platform::Steam,
        save_paths: &["%USERPROFILE%/Documents/My Games/Skyrim Special Edition"],
        patterns: &["*.ess", "*.skse"],
        publisher: "Bethesda",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "fallout-4",
        name: "Fallout 4",
        platform: Platform::Steam,
        save_paths: &["%USERPROFILE%/Documents/My Games/Fallout4"],
        patterns: &["*.fos", "*.f4se"],
        publisher: "Bethesda",
        genre: "Action RPG",
    },
    KnownApplication {
        id: "minecraft",
        name: "Minecraft",
        platform: Platform::Multiple,
        save_paths: &["%APPDATA%/.minecraft/saves"],
        patterns: &["level.dat", "*.mca", "*.dat"],
        publisher: "Mojang Studios",
        genre: "Sandbox",
    },
];
