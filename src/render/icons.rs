//! Icon classification for tree rows
//!
//! Files are classified by extension and directories by name, both through
//! plain lookup tables so the mapping can be inspected and tested without
//! drawing anything. Every icon has a Nerd Fonts glyph and an ASCII
//! fallback for terminals without a patched font.

use crate::tree::TreeNode;

/// Icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Folder,
    FolderOpen,
    File,
    FileText,
    FileCode,
    FileJson,
    FileImage,
    FileAudio,
    FileVideo,
    Package,
    GitBranch,
    Book,
    Database,
    Settings,
    Terminal,
    Key,
    Lock,
    Shield,
    FolderDot,
    FolderKanban,
    FolderTree,
}

impl Icon {
    /// Nerd Fonts glyph
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Folder => "\u{f07b}",       //  (folder closed)
            Icon::FolderOpen => "\u{f07c}",   //  (folder open)
            Icon::File => "\u{f15b}",         //
            Icon::FileText => "\u{f0f6}",     //
            Icon::FileCode => "\u{f1c9}",     //
            Icon::FileJson => "\u{e60b}",     //
            Icon::FileImage => "\u{f1c5}",    //
            Icon::FileAudio => "\u{f1c7}",    //
            Icon::FileVideo => "\u{f1c8}",    //
            Icon::Package => "\u{f487}",      //
            Icon::GitBranch => "\u{e725}",    //
            Icon::Book => "\u{f02d}",         //
            Icon::Database => "\u{f1c0}",     //
            Icon::Settings => "\u{f013}",     //
            Icon::Terminal => "\u{f120}",     //
            Icon::Key => "\u{f084}",          //
            Icon::Lock => "\u{f023}",         //
            Icon::Shield => "\u{f132}",       //
            Icon::FolderDot => "\u{f114}",    //
            Icon::FolderKanban => "\u{f0ce}", //
            Icon::FolderTree => "\u{f0e8}",   //
        }
    }

    /// Three-column ASCII stand-in
    pub fn ascii(self) -> &'static str {
        match self {
            Icon::Folder => "[+]",
            Icon::FolderOpen => "[-]",
            Icon::File => " - ",
            Icon::FileText => "txt",
            Icon::FileCode => "</>",
            Icon::FileJson => "{ }",
            Icon::FileImage => "img",
            Icon::FileAudio => "snd",
            Icon::FileVideo => "vid",
            Icon::Package => "pkg",
            Icon::GitBranch => "git",
            Icon::Book => "doc",
            Icon::Database => "db ",
            Icon::Settings => "cfg",
            Icon::Terminal => "$_ ",
            Icon::Key => "key",
            Icon::Lock => "lck",
            Icon::Shield => "tst",
            Icon::FolderDot => "[.]",
            Icon::FolderKanban => "[=]",
            Icon::FolderTree => "[*]",
        }
    }

    /// Glyph or ASCII form depending on whether icons are enabled
    pub fn symbol(self, icons_enabled: bool) -> &'static str {
        if icons_enabled {
            self.glyph()
        } else {
            self.ascii()
        }
    }
}

/// Extension groups (lowercase) and their icons.
/// Archives map to the generic file icon.
pub const FILE_ICONS: &[(&[&str], Icon)] = &[
    (
        &["js", "jsx", "ts", "tsx", "html", "htm", "css", "scss", "less"],
        Icon::FileCode,
    ),
    (&["json"], Icon::FileJson),
    (&["md", "txt"], Icon::FileText),
    (&["png", "jpg", "jpeg", "gif", "svg"], Icon::FileImage),
    (&["mp3", "wav"], Icon::FileAudio),
    (&["mp4", "mov"], Icon::FileVideo),
    (&["zip", "tar", "gz"], Icon::File),
    (&["lock"], Icon::Lock),
    (&["env"], Icon::Key),
    (&["git"], Icon::GitBranch),
    (&["db", "sqlite"], Icon::Database),
    (&["config", "settings"], Icon::Settings),
    (&["sh", "bash", "zsh"], Icon::Terminal),
];

/// Well-known folder names (lowercase) with a dedicated icon. These show
/// the same icon whether open or closed; any other folder falls back to
/// the open/closed folder pair.
pub const FOLDER_ICONS: &[(&[&str], Icon)] = &[
    (&["node_modules"], Icon::Package),
    (&[".git"], Icon::GitBranch),
    (&["docs", "documentation"], Icon::Book),
    (&["database", "db"], Icon::Database),
    (&["config"], Icon::Settings),
    (&["scripts"], Icon::Terminal),
    (&["tests", "__tests__"], Icon::Shield),
    (&["hooks"], Icon::Key),
    (&["ipc"], Icon::FolderDot),
    (&["shared"], Icon::FolderKanban),
    (&["utils"], Icon::FolderTree),
];

fn lookup(table: &[(&[&str], Icon)], key: &str) -> Option<Icon> {
    table
        .iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, icon)| *icon)
}

/// Lowercased text after the last `.`; a name without a dot is its own extension
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Icon for a file name, generic file icon when the extension is unknown
pub fn file_icon(name: &str) -> Icon {
    lookup(FILE_ICONS, &extension(name)).unwrap_or(Icon::File)
}

/// Icon for a directory name
pub fn folder_icon(name: &str, expanded: bool) -> Icon {
    match lookup(FOLDER_ICONS, &name.to_lowercase()) {
        Some(icon) => icon,
        None if expanded => Icon::FolderOpen,
        None => Icon::Folder,
    }
}

/// Icon for a tree node
pub fn node_icon(node: &TreeNode, expanded: bool) -> Icon {
    if node.is_dir {
        folder_icon(&node.name, expanded)
    } else {
        file_icon(&node.name)
    }
}
