//! The command tables.
//!
//! Two profiles exist. `core` holds exactly the implemented commands.
//! `extended` appends a larger catalogue of familiar Unix names that are
//! declared without handlers: they show up in `help` and autocomplete and
//! answer with a "not implemented" message instead of "command not found".

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use rterm_core::{Interpreter, Registry, RegistryEntry, ShellResult};
use serde::Deserialize;

use crate::{
    cat::CatCommand, cd::CdCommand, clear::ClearCommand, cp::CpCommand, date::DateCommand,
    echo::EchoCommand, find::FindCommand, grep::GrepCommand, head::HeadCommand, help::HelpCommand,
    kill::KillCommand, ls::LsCommand, mkdir::MkdirCommand, mv::MvCommand, ps::PsCommand,
    pwd::PwdCommand, rm::RmCommand, rmdir::RmdirCommand, tail::TailCommand, touch::TouchCommand,
    whoami::WhoamiCommand,
};

/// Which command table an interpreter is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryProfile {
    #[default]
    Core,
    Extended,
}

impl RegistryProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryProfile::Core => "core",
            RegistryProfile::Extended => "extended",
        }
    }
}

impl fmt::Display for RegistryProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(RegistryProfile::Core),
            "extended" => Ok(RegistryProfile::Extended),
            other => Err(format!("unknown registry profile '{other}' (expected 'core' or 'extended')")),
        }
    }
}

static CORE_COMMANDS: &[RegistryEntry] = &[
    RegistryEntry::implemented("ls", "List directory contents", &LsCommand),
    RegistryEntry::implemented("cd", "Change directory (cd .. to go up)", &CdCommand),
    RegistryEntry::implemented("pwd", "Print working directory", &PwdCommand),
    RegistryEntry::implemented("mkdir", "Create a new directory", &MkdirCommand),
    RegistryEntry::implemented("rm", "Remove a file", &RmCommand),
    RegistryEntry::implemented("rmdir", "Remove an empty directory", &RmdirCommand),
    RegistryEntry::implemented("touch", "Create or update a file", &TouchCommand),
    RegistryEntry::implemented("cat", "Display file contents", &CatCommand),
    RegistryEntry::implemented("echo", "Print text to terminal", &EchoCommand),
    RegistryEntry::implemented("clear", "Clear the terminal screen", &ClearCommand),
    RegistryEntry::implemented("mv", "Move or rename files", &MvCommand),
    RegistryEntry::implemented("cp", "Copy files", &CpCommand),
    RegistryEntry::implemented("head", "Show first 10 lines of a file", &HeadCommand),
    RegistryEntry::implemented("tail", "Show last 10 lines of a file", &TailCommand),
    RegistryEntry::implemented("grep", "Search for text in files", &GrepCommand),
    RegistryEntry::implemented("find", "Find files by name", &FindCommand),
    RegistryEntry::implemented("whoami", "Show current user", &WhoamiCommand),
    RegistryEntry::implemented("date", "Show current date and time", &DateCommand),
    RegistryEntry::implemented("ps", "Show running processes", &PsCommand),
    RegistryEntry::implemented("kill", "Terminate a process by PID", &KillCommand),
    RegistryEntry::implemented("help", "Show this help message", &HelpCommand),
];

static DECLARED_COMMANDS: &[RegistryEntry] = &[
    // Viewing and text processing
    RegistryEntry::declared("less", "View file contents page by page"),
    RegistryEntry::declared("more", "View file contents screen by screen"),
    RegistryEntry::declared("wc", "Count lines, words and bytes"),
    RegistryEntry::declared("sort", "Sort lines of text"),
    RegistryEntry::declared("uniq", "Filter repeated lines"),
    RegistryEntry::declared("cut", "Select columns from each line"),
    RegistryEntry::declared("tr", "Translate or delete characters"),
    RegistryEntry::declared("sed", "Stream editor"),
    RegistryEntry::declared("awk", "Pattern scanning and processing"),
    RegistryEntry::declared("diff", "Compare files line by line"),
    RegistryEntry::declared("tee", "Copy input to files and output"),
    RegistryEntry::declared("xargs", "Build command lines from input"),
    RegistryEntry::declared("nano", "Simple text editor"),
    RegistryEntry::declared("vim", "Vi improved text editor"),
    // Files and permissions
    RegistryEntry::declared("ln", "Create links between files"),
    RegistryEntry::declared("chmod", "Change file permissions"),
    RegistryEntry::declared("chown", "Change file owner"),
    RegistryEntry::declared("stat", "Show file status"),
    RegistryEntry::declared("file", "Determine file type"),
    RegistryEntry::declared("tree", "Show directory tree"),
    RegistryEntry::declared("du", "Estimate file space usage"),
    RegistryEntry::declared("df", "Report file system disk space"),
    RegistryEntry::declared("which", "Locate a command"),
    // Archives
    RegistryEntry::declared("tar", "Archive files"),
    RegistryEntry::declared("zip", "Package and compress files"),
    RegistryEntry::declared("unzip", "Extract zip archives"),
    RegistryEntry::declared("gzip", "Compress files"),
    RegistryEntry::declared("gunzip", "Decompress files"),
    // System
    RegistryEntry::declared("free", "Show memory usage"),
    RegistryEntry::declared("uptime", "Show how long the system has been running"),
    RegistryEntry::declared("top", "Show live process activity"),
    RegistryEntry::declared("uname", "Print system information"),
    RegistryEntry::declared("hostname", "Show the system host name"),
    RegistryEntry::declared("id", "Print user and group ids"),
    RegistryEntry::declared("groups", "Print group memberships"),
    RegistryEntry::declared("env", "Show environment variables"),
    RegistryEntry::declared("export", "Set an environment variable"),
    RegistryEntry::declared("history", "Show command history"),
    RegistryEntry::declared("alias", "Define a command alias"),
    RegistryEntry::declared("jobs", "List background jobs"),
    RegistryEntry::declared("bg", "Resume a job in the background"),
    RegistryEntry::declared("fg", "Bring a job to the foreground"),
    RegistryEntry::declared("sleep", "Pause for a number of seconds"),
    RegistryEntry::declared("man", "Show a command manual"),
    RegistryEntry::declared("cal", "Show a calendar"),
    RegistryEntry::declared("bc", "Arbitrary precision calculator"),
    RegistryEntry::declared("exit", "Close the session"),
    // Network
    RegistryEntry::declared("curl", "Transfer data from a URL"),
    RegistryEntry::declared("wget", "Download files from the web"),
    RegistryEntry::declared("ping", "Send ICMP echo requests"),
    RegistryEntry::declared("ssh", "Open a secure shell connection"),
    RegistryEntry::declared("ifconfig", "Show network interfaces"),
    RegistryEntry::declared("netstat", "Show network connections"),
];

static CORE_REGISTRY: LazyLock<Arc<Registry>> =
    LazyLock::new(|| Arc::new(Registry::new(CORE_COMMANDS.iter().copied())));

static EXTENDED_REGISTRY: LazyLock<Arc<Registry>> = LazyLock::new(|| {
    Arc::new(Registry::new(
        CORE_COMMANDS.iter().chain(DECLARED_COMMANDS).copied(),
    ))
});

/// Shared, immutable registry for `profile`.
pub fn registry(profile: RegistryProfile) -> Arc<Registry> {
    match profile {
        RegistryProfile::Core => Arc::clone(&CORE_REGISTRY),
        RegistryProfile::Extended => Arc::clone(&EXTENDED_REGISTRY),
    }
}

/// A fresh interpreter for `profile`, starting in `root`.
pub fn interpreter(profile: RegistryProfile, root: impl AsRef<Path>) -> ShellResult<Interpreter> {
    Interpreter::with_root(registry(profile), root)
}
