//! Application configuration from CLI arguments

use std::env;
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use super::logging::init_file_logging;
use crate::error::{FiletreeError, Result};
use crate::integrate::{exit_code, Callback, OutputFormat};
use crate::tree::PathFilter;

/// Raw command-line options, before the config file is merged in
#[derive(Debug, Default)]
pub struct CliArgs {
    /// File holding the path list
    pub list_file: Option<PathBuf>,
    /// Read the path list from stdin
    pub stdin: bool,
    /// Tree output mode (non-interactive, output to stdout)
    pub tree_mode: bool,
    /// Maximum depth for tree output (None = unlimited)
    pub tree_depth: Option<usize>,
    /// Start with every directory open
    pub expand_all: bool,
    /// Pick mode (--pick option)
    pub pick_mode: bool,
    pub output_format: OutputFormat,
    /// Command run on every file selection
    pub on_select: Option<String>,
    /// Extra exclusion regexes
    pub exclude: Vec<String>,
    /// Disable the built-in exclusion patterns
    pub no_default_excludes: bool,
    /// Icons forced on or off
    pub icons: Option<bool>,
    /// Tracing log destination
    pub log_file: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--stdin" => parsed.stdin = true,
                "--tree" | "-t" => parsed.tree_mode = true,
                "--depth" => {
                    let Some(depth_str) = args.next() else {
                        anyhow::bail!("--depth requires a value");
                    };
                    let depth = depth_str
                        .parse::<usize>()
                        .ok()
                        .filter(|d| *d > 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "--depth requires a positive integer, got '{}'",
                                depth_str
                            )
                        })?;
                    parsed.tree_depth = Some(depth);
                }
                "--expand-all" => parsed.expand_all = true,
                "--pick" | "-p" => parsed.pick_mode = true,
                "--format" | "-f" => {
                    let Some(fmt) = args.next() else {
                        anyhow::bail!("--format requires a value (lines or json)");
                    };
                    parsed.output_format = OutputFormat::from_str(&fmt).map_err(|_| {
                        anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                    })?;
                }
                "--on-select" => {
                    let Some(cmd) = args.next() else {
                        anyhow::bail!("--on-select requires a command");
                    };
                    parsed.on_select = Some(cmd);
                }
                "--exclude" => {
                    let Some(pattern) = args.next() else {
                        anyhow::bail!("--exclude requires a pattern");
                    };
                    parsed.exclude.push(pattern);
                }
                "--no-default-excludes" => parsed.no_default_excludes = true,
                "--icons" | "-i" => parsed.icons = Some(true),
                "--no-icons" => parsed.icons = Some(false),
                "--log" => {
                    let Some(file) = args.next() else {
                        anyhow::bail!("--log requires a file path");
                    };
                    parsed.log_file = Some(PathBuf::from(file));
                }
                "--help" | "-h" => parsed.help = true,
                "--version" | "-V" => parsed.version = true,
                path if !path.starts_with('-') => {
                    if parsed.list_file.is_some() {
                        anyhow::bail!("Only one LIST_FILE may be given, got '{}' as well", path);
                    }
                    parsed.list_file = Some(PathBuf::from(path));
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(parsed)
    }
}

/// Application configuration from CLI args and config file
pub struct Config {
    /// Input paths, as given
    pub files: Vec<String>,
    /// Where the paths came from (shown as the tree title)
    pub source_label: String,
    pub filter: PathFilter,
    pub tree_mode: bool,
    pub tree_depth: Option<usize>,
    pub expand_all: bool,
    pub pick_mode: bool,
    pub output_format: OutputFormat,
    pub callback: Option<Callback>,
    /// Whether to show Nerd Fonts icons
    pub icons_enabled: bool,
    /// Enable mouse support (from config file)
    pub mouse_enabled: bool,
    /// Spaces per nesting level (from config file)
    pub indent_width: usize,
    /// Show the status bar (from config file)
    pub show_status_bar: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        let args = CliArgs::parse(env::args().skip(1))?;

        if args.help {
            print_help();
            std::process::exit(exit_code::SUCCESS);
        }
        if args.version {
            println!("ft {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(exit_code::SUCCESS);
        }

        // Logging first so config file warnings are recorded
        if let Some(path) = &args.log_file {
            init_file_logging(path)?;
        }

        let config_file = ConfigFile::load();
        let (files, source_label) = read_input(&args)?;
        Self::resolve(args, config_file, files, source_label, icons_from_env())
    }

    /// Merge CLI arguments over config file settings.
    /// CLI arguments take precedence, then the environment, then the file.
    pub fn resolve(
        args: CliArgs,
        config_file: ConfigFile,
        files: Vec<String>,
        source_label: String,
        env_icons: Option<bool>,
    ) -> anyhow::Result<Self> {
        let mut patterns = config_file.filter.extra_patterns;
        patterns.extend(args.exclude);
        let use_defaults = config_file.filter.use_default_patterns && !args.no_default_excludes;
        let filter = PathFilter::new(use_defaults, &patterns)?;

        let icons_enabled = args
            .icons
            .or(env_icons)
            .unwrap_or(config_file.general.enable_icons);

        Ok(Self {
            files,
            source_label,
            filter,
            tree_mode: args.tree_mode,
            tree_depth: args.tree_depth,
            expand_all: args.expand_all,
            pick_mode: args.pick_mode,
            output_format: args.output_format,
            callback: args.on_select.map(Callback::new),
            icons_enabled,
            mouse_enabled: config_file.general.mouse_enabled,
            indent_width: config_file.ui.indent_width.clamp(1, 8),
            show_status_bar: config_file.ui.show_status_bar,
            log_file: args.log_file,
        })
    }
}

/// `FILETREE_ICONS=0` / `false` disables icons, anything else enables them
fn icons_from_env() -> Option<bool> {
    env::var("FILETREE_ICONS")
        .ok()
        .map(|v| v != "0" && v.to_lowercase() != "false")
}

/// Read the path list from the list file or stdin
fn read_input(args: &CliArgs) -> Result<(Vec<String>, String)> {
    if args.stdin {
        if args.list_file.is_some() {
            return Err(FiletreeError::input(
                "--stdin cannot be combined with a LIST_FILE",
            ));
        }
        let stdin = io::stdin();

        // Check if stdin is a TTY (not piped)
        if stdin.is_terminal() {
            return Err(FiletreeError::input("--stdin requires piped input"));
        }

        let paths = read_path_lines(stdin.lock())?;
        if paths.is_empty() {
            return Err(FiletreeError::input("No paths provided via stdin"));
        }
        return Ok((paths, "stdin".to_string()));
    }

    let Some(list_file) = &args.list_file else {
        return Err(FiletreeError::input(
            "No path list given. Pass a LIST_FILE or pipe paths with --stdin",
        ));
    };

    let file = fs::File::open(list_file).map_err(|e| {
        FiletreeError::input(format!("Cannot read {}: {}", list_file.display(), e))
    })?;
    let paths = read_path_lines(io::BufReader::new(file))?;
    Ok((paths, list_file.display().to_string()))
}

/// One path per line; blank lines skipped, CRLF tolerated
pub fn read_path_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        paths.push(line.to_string());
    }
    Ok(paths)
}

fn print_help() {
    println!(
        r#"ft - render a list of paths as a collapsible file tree

USAGE:
    ft [OPTIONS] LIST_FILE
    command | ft --stdin [OPTIONS]

INPUT:
    LIST_FILE           File with one path per line
    --stdin             Read paths from stdin (one per line)

OPTIONS:
    -t, --tree          Print the tree to stdout (non-interactive)
    --depth N           Limit --tree output to N levels
    --expand-all        Start with every directory expanded
    -p, --pick          Pick mode: selecting a file exits and prints it
    -f, --format FMT    Output format for pick mode: lines, json
    --on-select CMD     Run command when a file is selected (use {{path}}, {{name}}, etc.)
    --exclude REGEX     Hide paths matching REGEX (repeatable)
    --no-default-excludes
                        Keep build output, lockfiles and temp files
    -i, --icons         Enable Nerd Fonts icons (default)
    --no-icons          Disable icons
    --log FILE          Write logs to FILE (level from FILETREE_LOG)
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/filetree/config.toml

ENVIRONMENT:
    FILETREE_ICONS=0    Disable icons
    FILETREE_LOG        Log filter, e.g. debug or filetree=trace

KEYBINDINGS:
    j/↓ k/↑     Move down / up
    g G         Go to top / bottom
    Enter/l/→   Open or close folder, select file
    h/←         Collapse folder or go to parent
    H L         Collapse all / expand all
    ?           Show help
    q/Esc       Quit (cancel in pick mode)

PLACEHOLDERS for --on-select:
    {{path}}    Full path
    {{dir}}     Parent directory
    {{name}}    Filename with extension
    {{stem}}    Filename without extension
    {{ext}}     Extension only

EXIT CODES:
    0           Success (normal exit or file selected)
    1           Cancelled (quit pick mode without selecting)
    2           Error (runtime error)
    3           Invalid arguments or input
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_flags() {
        let parsed = args(&["--tree", "--depth", "2", "--no-icons", "list.txt"]).unwrap();
        assert!(parsed.tree_mode);
        assert_eq!(parsed.tree_depth, Some(2));
        assert_eq!(parsed.icons, Some(false));
        assert_eq!(parsed.list_file, Some(PathBuf::from("list.txt")));
    }

    #[test]
    fn parse_repeatable_exclude() {
        let parsed = args(&["--exclude", "a", "--exclude", "b"]).unwrap();
        assert_eq!(parsed.exclude, vec!["a", "b"]);
    }

    #[test]
    fn parse_pick_and_format() {
        let parsed = args(&["-p", "-f", "json", "--on-select", "echo {path}"]).unwrap();
        assert!(parsed.pick_mode);
        assert_eq!(parsed.output_format, OutputFormat::Json);
        assert_eq!(parsed.on_select.as_deref(), Some("echo {path}"));
    }

    #[test]
    fn parse_errors() {
        assert!(args(&["--depth"]).is_err());
        assert!(args(&["--depth", "x"]).is_err());
        assert!(args(&["--depth", "0"]).is_err());
        assert!(args(&["--format", "xml"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn resolve_precedence_for_icons() {
        let mut file = ConfigFile::default();
        file.general.enable_icons = false;

        let config = Config::resolve(CliArgs::default(), file, vec![], String::new(), None).unwrap();
        assert!(!config.icons_enabled);

        let config = Config::resolve(
            CliArgs::default(),
            ConfigFile::default(),
            vec![],
            String::new(),
            Some(false),
        )
        .unwrap();
        assert!(!config.icons_enabled);

        let cli = CliArgs {
            icons: Some(true),
            ..Default::default()
        };
        let config = Config::resolve(cli, ConfigFile::default(), vec![], String::new(), Some(false)).unwrap();
        assert!(config.icons_enabled);
    }

    #[test]
    fn resolve_merges_patterns() {
        let mut file = ConfigFile::default();
        file.filter.extra_patterns = vec![r"\.log$".to_string()];
        let cli = CliArgs {
            exclude: vec!["^vendor/".to_string()],
            no_default_excludes: true,
            ..Default::default()
        };
        let config = Config::resolve(cli, file, vec![], String::new(), None).unwrap();
        assert!(config.filter.is_excluded("a.log"));
        assert!(config.filter.is_excluded("vendor/x.rs"));
        assert!(!config.filter.is_excluded("yarn.lock"));
    }

    #[test]
    fn resolve_rejects_bad_pattern() {
        let cli = CliArgs {
            exclude: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(Config::resolve(cli, ConfigFile::default(), vec![], String::new(), None).is_err());
    }

    #[test]
    fn resolve_clamps_indent() {
        let mut file = ConfigFile::default();
        file.ui.indent_width = 0;
        let config = Config::resolve(CliArgs::default(), file, vec![], String::new(), None).unwrap();
        assert_eq!(config.indent_width, 1);
    }

    #[test]
    fn read_lines_skips_blanks_and_crlf() {
        let input = "src/a.rs\r\n\n   \nREADME.md\n";
        let paths = read_path_lines(input.as_bytes()).unwrap();
        assert_eq!(paths, vec!["src/a.rs", "README.md"]);
    }
}
