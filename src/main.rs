//! weblight - print HTML, CSS and JavaScript files with syntax highlighting

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};

use weblight::config::Config;
use weblight::render::{self, Segment};
use weblight::syntax::{Color, HighlightCache, HighlightEngine, Style, Theme};
use weblight::{Error, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Command line options
#[derive(Debug, Default)]
struct Options {
    language: Option<String>,
    theme: Option<Theme>,
    line_numbers: bool,
    plain: bool,
    save_config: bool,
    files: Vec<PathBuf>,
}

fn run() -> Result<()> {
    let Some(options) = parse_args(env::args().skip(1))? else {
        return Ok(());
    };
    if options.files.is_empty() && !options.save_config {
        print_usage();
        return Err(Error::Message("no input files".into()));
    }

    let mut config = Config::load();
    if let Some(theme) = options.theme {
        config.theme = theme;
    }
    config.line_numbers |= options.line_numbers;
    if options.save_config {
        config.save()?;
        log::info!("saved settings");
    }
    let styled = !options.plain && io::stdout().is_terminal();

    let mut engine = HighlightEngine::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &options.files {
        let language = select_language(&options, &config, path);
        let kind = engine.set_language(&language);
        log::info!("{}: {}", path.display(), kind);

        let text = read_file(path)?;
        let lines: Vec<&str> = text.lines().collect();
        let mut cache = HighlightCache::new();
        cache.highlight(&engine, &lines);

        let gutter = lines.len().to_string().len();
        for (idx, line) in lines.iter().enumerate() {
            if config.line_numbers {
                queue!(out, Print(format!("{:>width$} ", idx + 1, width = gutter)))?;
            }
            let spans = cache.spans(idx).unwrap_or_default();
            print_line(&mut out, render::segments(line, spans), &config, styled)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Parse arguments; `None` means the invocation was fully handled
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("weblight {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--language" | "-l" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Message(format!("{} needs a value", arg)))?;
                options.language = Some(value);
            }
            "--theme" | "-t" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Message(format!("{} needs a value", arg)))?;
                let theme = Theme::from_name(&value)
                    .ok_or_else(|| Error::Message(format!("unknown theme: {}", value)))?;
                options.theme = Some(theme);
            }
            "--line-numbers" | "-n" => options.line_numbers = true,
            "--plain" | "-p" => options.plain = true,
            "--save-config" => options.save_config = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(Error::Message(format!("unknown option: {}", flag)));
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }

    Ok(Some(options))
}

/// An explicit `--language` wins over the config and the file extension
fn select_language(options: &Options, config: &Config, path: &Path) -> String {
    match (&options.language, config.highlighting) {
        (Some(language), _) => language.clone(),
        (None, true) => config.language_for_path(path),
        (None, false) => String::new(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
        _ => Error::Io(err),
    })
}

fn print_line(
    out: &mut impl Write,
    segments: Vec<Segment<'_>>,
    config: &Config,
    styled: bool,
) -> Result<()> {
    let mut column = 0;
    for segment in segments {
        let text = expand_tabs(segment.text, config.tab_width, &mut column);
        match segment.class {
            Some(class) if styled => {
                apply_style(out, config.theme.style(class))?;
                queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            _ => queue!(out, Print(text))?,
        }
    }
    queue!(out, Print("\n"))?;
    Ok(())
}

fn apply_style(out: &mut impl Write, text_style: Style) -> Result<()> {
    if text_style.fg != Color::Default {
        queue!(out, SetForegroundColor(terminal_color(text_style.fg)))?;
    }
    if text_style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if text_style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

/// Replace tabs with spaces up to the next tab stop
fn expand_tabs(text: &str, tab_width: usize, column: &mut usize) -> String {
    let tab_width = tab_width.max(1);
    let mut expanded = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - *column % tab_width;
            expanded.extend(std::iter::repeat(' ').take(pad));
            *column += pad;
        } else {
            expanded.push(ch);
            *column += 1;
        }
    }
    expanded
}

fn print_usage() {
    println!("weblight {} - syntax highlighting for web sources", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: weblight [OPTIONS] FILE...");
    println!();
    println!("Options:");
    println!("  -l, --language LANG  Force a language (html, css, javascript, json, xml, md)");
    println!("  -t, --theme THEME    Color theme (light, dark)");
    println!("  -n, --line-numbers   Show line numbers");
    println!("  -p, --plain          Print without colors");
    println!("      --save-config    Write the effective settings to ~/.weblight.toml");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.weblight.toml; set RUST_LOG=debug for diagnostics.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["-l", "css", "--theme", "dark", "-n", "a.txt"]))
            .unwrap()
            .unwrap();
        assert_eq!(options.language.as_deref(), Some("css"));
        assert_eq!(options.theme, Some(Theme::Dark));
        assert!(options.line_numbers);
        assert_eq!(options.files, vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["--language"])).is_err());
        assert!(parse_args(args(&["-t", "neon"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_expand_tabs() {
        let mut column = 0;
        assert_eq!(expand_tabs("a\tb", 4, &mut column), "a   b");
        assert_eq!(column, 5);
        assert_eq!(expand_tabs("\tc", 4, &mut column), "   c");
        assert_eq!(column, 9);
    }

    #[test]
    fn test_zero_tab_width() {
        let mut column = 0;
        assert_eq!(expand_tabs("\tx", 0, &mut column), " x");
    }

    #[test]
    fn test_language_flag_beats_config() {
        let options = parse_args(args(&["-l", "css", "page.html"])).unwrap().unwrap();
        let config = Config {
            highlighting: false,
            ..Config::default()
        };
        let path = Path::new("page.html");
        assert_eq!(select_language(&options, &config, path), "css");

        let options = parse_args(args(&["page.html"])).unwrap().unwrap();
        assert_eq!(select_language(&options, &config, path), "");
        assert_eq!(select_language(&options, &Config::default(), path), "html");
    }

    #[test]
    fn test_parse_save_config() {
        let options = parse_args(args(&["--save-config"])).unwrap().unwrap();
        assert!(options.save_config);
        assert!(options.files.is_empty());
    }

    #[test]
    fn test_print_line_plain() {
        let mut out = Vec::new();
        let config = Config::default();
        let segments = render::segments("a\tb", &[]);
        print_line(&mut out, segments, &config, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a   b\n");
    }
}
