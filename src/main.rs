use std::io::{self, Read, Write};
use std::path::Path;
use txt2boil::{Language, langs, update};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut failed = false;
    if config.files.is_empty() {
        failed |= !update_stream(None, &config);
    } else {
        for file in &config.files {
            let source = if file == "-" { None } else { Some(file.as_str()) };
            failed |= !update_stream(source, &config);
        }
    }
    if failed {
        std::process::exit(1);
    }
}

struct CliConfig {
    files: Vec<String>,
    lang: Option<String>,
    inplace: bool,
}

/// Rewrite one input (a path, or stdin when `None`). Returns false on
/// failure after printing a diagnostic.
fn update_stream(file: Option<&str>, config: &CliConfig) -> bool {
    let name = file.unwrap_or("<stdin>");
    let text = match read_input(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("txt2boil: {name}: {err}");
            return false;
        }
    };

    let lang = match language_for(config, file) {
        Ok(lang) => lang,
        Err(err) => {
            eprintln!("txt2boil: {name}: {err}");
            return false;
        }
    };

    let out = match update(&text, &lang) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("txt2boil: {name}: {err}");
            return false;
        }
    };

    let result = match file {
        Some(path) if config.inplace => std::fs::write(path, out),
        _ => io::stdout().write_all(out.as_bytes()),
    };
    if let Err(err) = result {
        eprintln!("txt2boil: {name}: {err}");
        return false;
    }
    true
}

fn read_input(file: Option<&str>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Resolve the language: an explicit `--lang` wins, then the file
/// extension, then Racket (the original tool's default).
fn language_for(config: &CliConfig, file: Option<&str>) -> Result<Language, String> {
    if let Some(name) = &config.lang {
        return langs::by_name(name).ok_or_else(|| format!("error: unknown language '{name}'"));
    }
    Ok(file.and_then(|f| langs::for_path(Path::new(f))).unwrap_or_else(langs::racket))
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig { files: Vec::new(), lang: None, inplace: false };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("txt2boil {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-i" | "--inplace" => config.inplace = true,
            "-l" | "--lang" => {
                let value = args.next().ok_or_else(|| "error: --lang expects a value".to_string())?;
                config.lang = Some(value);
            }
            "--" => {
                config.files.extend(args);
                break;
            }
            _ if arg.starts_with("--lang=") => {
                config.lang = Some(arg.trim_start_matches("--lang=").to_string());
            }
            "-" => config.files.push(arg),
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => config.files.push(arg),
        }
    }

    if config.inplace && (config.files.is_empty() || config.files.iter().any(|f| f == "-")) {
        return Err("error: --inplace needs file arguments".to_string());
    }

    Ok(config)
}

fn print_help() {
    println!(
        "txt2boil {version}

Boilerplate generator driven by directive comments.

Usage:
  txt2boil [OPTIONS] [FILES...]

Reads each file (or stdin when no files are given, or for '-'), regenerates
the code block after every generation-directive comment, and writes the
result to stdout.

Options:
  -i, --inplace        Write each result back to its file.
  -l, --lang <name>    Language preset to use (racket, python, shell, c,
                       c++, java, unknown). Default: by file extension,
                       falling back to racket.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  A file could not be read, rewritten, or written.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
