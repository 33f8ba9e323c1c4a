use std::any::Any;
use std::panic;
use std::process::ExitCode;

use projmap::args::{ParsedArgs, parse_args};
use projmap::colors::Painter;
use projmap::config::ProjmapConfig;
use projmap::{Mode, Options, OutputMode, imports, sort_object_keys};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

const USAGE: &str = "projmap - Project structure and dependency mapping\n\n\
Usage: projmap [root] [options]\n\n\
Modes:\n  \
  --deps (default)          Project dependency map (project -> imported projects)\n  \
  --tree                    Directory structure tree with duplicate-name validation\n\n\
Options:\n  \
  --ext <list>              Comma-separated source extensions (default: ts)\n  \
  -I, --ignore <glob>       Ignore glob relative to root (repeatable)\n  \
  -L, --max-depth <n>       Limit walk depth (0 = direct children only)\n  \
  -H, --show-hidden         Include dotfiles\n  \
  --json                    JSON output instead of human-readable view\n  \
  --sorted                  Canonicalize output (sort mapping keys recursively)\n  \
  --color <mode>            auto|always|never (default: auto)\n  \
  --verbose                 Progress details on stderr\n  \
  --help, -h                Show this message\n  \
  --version, -V             Show version\n\n\
Configuration:\n  \
  Optional .projmap.toml in the scan root:\n    \
    [scan]\n    \
    extensions = [\"ts\", \"tsx\"]\n    \
    ignore = [\"**/node_modules/**\"]\n  \
  CLI flags override config values.\n\n\
Examples:\n  \
  projmap                               # Dependency map of the current dir\n  \
  projmap --tree packages               # Structure tree, duplicate check\n  \
  projmap --json --sorted | jq .        # Canonical JSON for diffing\n";

fn main() -> ExitCode {
    install_broken_pipe_handler();

    let parsed = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if parsed.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    if parsed.show_version {
        println!("projmap {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let painter = Painter::new(parsed.color);
    match run(&parsed, &painter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", painter.error("error:"));
            ExitCode::FAILURE
        }
    }
}

/// Merge CLI flags over the config file over built-in defaults.
fn resolve_options(parsed: &ParsedArgs, config: &ProjmapConfig) -> Options {
    let mut options = Options::default();

    if let Some(extensions) = &parsed.extensions {
        options.extensions = extensions.clone();
    } else if !config.scan.extensions.is_empty() {
        options.extensions = config
            .scan
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect();
    }

    if !parsed.ignore_patterns.is_empty() {
        options.ignore_patterns = parsed.ignore_patterns.clone();
    } else {
        options.ignore_patterns = config.scan.ignore.clone();
    }

    options.max_depth = parsed.max_depth;
    options.show_hidden = parsed.show_hidden;
    options.color = parsed.color;
    options.output = parsed.output;
    options.sorted = parsed.sorted;
    options.verbose = parsed.verbose;
    options
}

fn run(parsed: &ParsedArgs, painter: &Painter) -> anyhow::Result<()> {
    let config = ProjmapConfig::load(&parsed.root);
    let options = resolve_options(parsed, &config);

    if options.verbose {
        let mut exts: Vec<_> = options.extensions.iter().cloned().collect();
        exts.sort();
        eprintln!(
            "[projmap] scanning {} for .{}",
            parsed.root.display(),
            exts.join(", .")
        );
    }

    match parsed.mode {
        Mode::Deps => run_deps(parsed, &options, painter),
        Mode::Tree => run_tree(parsed, &options, painter),
    }
}

fn run_deps(parsed: &ParsedArgs, options: &Options, painter: &Painter) -> anyhow::Result<()> {
    // The parser is handed in here, at the call boundary; the aggregator has
    // no baked-in default. Path context is attached by this closure so the
    // core stays silent about collaborator failures.
    let mut map = projmap::read_project(&parsed.root, options, |path| {
        imports::parse_imports(path).map_err(|err| {
            std::io::Error::new(err.kind(), format!("{}: {err}", path.display()))
        })
    })?;

    if map.is_empty() {
        eprintln!("{}", painter.warn("[projmap] no source files matched"));
    } else if options.verbose {
        eprintln!("[projmap] {} projects", map.len());
    }

    if options.sorted {
        let canonical = sort_object_keys(serde_json::to_value(&map)?);
        map = serde_json::from_value(canonical)?;
    }

    match options.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&map)?),
        OutputMode::Human => {
            for (project, deps) in &map {
                if deps.is_empty() {
                    println!("{}", painter.bold(project));
                } else {
                    println!("{} -> {}", painter.bold(project), deps.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn run_tree(parsed: &ParsedArgs, options: &Options, painter: &Painter) -> anyhow::Result<()> {
    // Validation errors are surfaced verbatim; the duplicate-directory
    // message already names every offending directory.
    let mut tree = projmap::directory_object(&parsed.root, options)?;

    if options.sorted {
        let canonical = sort_object_keys(serde_json::to_value(&tree)?);
        tree = serde_json::from_value(canonical)?;
    }

    match options.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputMode::Human => {
            println!("{}", painter.bold(&parsed.root.display().to_string()));
            print!("{}", projmap::tree::render_tree(&tree, painter));
        }
    }
    Ok(())
}
