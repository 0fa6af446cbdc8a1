use std::path::{Path, PathBuf};
use std::process::ExitCode;

use autowidth::{AutoWidthOptions, ControllerId, OptionsError, Page, TriggerOutcome};
use dom::{Document, ElementId, InputEvent};
use gfx::EguiTextMeasurer;
use input_core::{KeyDescriptor, Modifiers, key_codes};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const STYLE: &str = "input { font-size: 16px; font-family: sans-serif; padding: 0 2px } \
                     .search { letter-spacing: 0.5px }";

#[derive(Debug)]
enum DemoError {
    Usage,
    Read { path: PathBuf, source: std::io::Error },
    Options { path: PathBuf, source: OptionsError },
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Usage => write!(f, "usage: autowidth-demo [options.toml]"),
            DemoError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            DemoError::Options { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Usage => None,
            DemoError::Read { source, .. } => Some(source),
            DemoError::Options { source, .. } => Some(source),
        }
    }
}

fn load_options(path: &Path) -> Result<AutoWidthOptions, DemoError> {
    let source = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    AutoWidthOptions::from_toml_str(&source).map_err(|source| DemoError::Options {
        path: path.to_path_buf(),
        source,
    })
}

fn options_from_args() -> Result<AutoWidthOptions, DemoError> {
    let mut args = std::env::args_os().skip(1);
    let options = match args.next() {
        Some(path) => load_options(Path::new(&path))?,
        None => AutoWidthOptions::default()
            .with_min_width(40.0)
            .with_max_width(320.0)
            .with_cache(),
    };
    if args.next().is_some() {
        return Err(DemoError::Usage);
    }
    Ok(options)
}

fn report(page: &Page, input: ElementId, step: &str, outcomes: &[(ControllerId, TriggerOutcome)]) {
    let doc = page.document();
    let width = doc
        .element(input)
        .and_then(|el| el.style_property("width"))
        .unwrap_or("-");
    let resized = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, TriggerOutcome::Resized { .. }))
        .count();
    println!(
        "{step:<24} value={:<22} width={width:<8} resizes={resized}",
        format!("{:?}", doc.value(input))
    );
}

fn run(options: AutoWidthOptions) {
    let mut doc = Document::new();
    doc.add_style_sheet(STYLE);
    let input = doc.create_element("input");
    doc.set_attribute(input, "class", "search");
    doc.set_attribute(input, "placeholder", "Search...");
    let body = doc.body();
    doc.append_child(body, input);

    let mut page = Page::new(doc, Box::new(EguiTextMeasurer::headless()));
    let id = page.attach(input, options);
    report(&page, input, "attach", &[]);

    let outcomes = page.type_text(input, "Hello world");
    report(&page, input, "type \"Hello world\"", &outcomes);

    let backspace = KeyDescriptor::new(key_codes::BACKSPACE);
    for _ in 0..5 {
        let outcomes = page.press_key(input, backspace, Modifiers::NONE);
        report(&page, input, "backspace", &outcomes);
    }

    page.document_mut().select_all(input);
    let outcomes = page.press_key(input, KeyDescriptor::new(key_codes::DELETE), Modifiers::NONE);
    report(&page, input, "select all + delete", &outcomes);

    let outcomes = page.press_key(input, KeyDescriptor::new(86), Modifiers::META);
    report(&page, input, "cmd+v (skipped)", &outcomes);

    let outcomes = page.dispatch(&InputEvent::blur(input));
    report(&page, input, "blur", &outcomes);

    if let Some(cache) = page.controller(id).and_then(|c| c.cache()) {
        println!("cached widths: {}", cache.len());
    }
    page.detach(id);
    println!(
        "listeners after detach: {}",
        page.document().listener_count(input)
    );
}

fn main() -> ExitCode {
    match options_from_args() {
        Ok(options) => {
            run(options);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("autowidth-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
